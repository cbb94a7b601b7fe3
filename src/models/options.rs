use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A build option value: the host package manager only distinguishes
/// booleans and free-form strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Str(String),
}

impl OptionValue {
    /// The boolean value, if this option is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            OptionValue::Str(_) => None,
        }
    }

    /// The string value, if this option is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Bool(_) => None,
            OptionValue::Str(s) => Some(s),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{}", b),
            OptionValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        OptionValue::Bool(b)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Str(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Str(s)
    }
}

/// An ordered map of build options for one requirement. Ordering is by key
/// so rendered output and serialized recipes are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(BTreeMap<String, OptionValue>);

impl Options {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an option, replacing any previous value for the key
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up an option by key
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.0.get(key)
    }

    /// Look up a boolean option; non-boolean values yield None
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(OptionValue::as_bool)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate options in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.0.iter()
    }

    /// Validate option keys: non-empty, no whitespace
    pub fn validate(&self) -> Result<(), String> {
        for key in self.0.keys() {
            if key.is_empty() {
                return Err("Option key cannot be empty".to_string());
            }
            if key.chars().any(char::is_whitespace) {
                return Err(format!("Option key '{}' cannot contain whitespace", key));
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, OptionValue)> for Options {
    fn from_iter<I: IntoIterator<Item = (String, OptionValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
