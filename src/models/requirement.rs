use crate::models::options::Options;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `name@version` package reference
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageRef {
    /// Package name
    pub name: String,
    /// Exact version the recipe pins
    pub version: String,
}

impl PackageRef {
    /// Create a reference from already-split parts
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    /// Parse a `name@version` string
    pub fn parse(s: &str) -> Result<Self, String> {
        let (name, version) = s
            .split_once('@')
            .ok_or_else(|| format!("Invalid package reference '{}' (expected name@version)", s))?;

        let package_ref = Self::new(name, version);
        package_ref.validate()?;
        Ok(package_ref)
    }

    /// Validate the reference according to business rules
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Package name cannot be empty".to_string());
        }

        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        {
            return Err(format!(
                "Invalid package name '{}' (allowed: letters, digits, '-', '_', '.')",
                self.name
            ));
        }

        if self.version.is_empty() {
            return Err(format!("Package '{}' has an empty version", self.name));
        }

        if self.version.chars().any(char::is_whitespace) {
            return Err(format!(
                "Invalid version '{}' for package '{}' (cannot contain whitespace)",
                self.version, self.name
            ));
        }

        Ok(())
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

impl TryFrom<String> for PackageRef {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<PackageRef> for String {
    fn from(r: PackageRef) -> Self {
        r.to_string()
    }
}

/// A dependency requirement resolved for one target: package reference plus
/// the build options selected for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// The referenced package
    pub package: PackageRef,
    /// Build options passed to the package
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
}

impl Requirement {
    /// Create a requirement with no options
    pub fn new(package: PackageRef) -> Self {
        Self {
            package,
            options: Options::new(),
        }
    }

    /// Create a requirement with options
    pub fn with_options(package: PackageRef, options: Options) -> Self {
        Self { package, options }
    }

    /// Requirement identifier (name@version)
    pub fn identifier(&self) -> String {
        self.package.to_string()
    }

    /// Validate the requirement according to business rules
    pub fn validate(&self) -> Result<(), String> {
        self.package.validate()?;
        self.options
            .validate()
            .map_err(|e| format!("Invalid options for '{}': {}", self.package, e))?;
        Ok(())
    }
}

/// A build-time tool pin, e.g. `cmake@3.27.0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRequirement {
    /// The pinned tool
    #[serde(rename = "ref")]
    pub package: PackageRef,
}

impl ToolRequirement {
    pub fn new(package: PackageRef) -> Self {
        Self { package }
    }

    pub fn identifier(&self) -> String {
        self.package.to_string()
    }

    pub fn validate(&self) -> Result<(), String> {
        self.package.validate()
    }
}
