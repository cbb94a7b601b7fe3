use crate::models::options::Options;
use crate::models::requirement::{PackageRef, Requirement, ToolRequirement};
use crate::models::settings::TargetOs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Build-directory layout convention the recipe delegates to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// The standard generator layout (build/<BuildType>/...)
    Standard,
}

impl Default for LayoutKind {
    fn default() -> Self {
        LayoutKind::Standard
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutKind::Standard => write!(f, "standard"),
        }
    }
}

/// One declared dependency and the targets it applies to.
///
/// A rule contributes to a target when `only_os` (if non-empty) contains it
/// and `except_os` does not. Option selection picks the platform block for
/// the target when one exists, otherwise the rule's default options; a
/// platform block is a full replacement, not a merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementRule {
    /// The required package
    #[serde(rename = "ref")]
    pub package: PackageRef,
    /// Restrict the rule to these targets (empty = all targets)
    #[serde(default, rename = "only-os", skip_serializing_if = "Vec::is_empty")]
    pub only_os: Vec<TargetOs>,
    /// Exclude the rule on these targets
    #[serde(default, rename = "except-os", skip_serializing_if = "Vec::is_empty")]
    pub except_os: Vec<TargetOs>,
    /// Default build options (the fallback branch)
    #[serde(default, skip_serializing_if = "Options::is_empty")]
    pub options: Options,
    /// Per-target option blocks, replacing the defaults when present
    #[serde(default, rename = "platform", skip_serializing_if = "BTreeMap::is_empty")]
    pub platform_options: BTreeMap<TargetOs, Options>,
}

impl RequirementRule {
    /// Create a rule applying to every target with no options
    pub fn new(package: PackageRef) -> Self {
        Self {
            package,
            only_os: Vec::new(),
            except_os: Vec::new(),
            options: Options::new(),
            platform_options: BTreeMap::new(),
        }
    }

    /// Set the default option block
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Restrict to the given targets
    pub fn only_on(mut self, targets: Vec<TargetOs>) -> Self {
        self.only_os = targets;
        self
    }

    /// Exclude the given targets
    pub fn except_on(mut self, targets: Vec<TargetOs>) -> Self {
        self.except_os = targets;
        self
    }

    /// Add a full-replacement option block for one target
    pub fn with_platform_options(mut self, os: TargetOs, options: Options) -> Self {
        self.platform_options.insert(os, options);
        self
    }

    /// Whether this rule contributes a requirement on the given target
    pub fn applies_to(&self, os: TargetOs) -> bool {
        if self.except_os.contains(&os) {
            return false;
        }
        self.only_os.is_empty() || self.only_os.contains(&os)
    }

    /// The option block selected for the given target
    pub fn options_for(&self, os: TargetOs) -> Options {
        self.platform_options
            .get(&os)
            .cloned()
            .unwrap_or_else(|| self.options.clone())
    }

    /// Validate the rule according to business rules
    pub fn validate(&self) -> Result<(), String> {
        self.package.validate()?;

        self.options
            .validate()
            .map_err(|e| format!("Invalid default options for '{}': {}", self.package, e))?;

        for (os, options) in &self.platform_options {
            options.validate().map_err(|e| {
                format!("Invalid {} options for '{}': {}", os, self.package, e)
            })?;
        }

        for os in &self.only_os {
            if self.except_os.contains(os) {
                return Err(format!(
                    "Rule for '{}' lists {} in both only-os and except-os",
                    self.package, os
                ));
            }
        }

        Ok(())
    }
}

/// A project recipe: the declarative dependency specification the host
/// package manager resolves, plus build-time tool pins and the layout
/// convention the build delegates to
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    /// Project name (must be a valid identifier)
    pub name: String,
    /// Project version (must be valid semver)
    pub version: String,
    /// Declared dependency rules, in declaration order
    pub requires: Vec<RequirementRule>,
    /// Build-time tool pins
    pub tool_requires: Vec<ToolRequirement>,
    /// Build-directory layout convention
    pub layout: LayoutKind,
}

impl Recipe {
    /// Create an empty recipe
    pub fn new(name: String, version: String) -> Self {
        Self {
            name,
            version,
            requires: Vec::new(),
            tool_requires: Vec::new(),
            layout: LayoutKind::default(),
        }
    }

    /// Recipe identifier (name@version)
    pub fn identifier(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }

    /// Add a dependency rule
    pub fn add_rule(&mut self, rule: RequirementRule) {
        self.requires.push(rule);
    }

    /// Add a build-time tool pin
    pub fn add_tool_requirement(&mut self, tool: ToolRequirement) {
        self.tool_requires.push(tool);
    }

    /// Settings-driven requirement selection: the requirement set for one
    /// target OS, in declaration order
    pub fn requirements_for(&self, os: TargetOs) -> Vec<Requirement> {
        self.requires
            .iter()
            .filter(|rule| rule.applies_to(os))
            .map(|rule| Requirement::with_options(rule.package.clone(), rule.options_for(os)))
            .collect()
    }

    /// Validate the recipe according to business rules
    pub fn validate(&self) -> Result<(), String> {
        self.validate_name()?;
        self.validate_version()?;

        for rule in &self.requires {
            rule.validate()?;
        }

        for tool in &self.tool_requires {
            tool.validate()?;
        }

        self.validate_unique_per_target()?;

        Ok(())
    }

    /// Validate recipe name is a valid identifier
    fn validate_name(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Recipe name cannot be empty".to_string());
        }

        if !self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(format!(
                "Invalid recipe name '{}' (must be valid identifier)",
                self.name
            ));
        }

        Ok(())
    }

    /// Validate recipe version follows semver
    fn validate_version(&self) -> Result<(), String> {
        if self.version.is_empty() {
            return Err("Recipe version cannot be empty".to_string());
        }

        let parts: Vec<&str> = self.version.split('.').collect();
        if parts.len() != 3 {
            return Err(format!(
                "Invalid version '{}' (must be valid semver)",
                self.version
            ));
        }

        for part in parts {
            if part.parse::<u32>().is_err() {
                return Err(format!(
                    "Invalid version '{}' (must be valid semver)",
                    self.version
                ));
            }
        }

        Ok(())
    }

    /// No two rules may require the same package on the same target
    fn validate_unique_per_target(&self) -> Result<(), String> {
        for os in TargetOs::all() {
            let mut seen: Vec<&str> = Vec::new();
            for rule in self.requires.iter().filter(|r| r.applies_to(*os)) {
                if seen.contains(&rule.package.name.as_str()) {
                    return Err(format!(
                        "Package '{}' is required more than once on target {}",
                        rule.package.name, os
                    ));
                }
                seen.push(&rule.package.name);
            }
        }
        Ok(())
    }
}

/// Serde façade for recipe.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeToml {
    pub recipe: RecipeSection,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<RequirementRule>,
    #[serde(default, rename = "tool-requires", skip_serializing_if = "Vec::is_empty")]
    pub tool_requires: Vec<ToolRequirement>,
}

/// The [recipe] table of recipe.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeSection {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub layout: LayoutKind,
}

impl From<RecipeToml> for Recipe {
    fn from(t: RecipeToml) -> Self {
        Self {
            name: t.recipe.name,
            version: t.recipe.version,
            requires: t.requires,
            tool_requires: t.tool_requires,
            layout: t.recipe.layout,
        }
    }
}

impl From<Recipe> for RecipeToml {
    fn from(r: Recipe) -> Self {
        Self {
            recipe: RecipeSection {
                name: r.name,
                version: r.version,
                layout: r.layout,
            },
            requires: r.requires,
            tool_requires: r.tool_requires,
        }
    }
}
