use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The root node of a resolved graph: the project recipe the host package
/// manager resolved dependencies for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRoot {
    /// Project name
    pub name: String,
    /// Project version
    pub version: String,
}

impl GraphRoot {
    /// Root identifier (name@version)
    pub fn identifier(&self) -> String {
        format!("{}@{}", self.name, self.version)
    }
}

/// One resolved dependency as the host package manager reports it: where the
/// package is installed and which directories inside it hold libraries and
/// executables
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDependency {
    /// Resolved version
    pub version: String,
    /// Package installation folder; None when the dependency was resolved
    /// but never installed (e.g. a build-time-only tool)
    #[serde(default)]
    pub package_folder: Option<PathBuf>,
    /// Library search directories, relative to the package folder
    #[serde(default = "default_libdirs")]
    pub libdirs: Vec<String>,
    /// Executable directories, relative to the package folder
    #[serde(default = "default_bindirs")]
    pub bindirs: Vec<String>,
}

fn default_libdirs() -> Vec<String> {
    vec!["lib".to_string()]
}

fn default_bindirs() -> Vec<String> {
    vec!["bin".to_string()]
}

impl ResolvedDependency {
    /// Create a dependency with conventional lib/bin directories
    pub fn new(version: impl Into<String>, package_folder: Option<PathBuf>) -> Self {
        Self {
            version: version.into(),
            package_folder,
            libdirs: default_libdirs(),
            bindirs: default_bindirs(),
        }
    }

    /// Whether the package is installed on disk
    pub fn is_installed(&self) -> bool {
        self.package_folder.is_some()
    }

    /// Absolute library search directories: the package folder joined with
    /// each declared libdir. Empty when the package folder is null.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.dirs_from(&self.libdirs)
    }

    /// Absolute executable directories (same shape as search_dirs)
    pub fn bin_dirs(&self) -> Vec<PathBuf> {
        self.dirs_from(&self.bindirs)
    }

    fn dirs_from(&self, relative: &[String]) -> Vec<PathBuf> {
        match &self.package_folder {
            Some(folder) => relative.iter().map(|dir| folder.join(dir)).collect(),
            None => Vec::new(),
        }
    }

    /// Validate the dependency according to business rules
    pub fn validate(&self) -> Result<(), String> {
        if self.version.is_empty() {
            return Err("Dependency version cannot be empty".to_string());
        }

        for dir in self.libdirs.iter().chain(self.bindirs.iter()) {
            let path = Path::new(dir);
            if path.is_absolute() {
                return Err(format!(
                    "Declared directory '{}' must be relative to the package folder",
                    dir
                ));
            }
            if path.components().any(|c| matches!(c, std::path::Component::ParentDir)) {
                return Err(format!(
                    "Declared directory '{}' cannot contain '..' references",
                    dir
                ));
            }
        }

        Ok(())
    }
}

/// The host package manager's resolved dependency graph, consumed from the
/// graph.json it emits after resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// The project recipe at the graph root
    pub root: GraphRoot,
    /// Resolved dependencies by name, in stable name order
    #[serde(default)]
    pub dependencies: BTreeMap<String, ResolvedDependency>,
}

impl DependencyGraph {
    /// Create a graph with no dependencies
    pub fn new(root_name: impl Into<String>, root_version: impl Into<String>) -> Self {
        Self {
            root: GraphRoot {
                name: root_name.into(),
                version: root_version.into(),
            },
            dependencies: BTreeMap::new(),
        }
    }

    /// Add a resolved dependency
    pub fn add_dependency(&mut self, name: impl Into<String>, dependency: ResolvedDependency) {
        self.dependencies.insert(name.into(), dependency);
    }

    /// Count of dependencies installed on disk
    pub fn installed_count(&self) -> usize {
        self.dependencies
            .values()
            .filter(|d| d.is_installed())
            .count()
    }

    /// Validate the graph according to business rules
    pub fn validate(&self) -> Result<(), String> {
        if self.root.name.is_empty() {
            return Err("Graph root name cannot be empty".to_string());
        }

        for (name, dependency) in &self.dependencies {
            if name.is_empty() {
                return Err("Dependency name cannot be empty".to_string());
            }
            dependency
                .validate()
                .map_err(|e| format!("Dependency '{}': {}", name, e))?;
        }

        Ok(())
    }
}
