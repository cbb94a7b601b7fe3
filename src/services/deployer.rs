use crate::models::deploy_manifest::{DeployManifest, MANIFEST_FILE_NAME};
use crate::models::graph::DependencyGraph;
use crate::utils::config::ConfigParser;
use crate::utils::error::RadepError;
use anyhow::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Shared-library naming pattern: `lib<anything>.so`, optionally followed
/// by dotted numeric version suffixes (`libfoo.so.1`, `libfoo.so.1.2.3`)
const SHARED_LIB_PATTERN: &str = r"lib.*\.so(\.\d+)*$";

/// Configuration for deployment
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Write deploy-manifest.json into the output folder
    pub write_manifest: bool,
    /// Also scan each dependency's declared executable directories
    pub follow_bindirs: bool,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            write_manifest: true,
            follow_bindirs: false,
        }
    }
}

impl DeployConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_manifest(mut self, write: bool) -> Self {
        self.write_manifest = write;
        self
    }

    pub fn with_bindirs(mut self, follow: bool) -> Self {
        self.follow_bindirs = follow;
        self
    }
}

/// Result of a deployment run
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// Copies performed, as (source, target) pairs in copy order. A target
    /// name may appear more than once when dependencies collide; the later
    /// copy is the one left on disk.
    pub deployed: Vec<(PathBuf, PathBuf)>,
    /// Dependencies skipped because their package folder was absent
    pub skipped_dependencies: Vec<String>,
    /// Total bytes copied (including overwritten copies)
    pub total_bytes: u64,
    /// Deployment duration in milliseconds
    pub duration_ms: u128,
    /// Path of the written manifest, when one was written
    pub manifest_path: Option<PathBuf>,
}

impl DeployResult {
    pub fn new() -> Self {
        Self {
            deployed: Vec::new(),
            skipped_dependencies: Vec::new(),
            total_bytes: 0,
            duration_ms: 0,
            manifest_path: None,
        }
    }

    /// Number of copies performed
    pub fn deployed_count(&self) -> usize {
        self.deployed.len()
    }

    /// Target file names left in the output folder, deduplicated
    pub fn target_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .deployed
            .iter()
            .filter_map(|(_, target)| target.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

impl Default for DeployResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Service-local deployment failures
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    /// Output folder could not be created
    #[error("Failed to create output folder '{}': {}", .path.display(), .source)]
    OutputCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A search directory could not be read
    #[error("Failed to scan '{}': {}", .path.display(), .source)]
    ScanFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A matching file could not be copied
    #[error("Failed to copy '{}' to '{}': {}", .from.display(), .to.display(), .source)]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

impl From<DeployError> for RadepError {
    fn from(err: DeployError) -> Self {
        RadepError::DeployError(err.to_string())
    }
}

/// Deployment service: copies runtime artifacts (executables and shared
/// libraries) out of each resolved dependency's library directories into a
/// flat output folder
#[derive(Debug)]
pub struct Deployer {
    /// Deployment configuration
    config: DeployConfig,
    /// Compiled shared-library name filter
    shared_lib_pattern: Regex,
}

impl Deployer {
    /// Create a deployer
    pub fn new(config: Option<DeployConfig>) -> Result<Self, RadepError> {
        let shared_lib_pattern = Regex::new(SHARED_LIB_PATTERN)
            .map_err(|e| RadepError::DeployError(format!("Invalid artifact pattern: {}", e)))?;

        Ok(Self {
            config: config.unwrap_or_default(),
            shared_lib_pattern,
        })
    }

    /// Deploy every installed dependency of the graph into `output_folder`.
    ///
    /// Dependencies without a package folder are skipped entirely. Missing
    /// search directories are treated as empty. Any other I/O failure
    /// aborts the deployment with the underlying error.
    pub fn deploy(
        &self,
        graph: &DependencyGraph,
        output_folder: &Path,
    ) -> Result<DeployResult, RadepError> {
        let start_time = std::time::Instant::now();

        graph.validate().map_err(RadepError::GraphError)?;

        fs::create_dir_all(output_folder).map_err(|e| DeployError::OutputCreateFailed {
            path: output_folder.to_path_buf(),
            source: e,
        })?;

        let mut result = DeployResult::new();

        for (name, dependency) in &graph.dependencies {
            if !dependency.is_installed() {
                result.skipped_dependencies.push(name.clone());
                continue;
            }

            let mut search_dirs = dependency.search_dirs();
            if self.config.follow_bindirs {
                search_dirs.extend(dependency.bin_dirs());
            }

            for dir in search_dirs {
                self.collect_runtime_files_into(&dir, output_folder, &mut result)?;
            }
        }

        if self.config.write_manifest {
            let manifest = DeployManifest::from_copies(graph.root.identifier(), &result.deployed)
                .map_err(|e| {
                    RadepError::DeployError(format!("Failed to build deploy manifest: {}", e))
                })?;
            let manifest_path = output_folder.join(MANIFEST_FILE_NAME);
            ConfigParser::save_deploy_manifest(&manifest, &manifest_path)?;
            result.manifest_path = Some(manifest_path);
        }

        result.duration_ms = start_time.elapsed().as_millis();
        Ok(result)
    }

    /// Recursively scan `search_dir` and copy matching files flat into
    /// `output_folder`, returning the (source, target) pairs in copy order.
    ///
    /// A missing search directory yields an empty list.
    pub fn collect_runtime_files(
        &self,
        search_dir: &Path,
        output_folder: &Path,
    ) -> Result<Vec<(PathBuf, PathBuf)>, DeployError> {
        let mut result = DeployResult::new();
        self.collect_runtime_files_into(search_dir, output_folder, &mut result)?;
        Ok(result.deployed)
    }

    fn collect_runtime_files_into(
        &self,
        search_dir: &Path,
        output_folder: &Path,
        result: &mut DeployResult,
    ) -> Result<(), DeployError> {
        if !search_dir.is_dir() {
            return Ok(());
        }

        let entries = fs::read_dir(search_dir).map_err(|e| DeployError::ScanFailed {
            path: search_dir.to_path_buf(),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| DeployError::ScanFailed {
                path: search_dir.to_path_buf(),
                source: e,
            })?;
            let source = entry.path();

            if source.is_dir() {
                self.collect_runtime_files_into(&source, output_folder, result)?;
                continue;
            }

            if !self.is_runtime_artifact(&source) {
                continue;
            }

            let target = output_folder.join(entry.file_name());
            // last write wins on name collisions
            let bytes = fs::copy(&source, &target).map_err(|e| DeployError::CopyFailed {
                from: source.clone(),
                to: target.clone(),
                source: e,
            })?;

            result.total_bytes += bytes;
            result.deployed.push((source, target));
        }

        Ok(())
    }

    /// The copy filter: executable permission bit, or a shared-library name
    fn is_runtime_artifact(&self, path: &Path) -> bool {
        if is_executable(path) {
            return true;
        }

        path.file_name()
            .map(|name| self.shared_lib_pattern.is_match(&name.to_string_lossy()))
            .unwrap_or(false)
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path)
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    // no permission bits to consult; fall back to executable extensions
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("exe") | Some("bat") | Some("cmd") | Some("dll")
    )
}
