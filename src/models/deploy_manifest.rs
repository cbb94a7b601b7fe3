use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name the manifest is written under, inside the output folder
pub const MANIFEST_FILE_NAME: &str = "deploy-manifest.json";

/// One deployed artifact as it ended up in the output folder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployedFile {
    /// File name in the output folder
    pub name: String,
    /// The source path the final copy came from
    pub source: PathBuf,
    /// Size in bytes
    pub size: u64,
    /// SHA-256 of the deployed file, hex encoded
    pub sha256: String,
}

/// Record of a deployment: which artifacts were copied, from where, and
/// their integrity hashes. Entries describe the final state of the output
/// folder, so a name that collided during the copy appears once, with the
/// last writer as its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeployManifest {
    /// Manifest format version for future compatibility
    pub version: u32,
    /// Identifier of the deployed project (name@version)
    pub project: String,
    /// When the deployment ran
    pub deployed_at: DateTime<Utc>,
    /// Deployed artifacts, sorted by name
    pub files: Vec<DeployedFile>,
}

impl DeployManifest {
    /// Current manifest format version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create an empty manifest for a project
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            project: project.into(),
            deployed_at: Utc::now(),
            files: Vec::new(),
        }
    }

    /// Build a manifest from copy records, hashing each deployed file.
    ///
    /// `copies` lists (source, target) pairs in copy order; a target name
    /// written several times keeps only its last source.
    pub fn from_copies(
        project: impl Into<String>,
        copies: &[(PathBuf, PathBuf)],
    ) -> std::io::Result<Self> {
        let mut final_state: BTreeMap<String, &PathBuf> = BTreeMap::new();
        let mut targets: BTreeMap<String, &PathBuf> = BTreeMap::new();

        for (source, target) in copies {
            let name = target
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            final_state.insert(name.clone(), source);
            targets.insert(name, target);
        }

        let mut manifest = Self::new(project);
        for (name, source) in final_state {
            let target = targets[&name];
            let metadata = std::fs::metadata(target)?;
            manifest.files.push(DeployedFile {
                name,
                source: (*source).clone(),
                size: metadata.len(),
                sha256: hash_file(target)?,
            });
        }

        Ok(manifest)
    }

    /// Total size of all deployed artifacts in bytes
    pub fn total_size(&self) -> u64 {
        self.files.iter().map(|f| f.size).sum()
    }

    /// Look up a deployed file by name
    pub fn get(&self, name: &str) -> Option<&DeployedFile> {
        self.files.iter().find(|f| f.name == name)
    }

    /// Validate the manifest according to business rules
    pub fn validate(&self) -> Result<(), String> {
        if self.version == 0 {
            return Err("Manifest version cannot be 0".to_string());
        }

        if self.version > Self::CURRENT_VERSION {
            return Err(format!(
                "Manifest version {} is newer than supported version {}",
                self.version,
                Self::CURRENT_VERSION
            ));
        }

        if self.project.is_empty() {
            return Err("Manifest project cannot be empty".to_string());
        }

        for file in &self.files {
            if file.name.is_empty() {
                return Err("Deployed file name cannot be empty".to_string());
            }
            if !is_valid_sha256(&file.sha256) {
                return Err(format!(
                    "Invalid SHA-256 for deployed file '{}'",
                    file.name
                ));
            }
        }

        Ok(())
    }
}

/// SHA-256 of a file's contents, hex encoded
pub fn hash_file(path: &Path) -> std::io::Result<String> {
    let contents = std::fs::read(path)?;
    let digest = Sha256::digest(&contents);
    Ok(digest.iter().map(|b| format!("{:02x}", b)).collect())
}

fn is_valid_sha256(hash: &str) -> bool {
    hash.len() == 64 && hash.chars().all(|c| c.is_ascii_hexdigit())
}
