use crate::models::settings::{BuildSettings, BuildType, TargetOs};
use crate::services::deployer::{DeployConfig, Deployer};
use crate::services::layout::BuildLayout;
use crate::utils::config::{get_graph_path, ConfigParser};
use crate::utils::error::{RadepError, Result};
use crate::utils::validation::{validate_build_type, validate_output_folder};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Deploy runtime artifacts from a resolved dependency graph
#[derive(Debug, Args)]
pub struct DeployCommand {
    /// Graph file path (default: graph.json)
    #[arg(long)]
    pub graph: Option<PathBuf>,

    /// Output folder (default: the standard layout's deploy folder)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Store root for resolving relative package folders
    #[arg(long)]
    pub store_root: Option<PathBuf>,

    /// Build type used for the default output folder
    #[arg(long)]
    pub build_type: Option<String>,

    /// Also scan each dependency's declared bin directories
    #[arg(long)]
    pub bindirs: bool,

    /// Skip writing deploy-manifest.json
    #[arg(long)]
    pub no_manifest: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for deploy command
#[derive(Debug, Serialize, Deserialize)]
pub struct DeployResponse {
    pub status: String,
    pub project: String,
    pub output_folder: String,
    pub deployed_files: Vec<String>,
    pub copies: usize,
    pub skipped_dependencies: Vec<String>,
    pub total_bytes: u64,
    pub duration_ms: u128,
    pub manifest: Option<String>,
}

impl DeployCommand {
    /// Execute the deploy command
    pub async fn run(&self) -> Result<()> {
        let graph_path = self.graph.clone().unwrap_or_else(get_graph_path);

        let graph = match &self.store_root {
            Some(root) => ConfigParser::load_graph_with_store_root(&graph_path, root)?,
            None => ConfigParser::load_graph(&graph_path)?,
        };

        let output_folder = match &self.output {
            Some(path) => path.clone(),
            None => {
                let build_type = match &self.build_type {
                    Some(name) => validate_build_type(name)?,
                    None => BuildType::default(),
                };
                let settings =
                    BuildSettings::new(TargetOs::host()).with_build_type(build_type);
                BuildLayout::standard(&settings).deploy_folder
            }
        };
        validate_output_folder(&output_folder)?;

        let config = DeployConfig::new()
            .with_manifest(!self.no_manifest)
            .with_bindirs(self.bindirs);

        let deployer = Deployer::new(Some(config))?;
        let result = deployer.deploy(&graph, &output_folder)?;

        if self.json {
            let response = DeployResponse {
                status: "success".to_string(),
                project: graph.root.identifier(),
                output_folder: output_folder.display().to_string(),
                deployed_files: result.target_names(),
                copies: result.deployed_count(),
                skipped_dependencies: result.skipped_dependencies.clone(),
                total_bytes: result.total_bytes,
                duration_ms: result.duration_ms,
                manifest: result
                    .manifest_path
                    .as_ref()
                    .map(|p| p.display().to_string()),
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                RadepError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;

            println!("{}", json_output);
        } else {
            println!(
                "✓ Deployed {} artifacts for {}",
                result.target_names().len(),
                graph.root.identifier()
            );
            println!("  Output: {}", output_folder.display());
            println!(
                "  Copied: {} files ({}) in {} ms",
                result.deployed_count(),
                format_size(result.total_bytes),
                result.duration_ms
            );

            if !result.skipped_dependencies.is_empty() {
                println!(
                    "  Skipped: {} (not installed)",
                    result.skipped_dependencies.join(", ")
                );
            }

            if let Some(manifest_path) = &result.manifest_path {
                println!("  Manifest: {}", manifest_path.display());
            }
        }

        Ok(())
    }
}

/// Render a byte count in a human-readable unit
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
