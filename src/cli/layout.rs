use crate::models::settings::{BuildSettings, BuildType, TargetOs};
use crate::services::layout::BuildLayout;
use crate::utils::error::{RadepError, Result};
use crate::utils::validation::validate_build_type;
use clap::Args;
use serde::{Deserialize, Serialize};

/// Show the standard build layout folders
#[derive(Debug, Args)]
pub struct LayoutCommand {
    /// Build type (default: Release)
    #[arg(long)]
    pub build_type: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for layout command
#[derive(Debug, Serialize, Deserialize)]
pub struct LayoutResponse {
    pub status: String,
    pub build_type: String,
    pub build_folder: String,
    pub generators_folder: String,
    pub deploy_folder: String,
}

impl LayoutCommand {
    /// Execute the layout command
    pub async fn run(&self) -> Result<()> {
        let build_type = match &self.build_type {
            Some(name) => validate_build_type(name)?,
            None => BuildType::default(),
        };

        let settings = BuildSettings::new(TargetOs::host()).with_build_type(build_type);
        let layout = BuildLayout::standard(&settings);

        if self.json {
            let response = LayoutResponse {
                status: "success".to_string(),
                build_type: build_type.to_string(),
                build_folder: layout.build_folder.display().to_string(),
                generators_folder: layout.generators_folder.display().to_string(),
                deploy_folder: layout.deploy_folder.display().to_string(),
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                RadepError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;

            println!("{}", json_output);
        } else {
            println!("Standard layout ({}):", build_type);
            println!("  build:      {}", layout.build_folder.display());
            println!("  generators: {}", layout.generators_folder.display());
            println!("  deploy:     {}", layout.deploy_folder.display());
        }

        Ok(())
    }
}
