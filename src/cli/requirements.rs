use crate::models::requirement::Requirement;
use crate::models::settings::TargetOs;
use crate::utils::config::{get_recipe_path, ConfigParser};
use crate::utils::error::{RadepError, Result};
use crate::utils::validation::validate_os_name;
use clap::Args;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Show the resolved requirement set for a target OS
#[derive(Debug, Args)]
pub struct RequirementsCommand {
    /// Target OS (default: host)
    #[arg(long)]
    pub os: Option<String>,

    /// Recipe file path (default: recipe.toml)
    #[arg(long)]
    pub recipe: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for requirements command
#[derive(Debug, Serialize, Deserialize)]
pub struct RequirementsResponse {
    pub status: String,
    pub project: String,
    pub os: String,
    pub requirements: Vec<Requirement>,
    pub tool_requirements: Vec<String>,
}

impl RequirementsCommand {
    /// Execute the requirements command
    pub async fn run(&self) -> Result<()> {
        let target_os = match &self.os {
            Some(name) => validate_os_name(name)?,
            None => TargetOs::host(),
        };

        let recipe_path = self.recipe.clone().unwrap_or_else(get_recipe_path);
        let recipe = ConfigParser::load_recipe_config(&recipe_path)?;

        let requirements = recipe.requirements_for(target_os);
        let tool_requirements: Vec<String> = recipe
            .tool_requires
            .iter()
            .map(|t| t.identifier())
            .collect();

        if self.json {
            let response = RequirementsResponse {
                status: "success".to_string(),
                project: recipe.identifier(),
                os: target_os.to_string(),
                requirements,
                tool_requirements,
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                RadepError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;

            println!("{}", json_output);
        } else {
            println!(
                "Requirements for {} on {}:",
                recipe.identifier(),
                target_os
            );

            if requirements.is_empty() {
                println!("  (none)");
            }

            for requirement in &requirements {
                if requirement.options.is_empty() {
                    println!("  {}", requirement.identifier());
                } else {
                    println!(
                        "  {} ({} options)",
                        requirement.identifier(),
                        requirement.options.len()
                    );
                    for (key, value) in requirement.options.iter() {
                        println!("    {} = {}", key, value);
                    }
                }
            }

            if !tool_requirements.is_empty() {
                println!("Tool requirements:");
                for tool in &tool_requirements {
                    println!("  {}", tool);
                }
            }
        }

        Ok(())
    }
}
