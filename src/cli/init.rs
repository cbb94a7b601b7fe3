use crate::utils::config::{get_recipe_path, ConfigParser};
use crate::utils::error::{RadepError, Result};
use clap::Args;
use serde::{Deserialize, Serialize};
use std::fs;

/// Scaffold a new recipe.toml
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Project name (default: current directory name)
    #[arg(long)]
    pub name: Option<String>,

    /// Initial version (default: "1.0.0")
    #[arg(long)]
    pub version: Option<String>,

    /// Overwrite existing recipe.toml
    #[arg(long)]
    pub force: bool,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

/// JSON response format for init command
#[derive(Debug, Serialize, Deserialize)]
pub struct InitResponse {
    pub status: String,
    pub project_name: String,
    pub project_version: String,
    pub recipe_path: String,
}

impl InitCommand {
    /// Execute the init command
    pub async fn run(&self) -> Result<()> {
        let current_dir = std::env::current_dir().map_err(RadepError::IoError)?;

        let recipe_path = current_dir.join(get_recipe_path());

        if recipe_path.exists() && !self.force {
            return Err(RadepError::ValidationError(
                "recipe.toml already exists (use --force to overwrite)".to_string(),
            ));
        }

        let project_name = match &self.name {
            Some(name) => {
                validate_project_name(name)?;
                name.clone()
            }
            None => {
                let dir_name = current_dir
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or("unnamed-project")
                    .to_string();

                if validate_project_name(&dir_name).is_ok() {
                    dir_name
                } else {
                    "unnamed-project".to_string()
                }
            }
        };

        let project_version = match &self.version {
            Some(version) => {
                validate_version(version)?;
                version.clone()
            }
            None => "1.0.0".to_string(),
        };

        let toml_content = generate_recipe_toml(&project_name, &project_version)?;

        fs::write(&recipe_path, toml_content).map_err(RadepError::IoError)?;

        if self.json {
            let response = InitResponse {
                status: "success".to_string(),
                project_name: project_name.clone(),
                project_version: project_version.clone(),
                recipe_path: "./recipe.toml".to_string(),
            };

            let json_output = serde_json::to_string_pretty(&response).map_err(|e| {
                RadepError::ValidationError(format!("Failed to serialize JSON response: {}", e))
            })?;

            println!("{}", json_output);
        } else {
            println!(
                "Created recipe.toml for {} v{}",
                project_name, project_version
            );
        }

        Ok(())
    }
}

/// Validate project name according to recipe rules
fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(RadepError::ValidationError(
            "Invalid project name '' (must be valid identifier)".to_string(),
        ));
    }

    if !name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(RadepError::ValidationError(format!(
            "Invalid project name '{}' (must be valid identifier)",
            name
        )));
    }

    if name.starts_with('-') || name.starts_with('_') || name.ends_with('-') || name.ends_with('_')
    {
        return Err(RadepError::ValidationError(format!(
            "Invalid project name '{}' (must be valid identifier)",
            name
        )));
    }

    Ok(())
}

/// Validate version according to semver rules (simplified)
fn validate_version(version: &str) -> Result<()> {
    let parts: Vec<&str> = version.split('.').collect();

    if parts.len() != 3 {
        return Err(RadepError::ValidationError(format!(
            "Invalid version '{}' (must be valid semver)",
            version
        )));
    }

    for part in parts {
        if part.parse::<u32>().is_err() {
            return Err(RadepError::ValidationError(format!(
                "Invalid version '{}' (must be valid semver)",
                version
            )));
        }
    }

    Ok(())
}

/// Generate recipe.toml content
fn generate_recipe_toml(name: &str, version: &str) -> Result<String> {
    let mut content = String::new();

    content.push_str("[recipe]\n");
    content.push_str(&format!("name = \"{}\"\n", name));
    content.push_str(&format!("version = \"{}\"\n", version));
    content.push_str("layout = \"standard\"\n");
    content.push('\n');

    content.push_str("# Declare dependencies as [[requires]] rules.\n");
    content.push_str("# Example:\n");
    content.push_str("# [[requires]]\n");
    content.push_str("# ref = \"zstd@1.5.7\"\n");
    content.push_str("#\n");
    content.push_str("# [[requires]]\n");
    content.push_str("# ref = \"sdl@3.4.0\"\n");
    content.push_str("# except-os = [\"emscripten\"]\n");
    content.push_str("#\n");
    content.push_str("# [requires.platform.linux]\n");
    content.push_str("# x11 = true\n");
    content.push_str("# wayland = false\n");
    content.push('\n');

    content.push_str("# Pin build-time tools with [[tool-requires]].\n");
    content.push_str("# [[tool-requires]]\n");
    content.push_str("# ref = \"cmake@3.27.0\"\n");

    // the scaffold must itself be a loadable recipe
    ConfigParser::parse_recipe_config(&content)
        .map_err(|e| RadepError::ValidationError(format!("Generated invalid recipe: {}", e)))?;

    Ok(content)
}
