// Configuration utilities: recipe.toml, graph.json, deploy manifests

use crate::models::deploy_manifest::DeployManifest;
use crate::models::graph::DependencyGraph;
use crate::models::recipe::{Recipe, RecipeToml};
use crate::utils::error::{RadepError, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Configuration parsing and validation utilities
pub struct ConfigParser;

impl ConfigParser {
    /// Load and validate a recipe from recipe.toml
    pub fn load_recipe_config<P: AsRef<Path>>(path: P) -> Result<Recipe> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RadepError::ConfigError(format!(
                "Recipe file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RadepError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        Self::parse_recipe_config(&content)
    }

    /// Parse a recipe from TOML content with validation
    pub fn parse_recipe_config(content: &str) -> Result<Recipe> {
        let recipe_toml: RecipeToml = toml::from_str(content)
            .map_err(|e| RadepError::ConfigError(format!("Invalid TOML syntax: {}", e)))?;

        let recipe = Recipe::from(recipe_toml);

        recipe.validate().map_err(RadepError::ValidationError)?;

        Ok(recipe)
    }

    /// Save a recipe to a TOML file
    pub fn save_recipe_config<P: AsRef<Path>>(recipe: &Recipe, path: P) -> Result<()> {
        let path = path.as_ref();

        recipe.validate().map_err(RadepError::ValidationError)?;

        let recipe_toml = RecipeToml::from(recipe.clone());

        let content = toml::to_string_pretty(&recipe_toml).map_err(|e| {
            RadepError::ConfigError(format!("Failed to serialize recipe: {}", e))
        })?;

        fs::write(path, content).map_err(|e| {
            RadepError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Load a resolved dependency graph from graph.json, resolving any
    /// relative package folders against the default store root
    pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<DependencyGraph> {
        Self::load_graph_with_store_root(path, &get_radep_home_dir())
    }

    /// Load a resolved dependency graph, resolving relative package folders
    /// against `store_root`
    pub fn load_graph_with_store_root<P: AsRef<Path>>(
        path: P,
        store_root: &Path,
    ) -> Result<DependencyGraph> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(RadepError::ConfigError(format!(
                "Graph file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RadepError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut graph = Self::parse_graph(&content)?;

        for dependency in graph.dependencies.values_mut() {
            if let Some(folder) = &dependency.package_folder {
                if folder.is_relative() {
                    dependency.package_folder = Some(store_root.join(folder));
                }
            }
        }

        Ok(graph)
    }

    /// Parse a dependency graph from JSON content with validation
    pub fn parse_graph(content: &str) -> Result<DependencyGraph> {
        let graph: DependencyGraph = serde_json::from_str(content)
            .map_err(|e| RadepError::GraphError(format!("Invalid graph JSON: {}", e)))?;

        graph.validate().map_err(RadepError::GraphError)?;

        Ok(graph)
    }

    /// Write a deploy manifest atomically (temp file + rename)
    pub fn save_deploy_manifest(manifest: &DeployManifest, path: &Path) -> Result<()> {
        manifest.validate().map_err(RadepError::ValidationError)?;

        let content = serde_json::to_string_pretty(manifest).map_err(|e| {
            RadepError::ConfigError(format!("Failed to serialize manifest: {}", e))
        })?;

        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(RadepError::IoError)?;
        temp.write_all(content.as_bytes())
            .map_err(RadepError::IoError)?;
        temp.persist(path)
            .map_err(|e| RadepError::IoError(e.error))?;

        Ok(())
    }

    /// Load and validate a deploy manifest
    pub fn load_deploy_manifest(path: &Path) -> Result<DeployManifest> {
        if !path.exists() {
            return Err(RadepError::ConfigError(format!(
                "Manifest file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RadepError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let manifest: DeployManifest = serde_json::from_str(&content)
            .map_err(|e| RadepError::ConfigError(format!("Invalid manifest JSON: {}", e)))?;

        manifest.validate().map_err(RadepError::ValidationError)?;

        Ok(manifest)
    }
}

/// Root of the local package store, used to resolve relative package
/// folders in graphs
pub fn get_radep_home_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".radep")
}

pub fn get_recipe_path() -> PathBuf {
    PathBuf::from("recipe.toml")
}

pub fn get_graph_path() -> PathBuf {
    PathBuf::from("graph.json")
}
