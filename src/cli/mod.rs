// CLI module for command-line interface

pub mod deploy;
pub mod init;
pub mod layout;
pub mod requirements;

use crate::utils::error::Result;
use clap::{Parser, Subcommand};

use self::deploy::DeployCommand;
use self::init::InitCommand;
use self::layout::LayoutCommand;
use self::requirements::RequirementsCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "radep")]
#[command(about = "A runtime artifact deployer for native dependency graphs")]
#[command(long_about = r#"radep deploys the runtime artifacts of a resolved native dependency
graph: it copies shared libraries and executables out of each dependency's
package folder into a flat deployment directory.

Features:
  • Declarative recipe.toml with per-OS requirement selection
  • Consumes the graph.json your package manager emits after resolution
  • Executable-bit and lib*.so[.N...] artifact filtering
  • Flat deployment folder with a deploy-manifest.json record
  • Standard build-directory layout defaults

Examples:
  radep init --name my-project     Scaffold a recipe.toml
  radep requirements --os linux    Show the requirement set for a target
  radep layout                     Show the standard build layout folders
  radep deploy --graph graph.json  Deploy runtime artifacts

For detailed documentation, visit: https://github.com/radep/radep"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new recipe.toml
    #[command(long_about = r#"Scaffold a recipe.toml with a commented requirements skeleton.

The recipe declares the project's dependencies per target OS: each
[[requires]] rule names a package reference (name@version), optional
only-os/except-os target filters, a default option block, and per-target
option blocks that replace the defaults.

Examples:
  radep init                            Create recipe with auto-detected name
  radep init --name paint-app           Custom project name
  radep init --force                    Overwrite existing recipe.toml"#)]
    Init {
        /// Project name (default: current directory name)
        #[arg(long)]
        name: Option<String>,

        /// Initial version (default: "1.0.0")
        #[arg(long)]
        version: Option<String>,

        /// Overwrite existing recipe.toml
        #[arg(long)]
        force: bool,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Show the resolved requirement set for a target OS
    #[command(long_about = r#"Load recipe.toml and print the requirement set selected for a target.

Selection follows the recipe's rules: a [[requires]] rule contributes on a
target when its only-os filter (if any) includes it and its except-os filter
does not; the option block for the target replaces the rule's defaults when
one is declared.

Examples:
  radep requirements                    Requirement set for the host OS
  radep requirements --os emscripten    Requirement set for wasm builds
  radep requirements --json             Machine-readable output"#)]
    Requirements {
        /// Target OS (default: host)
        #[arg(long)]
        os: Option<String>,

        /// Recipe file path (default: recipe.toml)
        #[arg(long)]
        recipe: Option<std::path::PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the standard build layout folders
    #[command(long_about = r#"Print the folders of the standard build-directory layout.

The layout places build output under build/<BuildType>, generated toolchain
files under build/<BuildType>/generators, and the default deployment folder
under build/<BuildType>/deploy.

Examples:
  radep layout                          Layout for a Release build
  radep layout --build-type Debug       Layout for a Debug build"#)]
    Layout {
        /// Build type (default: Release)
        #[arg(long)]
        build_type: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Deploy runtime artifacts from a resolved dependency graph
    #[command(long_about = r#"Copy runtime artifacts into a flat deployment folder.

For every dependency in the graph with a package folder, radep recursively
scans the declared library directories and copies each file that either has
an executable permission bit or matches the shared-library naming pattern
lib*.so[.N...]. Matching files at any depth land flat in the output folder;
on name collisions the later copy wins. Missing search directories are
skipped silently.

Examples:
  radep deploy                          Deploy graph.json to the layout default
  radep deploy --output dist/           Deploy to a custom folder
  radep deploy --bindirs                Also scan declared bin directories
  radep deploy --no-manifest            Skip writing deploy-manifest.json"#)]
    Deploy {
        /// Graph file path (default: graph.json)
        #[arg(long)]
        graph: Option<std::path::PathBuf>,

        /// Output folder (default: the standard layout's deploy folder)
        #[arg(long)]
        output: Option<std::path::PathBuf>,

        /// Store root for resolving relative package folders
        #[arg(long)]
        store_root: Option<std::path::PathBuf>,

        /// Build type used for the default output folder
        #[arg(long)]
        build_type: Option<String>,

        /// Also scan each dependency's declared bin directories
        #[arg(long)]
        bindirs: bool,

        /// Skip writing deploy-manifest.json
        #[arg(long)]
        no_manifest: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub async fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Init {
                name,
                version,
                force,
                json,
            } => {
                let cmd = InitCommand {
                    name,
                    version,
                    force,
                    json,
                };
                cmd.run().await
            }

            Commands::Requirements { os, recipe, json } => {
                let cmd = RequirementsCommand { os, recipe, json };
                cmd.run().await
            }

            Commands::Layout { build_type, json } => {
                let cmd = LayoutCommand { build_type, json };
                cmd.run().await
            }

            Commands::Deploy {
                graph,
                output,
                store_root,
                build_type,
                bindirs,
                no_manifest,
                json,
            } => {
                let cmd = DeployCommand {
                    graph,
                    output,
                    store_root,
                    build_type,
                    bindirs,
                    no_manifest,
                    json,
                };
                cmd.run().await
            }
        }
    }
}
