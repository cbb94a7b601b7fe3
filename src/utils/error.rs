// Common error types for radep

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RadepError {
    IoError(std::io::Error),
    ConfigError(String),
    ValidationError(String),
    GraphError(String),
    DeployError(String),
}

impl fmt::Display for RadepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadepError::IoError(err) => write!(f, "IO error: {}", err),
            RadepError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            RadepError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            RadepError::GraphError(msg) => write!(f, "Dependency graph error: {}", msg),
            RadepError::DeployError(msg) => write!(f, "Deployment error: {}", msg),
        }
    }
}

impl Error for RadepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RadepError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RadepError {
    fn from(err: std::io::Error) -> Self {
        RadepError::IoError(err)
    }
}

pub type Result<T> = std::result::Result<T, RadepError>;

/// User-facing presentation of a failed command: message, optional hint,
/// and the process exit code the CLI should terminate with.
#[derive(Debug)]
pub struct UserError {
    pub message: String,
    pub hint: Option<String>,
    pub exit_code: i32,
}

impl UserError {
    /// Map a crate error onto the presentation used by main()
    pub fn from_radep_error(err: &RadepError) -> Self {
        match err {
            RadepError::IoError(io_err) => Self {
                message: format!("IO error: {}", io_err),
                hint: None,
                exit_code: 74,
            },
            RadepError::ConfigError(msg) => Self {
                message: format!("Configuration error: {}", msg),
                hint: Some("Check recipe.toml and the paths passed on the command line.".to_string()),
                exit_code: 78,
            },
            RadepError::ValidationError(msg) => Self {
                message: format!("Validation error: {}", msg),
                hint: None,
                exit_code: 65,
            },
            RadepError::GraphError(msg) => Self {
                message: format!("Dependency graph error: {}", msg),
                hint: Some("Regenerate graph.json with your package manager and retry.".to_string()),
                exit_code: 65,
            },
            RadepError::DeployError(msg) => Self {
                message: format!("Deployment error: {}", msg),
                hint: None,
                exit_code: 70,
            },
        }
    }

    /// Print the error to stderr
    pub fn print(&self) {
        eprintln!("error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("  hint: {}", hint);
        }
    }
}
