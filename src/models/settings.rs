use serde::{Deserialize, Serialize};
use std::fmt;

/// Enumeration of deployment target operating systems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetOs {
    /// Emscripten/WebAssembly targets
    Emscripten,
    /// Windows desktop targets
    Windows,
    /// macOS desktop targets
    Macos,
    /// Linux desktop targets
    Linux,
    /// Fallback for any other platform
    Other,
}

impl TargetOs {
    /// Returns every recognized target, in declaration order
    pub fn all() -> &'static [TargetOs] {
        &[
            TargetOs::Emscripten,
            TargetOs::Windows,
            TargetOs::Macos,
            TargetOs::Linux,
            TargetOs::Other,
        ]
    }

    /// Detect the target matching the platform this binary was built for
    pub fn host() -> Self {
        if cfg!(target_os = "emscripten") {
            TargetOs::Emscripten
        } else if cfg!(target_os = "windows") {
            TargetOs::Windows
        } else if cfg!(target_os = "macos") {
            TargetOs::Macos
        } else if cfg!(target_os = "linux") {
            TargetOs::Linux
        } else {
            TargetOs::Other
        }
    }

    /// Whether shared libraries on this target use the `lib*.so` convention
    pub fn uses_so_libraries(&self) -> bool {
        matches!(self, TargetOs::Linux | TargetOs::Other)
    }
}

impl fmt::Display for TargetOs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetOs::Emscripten => write!(f, "emscripten"),
            TargetOs::Windows => write!(f, "windows"),
            TargetOs::Macos => write!(f, "macos"),
            TargetOs::Linux => write!(f, "linux"),
            TargetOs::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for TargetOs {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emscripten" | "wasm" => Ok(TargetOs::Emscripten),
            "windows" | "win" => Ok(TargetOs::Windows),
            "macos" | "mac" | "darwin" => Ok(TargetOs::Macos),
            "linux" => Ok(TargetOs::Linux),
            "other" | "default" => Ok(TargetOs::Other),
            _ => Err(SettingsError::UnknownOs(s.to_string())),
        }
    }
}

/// Build configuration, mirroring the standard generator configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildType {
    Debug,
    Release,
    RelWithDebInfo,
    MinSizeRel,
}

impl BuildType {
    /// Folder name used by the standard build layout
    pub fn folder_name(&self) -> &'static str {
        match self {
            BuildType::Debug => "Debug",
            BuildType::Release => "Release",
            BuildType::RelWithDebInfo => "RelWithDebInfo",
            BuildType::MinSizeRel => "MinSizeRel",
        }
    }
}

impl Default for BuildType {
    fn default() -> Self {
        BuildType::Release
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.folder_name())
    }
}

impl std::str::FromStr for BuildType {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            "relwithdebinfo" => Ok(BuildType::RelWithDebInfo),
            "minsizerel" => Ok(BuildType::MinSizeRel),
            _ => Err(SettingsError::UnknownBuildType(s.to_string())),
        }
    }
}

/// Build settings the recipe branches on: target OS plus the usual
/// arch/compiler/build_type axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Target operating system
    pub os: TargetOs,
    /// Target architecture (e.g. "x86_64"), if pinned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    /// Compiler identifier (e.g. "gcc"), if pinned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    /// Build configuration
    #[serde(default)]
    pub build_type: BuildType,
}

impl BuildSettings {
    /// Create settings for a target OS with default build type
    pub fn new(os: TargetOs) -> Self {
        Self {
            os,
            arch: None,
            compiler: None,
            build_type: BuildType::default(),
        }
    }

    /// Create settings for the host platform
    pub fn host() -> Self {
        Self::new(TargetOs::host())
    }

    /// Set the build type
    pub fn with_build_type(mut self, build_type: BuildType) -> Self {
        self.build_type = build_type;
        self
    }

    /// Validate the settings according to business rules
    pub fn validate(&self) -> Result<(), String> {
        if let Some(arch) = &self.arch {
            if !is_valid_identifier(arch) {
                return Err(format!("Invalid arch '{}' (must be a plain identifier)", arch));
            }
        }

        if let Some(compiler) = &self.compiler {
            if !is_valid_identifier(compiler) {
                return Err(format!(
                    "Invalid compiler '{}' (must be a plain identifier)",
                    compiler
                ));
            }
        }

        Ok(())
    }
}

fn is_valid_identifier(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
}

/// Errors produced while parsing settings values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    UnknownOs(String),
    UnknownBuildType(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::UnknownOs(name) => write!(
                f,
                "Unknown target OS '{}' (expected one of: emscripten, windows, macos, linux, other)",
                name
            ),
            SettingsError::UnknownBuildType(name) => write!(
                f,
                "Unknown build type '{}' (expected one of: Debug, Release, RelWithDebInfo, MinSizeRel)",
                name
            ),
        }
    }
}

impl std::error::Error for SettingsError {}
