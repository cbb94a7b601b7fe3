// Common validation utilities for radep CLI commands

use crate::models::requirement::PackageRef;
use crate::models::settings::{BuildType, TargetOs};
use crate::utils::error::{RadepError, Result};
use std::path::Path;
use std::str::FromStr;

/// Validate and parse a `name@version` package reference
pub fn validate_package_ref(value: &str) -> Result<PackageRef> {
    if value.is_empty() {
        return Err(RadepError::ValidationError(
            "Package reference cannot be empty.\n\nProvide a reference like:\n  radep requirements\n  ref = \"zstd@1.5.7\"".to_string()
        ));
    }

    PackageRef::parse(value).map_err(|e| {
        RadepError::ValidationError(format!(
            "{}\n\nValid references:\n  ✓ zstd@1.5.7\n  ✓ skia-canvas@143.20251028.0\n  ✗ zstd\n  ✗ zstd/1.5.7",
            e
        ))
    })
}

/// Validate and parse a target OS name
pub fn validate_os_name(value: &str) -> Result<TargetOs> {
    TargetOs::from_str(value).map_err(|e| {
        RadepError::ValidationError(format!(
            "{}\n\nExample: radep requirements --os linux",
            e
        ))
    })
}

/// Validate and parse a build type name
pub fn validate_build_type(value: &str) -> Result<BuildType> {
    BuildType::from_str(value).map_err(|e| {
        RadepError::ValidationError(format!(
            "{}\n\nExample: radep layout --build-type Release",
            e
        ))
    })
}

/// Validate an output folder path: it may be absent (it will be created)
/// but must not point at an existing non-directory
pub fn validate_output_folder(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(RadepError::ValidationError(
            "Output folder cannot be empty.".to_string(),
        ));
    }

    if path.exists() && !path.is_dir() {
        return Err(RadepError::ValidationError(format!(
            "Output folder '{}' exists and is not a directory.",
            path.display()
        )));
    }

    Ok(())
}
