use crate::models::recipe::LayoutKind;
use crate::models::settings::BuildSettings;
use std::path::PathBuf;

/// Folders computed by the standard build-directory layout:
/// `build/<BuildType>` for build output, a `generators` subfolder for
/// toolchain files, and a `deploy` subfolder as the default deployment
/// target
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    /// Build output folder
    pub build_folder: PathBuf,
    /// Generated toolchain/dependency files
    pub generators_folder: PathBuf,
    /// Default deployment output folder
    pub deploy_folder: PathBuf,
}

impl BuildLayout {
    /// Compute the standard layout for the given settings
    pub fn standard(settings: &BuildSettings) -> Self {
        let build_folder = PathBuf::from("build").join(settings.build_type.folder_name());
        Self {
            generators_folder: build_folder.join("generators"),
            deploy_folder: build_folder.join("deploy"),
            build_folder,
        }
    }

    /// Compute the layout a recipe delegates to
    pub fn for_kind(kind: LayoutKind, settings: &BuildSettings) -> Self {
        match kind {
            LayoutKind::Standard => Self::standard(settings),
        }
    }
}
