//! Build path propagation.
//!
//! Fans the output directory and derived data path out into the variables
//! gym, scan, backup_xcarchive, carthage and slather read.

use std::path::{Path, PathBuf};

use crate::core::constants;
use crate::core::host::HostEnv;
use crate::core::outcome::Outcome;
use crate::error::Result;

/// Directories to publish.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildPaths {
    pub output_directory: Option<String>,
    /// Only used together with `output_directory`.
    pub archive_name: Option<String>,
    pub derived_data_path: Option<String>,
}

/// Replace the extension of `name` with `.xcarchive`.
///
/// Directory components are kept, so the archive lands in a subdirectory of
/// the output directory when the name has one.
pub fn archive_file_name(name: &str) -> PathBuf {
    Path::new(name).with_extension(constants::ARCHIVE_EXTENSION)
}

/// Publish the absolute forms of the configured directories.
///
/// No existence check is made on any path.
pub fn propagate(paths: &BuildPaths, host: &HostEnv, outcome: &mut Outcome) -> Result<()> {
    if let Some(output) = &paths.output_directory {
        let output = host.expand_path(output)?;
        for var in constants::OUTPUT_DIRECTORY_VARS {
            outcome.set_env_path(var, &output);
        }

        if let Some(name) = &paths.archive_name {
            let archive = host.expand_path(output.join(archive_file_name(name)))?;
            outcome.set_env_path(constants::GYM_ARCHIVE_PATH, &archive);
        }
    }

    if let Some(derived) = &paths.derived_data_path {
        let derived = host.expand_path(derived)?;
        for var in constants::DERIVED_DATA_VARS {
            outcome.set_env_path(var, &derived);
        }
    }

    Ok(())
}
