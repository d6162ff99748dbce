//! Homebrew dependencies from a project `Brewfile`.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::core::constants;
use crate::core::host::HostEnv;
use crate::core::process::{CommandRunner, ToolCommand};
use crate::error::{Result, ToolError};

/// Location of the project's `Brewfile`.
///
/// `$PWD` wins over the process working directory so the lane's shell
/// directory is used when the two differ.
pub fn brewfile_path(host: &HostEnv) -> PathBuf {
    let dir = host
        .var("PWD")
        .map(PathBuf::from)
        .unwrap_or_else(|| host.cwd().to_path_buf());
    dir.join(constants::BREWFILE)
}

/// Run `brew bundle` for the project's `Brewfile`, if there is one.
///
/// Returns the `Brewfile` path when it was installed.
///
/// # Errors
///
/// Returns `ToolError` if brew is missing or exits non-zero.
pub fn install(host: &HostEnv, runner: &dyn CommandRunner) -> Result<Option<PathBuf>> {
    let brewfile = brewfile_path(host);
    if !brewfile.exists() {
        debug!(path = %brewfile.display(), "no Brewfile");
        return Ok(None);
    }

    let command = ToolCommand::new("brew")
        .arg("bundle")
        .arg("--file")
        .arg(brewfile.display().to_string())
        .arg("--no-upgrade");
    info!(command = %command, "installing brew dependencies");

    let status = runner.status(&command)?;
    if status != 0 {
        return Err(ToolError::Failed {
            command: command.to_string(),
            status,
            stderr: String::new(),
        }
        .into());
    }
    Ok(Some(brewfile))
}
