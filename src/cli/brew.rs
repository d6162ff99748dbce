//! Brew dependencies command.

use crate::cli::output;
use crate::core::brew;
use crate::core::host::HostEnv;
use crate::core::process::SystemRunner;
use crate::error::Result;

/// Install dependencies from the project Brewfile.
pub fn execute(host: &HostEnv) -> Result<i32> {
    match brew::install(host, &SystemRunner)? {
        Some(path) => output::success(&format!(
            "brew dependencies installed from {}",
            output::path(path.display())
        )),
        None => output::info(&format!(
            "no Brewfile at {}, nothing to install",
            output::path(brew::brewfile_path(host).display())
        )),
    }
    Ok(0)
}
