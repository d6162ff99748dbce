//! Teardown command.

use crate::cli::output;
use crate::core::host::HostEnv;
use crate::core::keychain::SecurityTool;
use crate::core::process::SystemRunner;
use crate::core::setup::{self, Teardown};
use crate::error::Result;

/// Delete the temporary keychain.
pub fn execute(host: &HostEnv) -> Result<i32> {
    let runner = SystemRunner;
    let keychains = SecurityTool::new(&runner);

    match setup::teardown(host, &keychains)? {
        Teardown::NotCi => output::warn("not executed by a continuous integration system"),
        Teardown::Deleted => output::success("temporary keychain deleted"),
        Teardown::NothingToDelete => output::info("no temporary keychain to delete"),
    }
    Ok(0)
}
