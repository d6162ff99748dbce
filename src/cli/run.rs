//! Run command.
//!
//! Runs setup, executes a command with the published variables injected,
//! then tears the keychain down again even if the command failed.

use tracing::debug;

use crate::cli::{output, resolve, setup as setup_cmd, SetupArgs};
use crate::core::constants;
use crate::core::host::HostEnv;
use crate::core::keychain::SecurityTool;
use crate::core::process::SystemRunner;
use crate::core::setup::{self, Teardown};
use crate::error::{Error, Result};

/// Run a command between setup and teardown.
pub fn execute(args: &SetupArgs, command: &[String], host: &HostEnv) -> Result<i32> {
    let Some((program, rest)) = command.split_first() else {
        return Err(Error::Other("no command specified".to_string()));
    };

    let options = resolve::setup_options(args, host)?;
    setup_cmd::summary(&options, host);

    let runner = SystemRunner;
    let keychains = SecurityTool::new(&runner);
    let outcome = setup::setup(&options, host, &keychains)?;

    let mut cmd = std::process::Command::new(program);
    cmd.args(rest);
    cmd.envs(outcome.env.iter().chain(outcome.shared.iter()));
    debug!(program = %program, vars = outcome.env.len(), "running command");

    let status = cmd.status();

    let mut teardown_host = host.clone();
    if let Some(path) = outcome.env_var(constants::KEYCHAIN_PATH) {
        teardown_host = teardown_host.with_var(constants::KEYCHAIN_PATH, path);
    }
    if setup::teardown(&teardown_host, &keychains)? == Teardown::Deleted {
        output::success("temporary keychain deleted");
    }

    // Signal-terminated children report 1
    Ok(status?.code().unwrap_or(1))
}
