//! Ephemeral keychain lifecycle.
//!
//! Each CI job gets a keychain named after the unique project identifier.
//! Setup wipes any keychain a cancelled job left behind before creating a
//! fresh one; teardown deletes it again. Both only run under CI.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::constants;
use crate::core::host::HostEnv;
use crate::core::outcome::Outcome;
use crate::core::process::{CommandRunner, ToolCommand};
use crate::error::{KeychainError, Result, ToolError};

/// Name, password and location of a temporary keychain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeychainSpec {
    pub name: String,
    pub password: String,
    pub path: PathBuf,
}

impl KeychainSpec {
    /// Derive the keychain for a unique project identifier.
    pub fn for_id(id: &str, host: &HostEnv) -> Result<Self> {
        let name = format!("{}{}", id, constants::KEYCHAIN_NAME_SUFFIX);
        let password = format!("{}{}", name, constants::KEYCHAIN_PASSWORD_SUFFIX);
        let path = host.expand_path(format!(
            "~/{}/{}.{}",
            constants::KEYCHAIN_DIR,
            name,
            constants::KEYCHAIN_FILE_EXTENSION
        ))?;
        Ok(Self {
            name,
            password,
            path,
        })
    }

    /// Variables consumed by match and the keychain actions.
    pub fn publish(&self, outcome: &mut Outcome) {
        outcome.set_env(constants::KEYCHAIN_PASSWORD, &self.password);
        outcome.set_env_path(constants::KEYCHAIN_PATH, &self.path);
        outcome.set_env(constants::MATCH_KEYCHAIN_NAME, &self.name);
        outcome.set_env(constants::MATCH_KEYCHAIN_PASSWORD, &self.password);
    }
}

/// Creates and deletes keychain files.
pub trait KeychainManager {
    /// Create an unlocked keychain without auto-lock, on the search list.
    fn create(&self, spec: &KeychainSpec) -> Result<()>;

    /// Delete the keychain at `path` and drop it from the search list.
    fn delete(&self, path: &Path) -> Result<()>;
}

/// Drives the macOS `security` tool.
pub struct SecurityTool<'a, R: CommandRunner> {
    runner: &'a R,
}

impl<'a, R: CommandRunner> SecurityTool<'a, R> {
    const PROGRAM: &'static str = "security";

    pub fn new(runner: &'a R) -> Self {
        Self { runner }
    }

    fn run(&self, args: &[&str]) -> std::result::Result<String, ToolError> {
        let command = ToolCommand::new(Self::PROGRAM).args(args.iter().copied());
        let output = self.runner.output(&command)?.check(&command)?;
        Ok(output.stdout)
    }

    fn search_list(&self) -> std::result::Result<Vec<String>, ToolError> {
        let listing = self.run(&["list-keychains", "-d", "user"])?;
        Ok(parse_search_list(&listing))
    }

    fn create_steps(&self, spec: &KeychainSpec) -> std::result::Result<(), ToolError> {
        let path = spec.path.display().to_string();
        let password = spec.password.as_str();
        self.run(&["create-keychain", "-p", password, path.as_str()])?;
        // No -t and no -l: never auto-lock
        self.run(&["set-keychain-settings", path.as_str()])?;
        self.run(&["unlock-keychain", "-p", password, path.as_str()])?;

        let mut keychains = self.search_list()?;
        if !keychains.iter().any(|k| k == &path) {
            keychains.push(path);
            let mut args = vec!["list-keychains", "-d", "user", "-s"];
            args.extend(keychains.iter().map(String::as_str));
            self.run(&args)?;
        }
        Ok(())
    }
}

impl<R: CommandRunner> KeychainManager for SecurityTool<'_, R> {
    fn create(&self, spec: &KeychainSpec) -> Result<()> {
        info!(path = %spec.path.display(), name = %spec.name, "creating keychain");
        self.create_steps(spec).map_err(|source| {
            KeychainError::Create {
                path: spec.path.clone(),
                source,
            }
            .into()
        })
    }

    fn delete(&self, path: &Path) -> Result<()> {
        info!(path = %path.display(), "deleting keychain");
        let display = path.display().to_string();
        self.run(&["delete-keychain", display.as_str()])
            .map(|_| ())
            .map_err(|source| {
                KeychainError::Delete {
                    path: path.to_path_buf(),
                    source,
                }
                .into()
            })
    }
}

/// Parse `security list-keychains` output: one quoted path per line.
fn parse_search_list(listing: &str) -> Vec<String> {
    listing
        .lines()
        .map(|line| line.trim().trim_matches('"').to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Publish the keychain variables and create a fresh keychain.
///
/// A keychain already present at the target path is left over from a job
/// that never reached teardown; it is deleted first.
pub fn setup(
    id: &str,
    host: &HostEnv,
    manager: &dyn KeychainManager,
    outcome: &mut Outcome,
) -> Result<KeychainSpec> {
    let spec = KeychainSpec::for_id(id, host)?;
    spec.publish(outcome);

    if spec.path.exists() {
        info!(path = %spec.path.display(), "removing dangling temporary keychain");
        manager.delete(&spec.path)?;
    }

    manager.create(&spec)?;
    Ok(spec)
}

/// Delete the keychain published at `KEYCHAIN_PATH`, if any.
///
/// Returns whether a keychain was deleted. Calling it again, or without a
/// prior setup, is a no-op.
pub fn teardown(host: &HostEnv, manager: &dyn KeychainManager) -> Result<bool> {
    let Some(path) = host.var(constants::KEYCHAIN_PATH) else {
        debug!("KEYCHAIN_PATH not set, nothing to tear down");
        return Ok(false);
    };
    teardown_path(Path::new(path), manager)
}

/// Delete the keychain at `path` if it exists.
pub fn teardown_path(path: &Path, manager: &dyn KeychainManager) -> Result<bool> {
    if !path.exists() {
        debug!(path = %path.display(), "no keychain to delete");
        return Ok(false);
    }
    manager.delete(path)?;
    Ok(true)
}
