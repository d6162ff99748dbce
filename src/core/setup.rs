//! CI setup and teardown actions.

use tracing::{debug, info};

use crate::core::constants;
use crate::core::host::HostEnv;
use crate::core::identifier;
use crate::core::keychain::{self, KeychainManager};
use crate::core::outcome::Outcome;
use crate::core::paths::{self, BuildPaths};
use crate::error::{ConfigError, Result};

/// Options of the setup action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    /// Path to the `.xcodeproj`, or any project-describing name.
    pub project: String,
    pub team_id: Option<String>,
    pub paths: BuildPaths,
}

impl SetupOptions {
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` if the project is empty.
    pub fn validate(&self) -> Result<()> {
        if self.project.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "project" }.into());
        }
        Ok(())
    }

    /// The unique project identifier for these options.
    pub fn unique_id(&self) -> String {
        identifier::derive(&self.project, self.team_id.as_deref())
    }
}

/// Run the setup action.
///
/// The identifier and match branch are published everywhere, so local and
/// CI machines agree on them. The keychain and build paths are only set up
/// under CI.
///
/// # Errors
///
/// Returns an error if keychain creation or deletion fails, or if a path
/// cannot be resolved.
pub fn setup(
    options: &SetupOptions,
    host: &HostEnv,
    keychains: &dyn KeychainManager,
) -> Result<Outcome> {
    options.validate()?;
    let mut outcome = Outcome::new();

    let id = options.unique_id();
    info!(id = %id, "unique project id");
    outcome.set_env(constants::CI_UNIQUE_PROJECT_ID, &id);
    outcome.set_shared(constants::CI_UNIQUE_PROJECT_ID, &id);
    outcome.set_env(constants::MATCH_GIT_BRANCH, &id);

    if !host.is_ci() {
        debug!("not running under CI, skipping keychain and build paths");
        return Ok(outcome);
    }

    keychain::setup(&id, host, keychains, &mut outcome)?;
    paths::propagate(&options.paths, host, &mut outcome)?;

    Ok(outcome)
}

/// Result of the teardown action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Teardown {
    NotCi,
    Deleted,
    NothingToDelete,
}

/// Run the teardown action.
///
/// # Errors
///
/// Returns an error if deleting an existing keychain fails.
pub fn teardown(host: &HostEnv, keychains: &dyn KeychainManager) -> Result<Teardown> {
    if !host.is_ci() {
        return Ok(Teardown::NotCi);
    }
    if keychain::teardown(host, keychains)? {
        Ok(Teardown::Deleted)
    } else {
        Ok(Teardown::NothingToDelete)
    }
}
