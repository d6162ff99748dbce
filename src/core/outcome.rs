//! Structured results of an action.
//!
//! An action never mutates the environment itself. It returns an [`Outcome`]
//! listing the variables to publish, the shared result values, and any
//! problems it reported before returning early.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// A precondition or tool failure that was reported instead of raised.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    #[error(
        "both workspace <{workspace}> and project <{project}> are either empty or not provided; pass at least one of them"
    )]
    NoContainer { workspace: String, project: String },

    #[error("failed to run \"{command}\": {reason}")]
    BuildSettingsQueryFailed { command: String, reason: String },

    #[error("failed to get Xcode build settings after running:\n\"{command}\"")]
    EmptyBuildSettings { command: String },

    #[error("failed to get a product name from the build settings")]
    MissingProductName,

    #[error(
        "no GoogleService-Info.plist found at \"{path}\"; make sure it is added to the product \"{product}\""
    )]
    MissingPlist { path: String, product: String },

    #[error("{key} is missing from {path}")]
    MissingPlistKey { key: String, path: String },

    #[error("google_application_credentials is set to \"{path}\" but no file exists at that path")]
    MissingExplicitCredentials { path: String },

    #[error(
        "no Google application credentials found at \"{path}\"; set google_application_credentials or google_application_credentials_dir, or export GOOGLE_APPLICATION_CREDENTIALS on the CI runner"
    )]
    MissingCredentials { path: String },
}

impl Problem {
    /// Whether the problem is shown as a warning rather than an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, Problem::MissingPlistKey { .. })
    }
}

/// Result of running one action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Outcome {
    /// Variables to publish into the process environment.
    pub env: BTreeMap<String, String>,
    /// Values for the lane's result store.
    pub shared: BTreeMap<String, String>,
    /// Problems reported along the way.
    pub problems: Vec<Problem>,
    /// Whether the action stopped before its last step.
    pub aborted: bool,
}

impl Outcome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an environment variable to publish.
    pub fn set_env(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        info!(key = %key, value = %value, "publishing variable");
        self.env.insert(key.to_string(), value);
    }

    /// Record a path-valued environment variable.
    pub fn set_env_path(&mut self, key: &str, value: &std::path::Path) {
        self.set_env(key, value.display().to_string());
    }

    /// Record a shared result value.
    pub fn set_shared(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        info!(key = %key, value = %value, "publishing shared value");
        self.shared.insert(key.to_string(), value);
    }

    /// Report a problem without stopping.
    pub fn report(&mut self, problem: Problem) {
        debug!(problem = %problem, "problem reported");
        self.problems.push(problem);
    }

    /// Report a problem and mark the action as stopped.
    pub fn abort(mut self, problem: Problem) -> Self {
        self.report(problem);
        self.aborted = true;
        self
    }

    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    pub fn env_path(&self, key: &str) -> Option<PathBuf> {
        self.env_var(key).map(PathBuf::from)
    }

    pub fn shared_value(&self, key: &str) -> Option<&str> {
        self.shared.get(key).map(String::as_str)
    }
}
