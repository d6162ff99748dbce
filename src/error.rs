//! Error types.
//!
//! Hard failures propagate through [`Error`] and end the process with a
//! non-zero status. Missing preconditions inside an action are not errors in
//! this sense; they are reported as [`crate::core::outcome::Problem`] values.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Keychain(#[from] KeychainError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

/// Configuration and option validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required option: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse .cilane.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("unable to determine home directory")]
    NoHome,
}

/// Failures of shelled-out tools.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{program} not found on PATH")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with status {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: i32,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {}", trimmed)
    }
}

/// Keychain management failures.
#[derive(Error, Debug)]
pub enum KeychainError {
    #[error("failed to create keychain at {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: ToolError,
    },

    #[error("failed to delete keychain at {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: ToolError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
