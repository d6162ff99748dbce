//! Snapshot of the host process environment.
//!
//! Actions never read `std::env` directly; the CLI captures a [`HostEnv`]
//! once and passes it down, which keeps every action testable.

use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Environment variables, working directory and home directory of the host.
#[derive(Debug, Clone, Default)]
pub struct HostEnv {
    vars: BTreeMap<String, String>,
    cwd: PathBuf,
    home: Option<PathBuf>,
    ci_override: Option<bool>,
}

impl HostEnv {
    /// Build a snapshot from explicit parts.
    pub fn new(cwd: impl Into<PathBuf>, home: Option<PathBuf>) -> Self {
        Self {
            vars: BTreeMap::new(),
            cwd: cwd.into(),
            home,
            ci_override: None,
        }
    }

    /// Capture the current process environment.
    pub fn capture() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Ok(Self {
            vars: std::env::vars().collect(),
            cwd,
            home: dirs::home_dir(),
            ci_override: None,
        })
    }

    /// Set a variable in the snapshot.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Force the CI predicate instead of detecting it.
    pub fn with_ci(mut self, ci: Option<bool>) -> Self {
        self.ci_override = ci;
        self
    }

    /// Look up a variable, treating empty values as unset.
    pub fn var(&self, key: &str) -> Option<&str> {
        self.vars
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Home directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHome` if the home directory is unknown.
    pub fn home(&self) -> Result<&Path> {
        self.home
            .as_deref()
            .ok_or_else(|| ConfigError::NoHome.into())
    }

    /// Whether the process runs under a CI system.
    ///
    /// Any of [`constants::CI_MARKERS`] being set counts, unless an explicit
    /// override was given.
    pub fn is_ci(&self) -> bool {
        if let Some(forced) = self.ci_override {
            return forced;
        }
        constants::CI_MARKERS
            .iter()
            .any(|marker| self.vars.contains_key(*marker))
    }

    /// Resolve a path to absolute form.
    ///
    /// A leading `~` expands to the home directory; relative paths are
    /// joined onto the working directory; `.` and `..` are removed
    /// lexically. The path is not required to exist.
    pub fn expand_path(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let joined = match path.strip_prefix("~") {
            Ok(rest) => self.home()?.join(rest),
            Err(_) if path.is_absolute() => path.to_path_buf(),
            Err(_) => self.cwd.join(path),
        };
        Ok(normalize(&joined))
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
