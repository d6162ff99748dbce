//! Reading string values out of a plist with `plutil -p`.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use crate::core::process::{CommandRunner, ToolCommand};

/// Top-level string entries printed by `plutil -p`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlistStrings {
    values: BTreeMap<String, String>,
}

impl PlistStrings {
    /// Parse lines of the form `"KEY" => "value"`.
    ///
    /// Non-string values (numbers, booleans, nested dictionaries) are
    /// skipped.
    pub fn parse(text: &str) -> Self {
        let mut values = BTreeMap::new();
        for line in text.lines() {
            let Some((key, value)) = line.trim().split_once(" => ") else {
                continue;
            };
            let (Some(key), Some(value)) = (unquote(key), unquote(value)) else {
                continue;
            };
            values.entry(key.to_string()).or_insert_with(|| value.to_string());
        }
        Self { values }
    }

    /// Run `plutil -p` on `path` and parse the result.
    ///
    /// A failing tool yields no values; callers treat every key as missing.
    pub fn read(path: &Path, runner: &dyn CommandRunner) -> Self {
        let command = ToolCommand::new("plutil")
            .arg("-p")
            .arg(path.display().to_string());
        match runner.output(&command) {
            Ok(output) => Self::parse(&output.stdout),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read plist");
                Self::default()
            }
        }
    }

    /// Value for `key`, or an empty string when absent.
    pub fn value(&self, key: &str) -> &str {
        self.values.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}

fn unquote(token: &str) -> Option<&str> {
    token.trim().strip_prefix('"')?.strip_suffix('"')
}
