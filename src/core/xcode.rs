//! Xcode build settings query.

use std::collections::BTreeMap;

use tracing::debug;

use crate::core::process::{CommandRunner, ToolCommand};
use crate::error::ToolError;

/// The workspace or project a query runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Container {
    Workspace(String),
    Project(String),
}

impl Container {
    /// Pick the workspace if usable, otherwise the project.
    pub fn choose(workspace: Option<&str>, project: Option<&str>) -> Option<Self> {
        match (nonempty(workspace), nonempty(project)) {
            (Some(w), _) => Some(Self::Workspace(w.to_string())),
            (None, Some(p)) => Some(Self::Project(p.to_string())),
            (None, None) => None,
        }
    }

    fn flag(&self) -> (&'static str, &str) {
        match self {
            Self::Workspace(path) => ("-workspace", path),
            Self::Project(path) => ("-project", path),
        }
    }
}

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// `xcodebuild -showBuildSettings` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSettingsQuery {
    pub container: Container,
    pub scheme: String,
    pub configuration: Option<String>,
}

impl BuildSettingsQuery {
    pub fn command(&self) -> ToolCommand {
        let (flag, path) = self.container.flag();
        let mut command = ToolCommand::new("xcodebuild")
            .arg("-showBuildSettings")
            .args([flag, path])
            .args(["-scheme", self.scheme.as_str()]);
        if let Some(configuration) = nonempty(self.configuration.as_deref()) {
            command = command.args(["-configuration", configuration]);
        }
        command
    }

    /// Run the query and return its raw stdout.
    pub fn run(&self, runner: &dyn CommandRunner) -> Result<String, ToolError> {
        let command = self.command();
        let output = runner.output(&command)?;
        debug!(
            command = %command,
            code = ?output.code,
            "build settings query finished"
        );
        Ok(output.stdout)
    }
}

/// Parsed `KEY = value` lines of a build settings dump.
///
/// When several targets repeat a key, the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildSettings {
    values: BTreeMap<String, String>,
}

impl BuildSettings {
    pub fn parse(text: &str) -> Self {
        let mut values = BTreeMap::new();
        for line in text.lines() {
            let Some((key, value)) = line.split_once(" = ") else {
                continue;
            };
            let key = key.trim();
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                continue;
            }
            values
                .entry(key.to_string())
                .or_insert_with(|| value.trim().to_string());
        }
        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn product_name(&self) -> Option<&str> {
        self.get("PRODUCT_NAME")
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
