//! External command execution.
//!
//! Every tool cilane shells out to (`xcodebuild`, `plutil`, `security`,
//! `brew`) goes through [`CommandRunner`], so tests can swap in a fake.

use std::fmt;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::ToolError;

/// A program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }
}

/// Renders the command the way a user would type it in a POSIX shell.
impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program))?;
        for arg in &self.args {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Quote a word for a POSIX shell, leaving plain words untouched.
pub fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into an error.
    pub fn check(self, command: &ToolCommand) -> Result<Self, ToolError> {
        if self.success() {
            Ok(self)
        } else {
            Err(ToolError::Failed {
                command: command.to_string(),
                status: self.code.unwrap_or(1),
                stderr: self.stderr,
            })
        }
    }
}

/// Executes external commands.
pub trait CommandRunner {
    /// Run to completion, capturing stdout and stderr.
    fn output(&self, command: &ToolCommand) -> Result<ToolOutput, ToolError>;

    /// Run to completion with inherited stdio, returning the exit code.
    fn status(&self, command: &ToolCommand) -> Result<i32, ToolError>;
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    fn prepare(command: &ToolCommand) -> Result<Command, ToolError> {
        let resolved = which::which(command.program()).map_err(|_| ToolError::NotFound {
            program: command.program().to_string(),
        })?;
        debug!(command = %command, path = %resolved.display(), "running tool");
        let mut cmd = Command::new(resolved);
        cmd.args(command.get_args());
        Ok(cmd)
    }
}

impl CommandRunner for SystemRunner {
    fn output(&self, command: &ToolCommand) -> Result<ToolOutput, ToolError> {
        let output = Self::prepare(command)?
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ToolError::Spawn {
                program: command.program().to_string(),
                source,
            })?;

        let result = ToolOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        debug!(
            command = %command,
            code = ?result.code,
            stdout_bytes = result.stdout.len(),
            "tool finished"
        );
        Ok(result)
    }

    fn status(&self, command: &ToolCommand) -> Result<i32, ToolError> {
        let status = Self::prepare(command)?
            .status()
            .map_err(|source| ToolError::Spawn {
                program: command.program().to_string(),
                source,
            })?;
        // Signal-terminated children report 1
        Ok(status.code().unwrap_or(1))
    }
}
