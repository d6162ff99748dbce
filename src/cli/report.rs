//! Reporting an action's outcome.

use std::io::Write;
use std::path::PathBuf;

use crate::cli::output;
use crate::core::outcome::Outcome;
use crate::core::publish::{self, Format};
use crate::error::Result;

/// Where and how published variables go.
#[derive(Debug, Clone, Default)]
pub struct Publish {
    pub format: Format,
    pub env_file: Option<PathBuf>,
    pub strict: bool,
}

impl Publish {
    /// Print the outcome's messages, render its variables and return the
    /// exit code.
    pub fn emit(&self, outcome: &Outcome) -> Result<i32> {
        for (key, value) in &outcome.env {
            output::info(&format!("Setting {} to \"{}\"", output::key(key), value));
        }
        for (key, value) in &outcome.shared {
            if !outcome.env.contains_key(key) {
                output::info(&format!("Setting {} to \"{}\"", output::key(key), value));
            }
        }
        for problem in &outcome.problems {
            if problem.is_warning() {
                output::warn(&problem.to_string());
            } else {
                output::error(&problem.to_string());
            }
        }

        let rendered = publish::render(outcome, self.format)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;

        if let Some(path) = &self.env_file {
            publish::append_env_file(outcome, path)?;
            output::success(&format!(
                "{} variables appended to {}",
                publish::variable_count(outcome),
                output::path(path.display())
            ));
        }

        Ok(if outcome.aborted && self.strict { 1 } else { 0 })
    }
}
