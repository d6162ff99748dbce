//! Environment publishing.
//!
//! A child process cannot change its parent's environment, so published
//! variables are rendered for the caller to apply: as shell exports for
//! `eval`, as dotenv lines, or as JSON together with the shared values.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::outcome::Outcome;
use crate::core::process::shell_quote;
use crate::error::Result;

/// Rendering of an [`Outcome`] on stdout.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// `export KEY='value'` lines
    #[default]
    Shell,
    /// `KEY=value` lines
    Dotenv,
    /// JSON document with env, shared values and problems
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    env: &'a std::collections::BTreeMap<String, String>,
    shared: &'a std::collections::BTreeMap<String, String>,
    problems: Vec<JsonProblem>,
    aborted: bool,
}

#[derive(Serialize)]
struct JsonProblem {
    #[serde(flatten)]
    detail: serde_json::Value,
    message: String,
}

/// Render the outcome in `format`.
///
/// Shell and dotenv output carry the shared values too, since a shell lane
/// has no other result store.
pub fn render(outcome: &Outcome, format: Format) -> Result<String> {
    let mut out = String::new();
    match format {
        Format::Shell => {
            for (key, value) in pairs(outcome) {
                out.push_str(&format!("export {}={}\n", key, shell_quote(value)));
            }
        }
        Format::Dotenv => {
            for (key, value) in pairs(outcome) {
                out.push_str(&dotenv_line(key, value));
            }
        }
        Format::Json => {
            let problems = outcome
                .problems
                .iter()
                .map(|p| {
                    Ok(JsonProblem {
                        detail: serde_json::to_value(p)?,
                        message: p.to_string(),
                    })
                })
                .collect::<std::result::Result<Vec<_>, serde_json::Error>>()?;
            let report = JsonReport {
                env: &outcome.env,
                shared: &outcome.shared,
                problems,
                aborted: outcome.aborted,
            };
            out = serde_json::to_string_pretty(&report)?;
            out.push('\n');
        }
    }
    Ok(out)
}

/// Append the outcome to a CI runner env file, creating it if needed.
///
/// This is the file CI runners read between steps (for example
/// `$GITHUB_ENV`). Runners take everything after the first `=` literally, so
/// values are written unquoted; multi-line values use the
/// `KEY<<DELIMITER` block form.
pub fn append_env_file(outcome: &Outcome, path: &Path) -> Result<()> {
    debug!(path = %path.display(), vars = variable_count(outcome), "appending env file");
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    for (key, value) in pairs(outcome) {
        file.write_all(env_file_entry(key, value).as_bytes())?;
    }
    Ok(())
}

/// Number of variables [`render`] and [`append_env_file`] write.
pub fn variable_count(outcome: &Outcome) -> usize {
    pairs(outcome).count()
}

/// Environment variables followed by shared values not already exported.
fn pairs(outcome: &Outcome) -> impl Iterator<Item = (&String, &String)> {
    outcome.env.iter().chain(
        outcome
            .shared
            .iter()
            .filter(move |(key, _)| !outcome.env.contains_key(*key)),
    )
}

fn env_file_entry(key: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{}={}\n", key, value);
    }

    // The delimiter must not appear as a line of the value
    let mut delimiter = String::from("CILANE_EOF");
    while value.lines().any(|line| line == delimiter) {
        delimiter.push('_');
    }
    format!("{}<<{}\n{}\n{}\n", key, delimiter, value, delimiter)
}

fn dotenv_line(key: &str, value: &str) -> String {
    if needs_quotes(value) {
        format!("{}=\"{}\"\n", key, escape_value(value))
    } else {
        format!("{}={}\n", key, value)
    }
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value.chars().any(char::is_whitespace)
        || value.contains(['#', '=', '"', '\'', '\\'])
}

fn escape_value(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
