//! Shared CLI output helpers for consistent terminal output.
//!
//! Everything goes to stderr: stdout carries the rendered variables a lane
//! evaluates.
//!
//! Color scheme (respects NO_COLOR):
//! - Green: success, checkmarks
//! - Red: errors
//! - Yellow: warnings
//! - Cyan: paths, commands, keys, hints
//! - Bold: headers, important values
//! - Dimmed: secondary info

use console::style;
use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Check if color output is disabled via NO_COLOR env var.
fn colors_enabled() -> bool {
    std::env::var("NO_COLOR").is_err() && console::colors_enabled_stderr()
}

/// Print a success message with checkmark (green).
///
/// Example: `✓ keychain created`
pub fn success(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✓").green(), msg);
    } else {
        eprintln!("✓ {}", msg);
    }
}

/// Print an error message (red).
///
/// Example: `✗ scheme not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ not executed by CI`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ pass --workspace or --project`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("→").cyan(), style(msg).cyan());
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a plain informational line.
pub fn info(msg: &str) {
    eprintln!("{}", msg);
}

/// Print a bold section header.
pub fn header(title: &str) {
    if colors_enabled() {
        eprintln!("{}", style(title).bold());
    } else {
        eprintln!("{}", title);
    }
}

/// Print a key-value pair (label dimmed, value bold).
///
/// Example: `  project              MyApp.xcodeproj`
pub fn kv(label: &str, value: impl Display) {
    if colors_enabled() {
        eprintln!(
            "  {}  {}",
            style(format!("{:<20}", label)).dim(),
            style(value).bold()
        );
    } else {
        eprintln!("  {:<20}  {}", label, value);
    }
}

/// Print a horizontal rule separator.
pub fn rule() {
    if colors_enabled() {
        eprintln!("{}", style("─".repeat(RULE_WIDTH)).dim());
    } else {
        eprintln!("{}", "─".repeat(RULE_WIDTH));
    }
}

/// Print a blank line.
pub fn blank() {
    eprintln!();
}

/// Format a path string in cyan.
pub fn path(p: impl Display) -> String {
    if colors_enabled() {
        style(p).cyan().to_string()
    } else {
        p.to_string()
    }
}

/// Format a key name in cyan.
pub fn key(k: &str) -> String {
    if colors_enabled() {
        style(k).cyan().to_string()
    } else {
        k.to_string()
    }
}

/// Print a section header with a separator line.
///
/// Example:
/// ```text
/// Summary for CI Setup
/// ────────────────────────────────────────────────────────
/// ```
pub fn section(title: &str) {
    blank();
    header(title);
    rule();
}
