//! Unique project identifier.
//!
//! The identifier namespaces resources that several projects share on one
//! machine: the match git branch and the temporary keychain.

use std::path::Path;

/// Derive the unique identifier for a project and an optional team id.
///
/// Takes the file name of `project` without its extension, replaces every
/// character outside `[0-9A-Za-z]` with `-` and lower-cases the result. A
/// non-empty `team_id` is appended after a `-` as given.
///
/// ```
/// use cilane::core::identifier::derive;
///
/// assert_eq!(derive("MyApp.xcodeproj", Some("ABC123")), "myapp-ABC123");
/// assert_eq!(derive("My App v2.xcodeproj", Some("")), "my-app-v2");
/// ```
pub fn derive(project: &str, team_id: Option<&str>) -> String {
    let normalized = normalize(file_stem(project));
    match team_id {
        Some(team) if !team.is_empty() => format!("{}-{}", normalized, team),
        _ => normalized,
    }
}

fn file_stem(project: &str) -> &str {
    let path = Path::new(project);
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(project)
}

fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}
