//! Setup command.
//!
//! Publishes the unique project id and match branch; under CI also creates
//! the temporary keychain and publishes build paths.

use crate::cli::report::Publish;
use crate::cli::{output, resolve, ProjectArgs, SetupArgs};
use crate::core::host::HostEnv;
use crate::core::keychain::SecurityTool;
use crate::core::process::SystemRunner;
use crate::core::setup::{self, SetupOptions};
use crate::error::Result;

/// Print the options table.
pub fn summary(options: &SetupOptions, host: &HostEnv) {
    output::section("Summary for CI Setup");
    output::kv("project", &options.project);
    output::kv("team_id", options.team_id.as_deref().unwrap_or("-"));
    let paths = &options.paths;
    output::kv("output_directory", paths.output_directory.as_deref().unwrap_or("-"));
    output::kv("archive_name", paths.archive_name.as_deref().unwrap_or("-"));
    output::kv("derived_data_path", paths.derived_data_path.as_deref().unwrap_or("-"));
    output::kv("ci", host.is_ci());
    output::rule();
}

/// Run setup and publish its variables.
pub fn execute(args: &SetupArgs, host: &HostEnv, publish: &Publish) -> Result<i32> {
    let options = resolve::setup_options(args, host)?;
    summary(&options, host);

    let runner = SystemRunner;
    let keychains = SecurityTool::new(&runner);
    let outcome = setup::setup(&options, host, &keychains)?;

    if !host.is_ci() {
        output::hint("not running under CI: keychain and build paths skipped");
    }
    publish.emit(&outcome)
}

/// Print the unique project id.
pub fn print_id(args: &ProjectArgs, host: &HostEnv) -> Result<i32> {
    let options = resolve::project_options(args, host)?;
    println!("{}", options.unique_id());
    Ok(0)
}
