//! Firebase setup command.

use crate::cli::report::Publish;
use crate::cli::{output, resolve, FirebaseArgs};
use crate::core::firebase::{self, FirebaseOptions};
use crate::core::host::HostEnv;
use crate::core::process::SystemRunner;
use crate::error::Result;

fn summary(options: &FirebaseOptions) {
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    output::section("Summary for Firebase Distribution Setup");
    output::kv("workspace", or_dash(&options.workspace));
    output::kv("project", or_dash(&options.project));
    output::kv("scheme", &options.scheme);
    output::kv("configuration", or_dash(&options.configuration));
    output::kv("xcodebuild_archive", options.xcodebuild_archive.display());
    output::kv("credentials_dir", &options.credentials_dir);
    output::kv("credentials", or_dash(&options.credentials));
    output::rule();
}

/// Resolve Firebase variables and publish them.
pub fn execute(args: &FirebaseArgs, host: &HostEnv, publish: &Publish) -> Result<i32> {
    let options = resolve::firebase_options(args, host)?;
    summary(&options);

    let outcome = firebase::setup(&options, host, &SystemRunner);
    publish.emit(&outcome)
}
