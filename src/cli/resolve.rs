//! Option resolution for CLI commands.
//!
//! Precedence: command-line flag or its environment override, then
//! `.cilane.toml`, then the built-in default.

use crate::cli::{FirebaseArgs, ProjectArgs, SetupArgs};
use crate::core::config::Config;
use crate::core::constants;
use crate::core::firebase::FirebaseOptions;
use crate::core::host::HostEnv;
use crate::core::paths::BuildPaths;
use crate::core::setup::SetupOptions;
use crate::error::{ConfigError, Result};

fn pick(flag: &Option<String>, file: &Option<String>) -> Option<String> {
    flag.clone()
        .filter(|v| !v.is_empty())
        .or_else(|| file.clone().filter(|v| !v.is_empty()))
}

/// Resolve the team id: flag, then `.cilane.toml`, then `$FASTLANE_TEAM_ID`.
pub fn team_id(args: &ProjectArgs, config: &Config, host: &HostEnv) -> Option<String> {
    pick(&args.team_id, &config.project.team_id)
        .or_else(|| host.var(constants::FASTLANE_TEAM_ID).map(str::to_string))
}

fn project(args: &ProjectArgs, config: &Config) -> Result<String> {
    pick(&args.project, &config.project.path)
        .ok_or_else(|| ConfigError::MissingField { field: "project" }.into())
}

/// Resolve the options of `id`.
pub fn project_options(args: &ProjectArgs, host: &HostEnv) -> Result<SetupOptions> {
    let config = Config::load(host.cwd())?;
    let options = SetupOptions {
        project: project(args, &config)?,
        team_id: team_id(args, &config, host),
        paths: BuildPaths::default(),
    };
    options.validate()?;
    Ok(options)
}

/// Resolve the options of `setup` and `run`.
pub fn setup_options(args: &SetupArgs, host: &HostEnv) -> Result<SetupOptions> {
    let config = Config::load(host.cwd())?;
    let paths = &config.paths;
    let options = SetupOptions {
        project: project(&args.project, &config)?,
        team_id: team_id(&args.project, &config, host),
        paths: BuildPaths {
            output_directory: pick(&args.output_directory, &paths.output_directory)
                .or_else(|| Some(constants::DEFAULT_OUTPUT_DIRECTORY.to_string())),
            archive_name: pick(&args.archive_name, &paths.archive_name),
            derived_data_path: pick(&args.derived_data_path, &paths.derived_data_path)
                .or_else(|| Some(constants::DEFAULT_DERIVED_DATA_PATH.to_string())),
        },
    };
    options.validate()?;
    Ok(options)
}

/// Resolve the options of `firebase-setup`.
pub fn firebase_options(args: &FirebaseArgs, host: &HostEnv) -> Result<FirebaseOptions> {
    let config = Config::load(host.cwd())?;
    let firebase = &config.firebase;

    let project = pick(&args.project, &config.project.path)
        .or_else(|| host.var("XC_PROJECT").map(str::to_string));
    let scheme = pick(&args.scheme, &firebase.scheme)
        .ok_or(ConfigError::MissingField { field: "scheme" })?;
    let archive = args
        .xcodebuild_archive
        .clone()
        .ok_or(ConfigError::MissingField {
            field: "xcodebuild_archive",
        })?;

    let options = FirebaseOptions {
        workspace: pick(&args.workspace, &firebase.workspace),
        project,
        scheme,
        configuration: pick(&args.configuration, &firebase.configuration),
        xcodebuild_archive: archive,
        credentials_dir: pick(
            &args.google_application_credentials_dir,
            &firebase.credentials_dir,
        )
        .unwrap_or_else(|| constants::DEFAULT_CREDENTIALS_DIR.to_string()),
        credentials: args
            .google_application_credentials
            .clone()
            .filter(|v| !v.is_empty()),
    };
    options.validate()?;
    Ok(options)
}
