//! Command-line interface.

pub mod brew;
pub mod completions;
pub mod firebase;
pub mod output;
pub mod report;
pub mod resolve;
pub mod run;
pub mod setup;
pub mod teardown;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::host::HostEnv;
use crate::core::publish::Format;
use crate::error::Result;

/// cilane - CI environment setup for Xcode lanes.
#[derive(Parser)]
#[command(
    name = "cilane",
    about = "CI environment setup for Xcode lanes",
    version,
    after_help = "Evaluate the output in your lane: eval \"$(cilane setup --project App.xcodeproj)\""
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Format of log lines on stderr
    #[arg(
        long,
        value_enum,
        global = true,
        env = "CILANE_LOG_FORMAT",
        default_value_t = LogFormat::Text
    )]
    pub log_format: LogFormat,

    /// How published variables are printed on stdout
    #[arg(long, value_enum, global = true, default_value_t = Format::Shell)]
    pub format: Format,

    /// Also append published variables to this file (e.g. $GITHUB_ENV)
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Exit with status 1 when an action stops on a missing precondition
    #[arg(long, global = true)]
    pub strict: bool,

    /// Behave as if running under CI
    #[arg(long, global = true, conflicts_with = "no_ci")]
    pub ci: bool,

    /// Behave as if not running under CI
    #[arg(long, global = true)]
    pub no_ci: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn ci_override(&self) -> Option<bool> {
        match (self.ci, self.no_ci) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Publish the unique project id; under CI also create a temporary
    /// keychain and publish build paths
    Setup(SetupArgs),

    /// Delete the temporary keychain created by setup (CI only)
    Teardown,

    /// Publish Firebase App Distribution variables and credentials
    FirebaseSetup(FirebaseArgs),

    /// Install Homebrew dependencies from ./Brewfile
    InstallBrewDeps,

    /// Print the unique project id
    Id(ProjectArgs),

    /// Run setup, a command with the published variables, then teardown
    Run {
        #[command(flatten)]
        setup: SetupArgs,

        /// Command and arguments to run
        #[arg(trailing_var_arg = true, required = true)]
        command: Vec<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Project identity options.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to the .xcodeproj, or any project-describing name
    #[arg(long, env = "XC_PROJECT")]
    pub project: Option<String>,

    /// Developer team id appended to the unique project id
    #[arg(long)]
    pub team_id: Option<String>,
}

/// Options of `setup` and `run`.
#[derive(Args, Debug, Clone, Default)]
pub struct SetupArgs {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Directory for the .ipa and .xcarchive [default: ./build]
    #[arg(long, env = "CI_OUTPUT_DIRECTORY")]
    pub output_directory: Option<String>,

    /// Name of the .xcarchive; only used with an output directory
    #[arg(long, env = "CI_ARCHIVE_NAME")]
    pub archive_name: Option<String>,

    /// Derived data path [default: ./build/DerivedData]
    #[arg(long, env = "CI_DERIVED_DATA_PATH")]
    pub derived_data_path: Option<String>,
}

/// Options of `firebase-setup`.
#[derive(Args, Debug, Clone, Default)]
pub struct FirebaseArgs {
    /// Path to the workspace file
    #[arg(long, env = "GYM_WORKSPACE")]
    pub workspace: Option<String>,

    /// Path to the project file (falls back to $XC_PROJECT)
    #[arg(long, env = "GYM_PROJECT")]
    pub project: Option<String>,

    /// The project's shared scheme
    #[arg(long, env = "GYM_SCHEME")]
    pub scheme: Option<String>,

    /// Build configuration
    #[arg(long, env = "GYM_CONFIGURATION")]
    pub configuration: Option<String>,

    /// Path to the resulting .xcarchive
    #[arg(long, env = "XCODEBUILD_ARCHIVE")]
    pub xcodebuild_archive: Option<PathBuf>,

    /// Directory holding <firebase project id>.json service account files
    /// [default: google-application-credentials]
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS_DIR")]
    pub google_application_credentials_dir: Option<String>,

    /// Explicit service account credentials file
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub google_application_credentials: Option<String>,
}

/// Log line formats.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command, returning the process exit code.
pub fn execute(cli: Cli) -> Result<i32> {
    let host = HostEnv::capture()?.with_ci(cli.ci_override());
    let publish = report::Publish {
        format: cli.format,
        env_file: cli.env_file.clone(),
        strict: cli.strict,
    };

    match cli.command {
        Command::Setup(args) => setup::execute(&args, &host, &publish),
        Command::Teardown => teardown::execute(&host),
        Command::FirebaseSetup(args) => firebase::execute(&args, &host, &publish),
        Command::InstallBrewDeps => brew::execute(&host),
        Command::Id(args) => setup::print_id(&args, &host),
        Command::Run { setup, command } => run::execute(&setup, &command, &host),
        Command::Completions { shell } => completions::execute(shell),
    }
}
