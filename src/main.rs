//! cilane - CI environment setup for Xcode lanes.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cilane::cli::output;
use cilane::cli::{execute, Cli, LogFormat};
use cilane::core::constants;
use cilane::error::{ConfigError, Error, KeychainError, ToolError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cilane=debug")
        } else {
            EnvFilter::new("cilane=warn")
        }
    });

    let json = cli.log_format == LogFormat::Json;
    tracing_subscriber::registry()
        .with(filter)
        .with((!json).then(|| {
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr)
        }))
        .with(json.then(|| {
            fmt::layer()
                .json()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr)
        }))
        .init();

    match execute(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            let suggestion = match &e {
                Error::Config(ConfigError::MissingField { field: "project" }) => {
                    Some("pass --project or set XC_PROJECT")
                }
                Error::Config(ConfigError::MissingField { field: "scheme" }) => {
                    Some("pass --scheme or set GYM_SCHEME")
                }
                Error::Config(ConfigError::MissingField {
                    field: "xcodebuild_archive",
                }) => Some("pass --xcodebuild-archive or set XCODEBUILD_ARCHIVE"),
                Error::Tool(ToolError::NotFound { .. })
                | Error::Keychain(
                    KeychainError::Create {
                        source: ToolError::NotFound { .. },
                        ..
                    }
                    | KeychainError::Delete {
                        source: ToolError::NotFound { .. },
                        ..
                    },
                ) => {
                    Some("install the Xcode command line tools: xcode-select --install")
                }
                _ => None,
            };

            output::error(&e.to_string());
            if let Some(hint) = suggestion {
                output::hint(hint);
            }
            std::process::exit(1);
        }
    }
}
