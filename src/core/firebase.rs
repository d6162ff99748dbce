//! Firebase App Distribution setup.
//!
//! Finds the Firebase project, app and bundle ids embedded in the archived
//! app's `GoogleService-Info.plist`, derives the console releases URL and
//! resolves the service account credentials file.
//!
//! Every missing precondition is reported on the [`Outcome`] and ends the
//! action early. Variables published before that point stay published.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::constants;
use crate::core::host::HostEnv;
use crate::core::outcome::{Outcome, Problem};
use crate::core::plist::PlistStrings;
use crate::core::process::CommandRunner;
use crate::core::xcode::{BuildSettings, BuildSettingsQuery, Container};
use crate::error::{ConfigError, Result};

/// Options of the Firebase setup action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseOptions {
    pub workspace: Option<String>,
    pub project: Option<String>,
    pub scheme: String,
    pub configuration: Option<String>,
    pub xcodebuild_archive: PathBuf,
    pub credentials_dir: String,
    pub credentials: Option<String>,
}

impl FirebaseOptions {
    /// Check required options.
    ///
    /// Workspace and project are not checked here: having neither is a
    /// reported problem, not a configuration error.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the scheme, archive or credentials directory
    /// is empty.
    pub fn validate(&self) -> Result<()> {
        if self.scheme.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "scheme" }.into());
        }
        if self.xcodebuild_archive.as_os_str().is_empty() {
            return Err(ConfigError::MissingField {
                field: "xcodebuild_archive",
            }
            .into());
        }
        if self.credentials_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "google_application_credentials_dir",
                reason: "must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Values read from `GoogleService-Info.plist`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FirebaseApp {
    pub project_id: String,
    pub app_id: String,
    pub bundle_id: String,
}

impl FirebaseApp {
    const KEYS: [&'static str; 3] = ["PROJECT_ID", "GOOGLE_APP_ID", "BUNDLE_ID"];

    fn from_plist(plist: &PlistStrings) -> Self {
        Self {
            project_id: plist.value("PROJECT_ID").to_string(),
            app_id: plist.value("GOOGLE_APP_ID").to_string(),
            bundle_id: plist.value("BUNDLE_ID").to_string(),
        }
    }

    /// Firebase console page listing the app's distributed releases.
    pub fn releases_url(&self) -> String {
        format!(
            "https://console.firebase.google.com/u/0/project/{}/appdistribution/app/ios:{}/releases",
            self.project_id, self.bundle_id
        )
    }
}

/// Location of `GoogleService-Info.plist` inside an archive.
pub fn plist_path(archive: &Path, product_name: &str) -> PathBuf {
    archive
        .join("Products")
        .join("Applications")
        .join(format!("{}.app", product_name))
        .join(constants::GOOGLE_SERVICE_INFO_PLIST)
}

/// Run the Firebase setup.
pub fn setup(options: &FirebaseOptions, host: &HostEnv, runner: &dyn CommandRunner) -> Outcome {
    let mut outcome = Outcome::new();

    let Some(container) = Container::choose(options.workspace.as_deref(), options.project.as_deref())
    else {
        return outcome.abort(Problem::NoContainer {
            workspace: options.workspace.clone().unwrap_or_default(),
            project: options.project.clone().unwrap_or_default(),
        });
    };

    let query = BuildSettingsQuery {
        container,
        scheme: options.scheme.clone(),
        configuration: options.configuration.clone(),
    };
    let command = query.command().to_string();
    let raw = match query.run(runner) {
        Ok(raw) => raw,
        Err(e) => {
            return outcome.abort(Problem::BuildSettingsQueryFailed {
                command,
                reason: e.to_string(),
            });
        }
    };
    if raw.trim().is_empty() {
        return outcome.abort(Problem::EmptyBuildSettings { command });
    }

    let settings = BuildSettings::parse(&raw);
    debug!(settings = settings.len(), "build settings parsed");
    let Some(product_name) = settings.product_name() else {
        return outcome.abort(Problem::MissingProductName);
    };

    let plist = plist_path(&options.xcodebuild_archive, product_name);
    if !plist.exists() {
        return outcome.abort(Problem::MissingPlist {
            path: plist.display().to_string(),
            product: product_name.to_string(),
        });
    }

    let strings = PlistStrings::read(&plist, runner);
    for key in FirebaseApp::KEYS {
        if !strings.contains(key) {
            outcome.report(Problem::MissingPlistKey {
                key: key.to_string(),
                path: plist.display().to_string(),
            });
        }
    }
    let app = FirebaseApp::from_plist(&strings);
    info!(
        project_id = %app.project_id,
        app_id = %app.app_id,
        bundle_id = %app.bundle_id,
        "firebase app resolved"
    );

    outcome.set_env(constants::FIREBASEAPPDISTRO_APP, &app.app_id);
    outcome.set_shared(constants::FIREBASE_DISTRIBUTION_RELEASES_URL, app.releases_url());

    resolve_credentials(options, &app, host, &mut outcome);
    outcome
}

/// Publish `GOOGLE_APPLICATION_CREDENTIALS`.
///
/// The path is published even when the file is missing so the distribution
/// tool reports its own error; the missing file is reported here as well.
fn resolve_credentials(
    options: &FirebaseOptions,
    app: &FirebaseApp,
    host: &HostEnv,
    outcome: &mut Outcome,
) {
    if let Some(explicit) = options.credentials.as_deref().filter(|c| !c.is_empty()) {
        if !host.cwd().join(explicit).exists() {
            outcome.report(Problem::MissingExplicitCredentials {
                path: explicit.to_string(),
            });
        }
        outcome.set_env(constants::GOOGLE_APPLICATION_CREDENTIALS, explicit);
        return;
    }

    let path = host
        .cwd()
        .join(&options.credentials_dir)
        .join(format!("{}.json", app.project_id));
    if !path.exists() {
        outcome.report(Problem::MissingCredentials {
            path: path.display().to_string(),
        });
    }
    outcome.set_env_path(constants::GOOGLE_APPLICATION_CREDENTIALS, &path);
}
