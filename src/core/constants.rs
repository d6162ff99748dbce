//! Constants used throughout cilane.
//!
//! Environment variable names are consumed by downstream tools (gym, scan,
//! match, carthage, slather, firebase app distribution) and must not change.

/// Project configuration file name.
pub const CONFIG_FILE: &str = ".cilane.toml";

/// Log filter environment variable.
pub const LOG_ENV: &str = "CILANE_LOG";

/// Unique project identifier; also a shared result value.
pub const CI_UNIQUE_PROJECT_ID: &str = "CI_UNIQUE_PROJECT_ID";
pub const MATCH_GIT_BRANCH: &str = "MATCH_GIT_BRANCH";

pub const KEYCHAIN_PASSWORD: &str = "KEYCHAIN_PASSWORD";
pub const KEYCHAIN_PATH: &str = "KEYCHAIN_PATH";
pub const MATCH_KEYCHAIN_NAME: &str = "MATCH_KEYCHAIN_NAME";
pub const MATCH_KEYCHAIN_PASSWORD: &str = "MATCH_KEYCHAIN_PASSWORD";

/// Variables receiving the absolute output directory.
pub const OUTPUT_DIRECTORY_VARS: &[&str] = &[
    "GYM_BUILD_PATH",
    "GYM_OUTPUT_DIRECTORY",
    "SCAN_OUTPUT_DIRECTORY",
    "BACKUP_XCARCHIVE_DESTINATION",
];

pub const GYM_ARCHIVE_PATH: &str = "GYM_ARCHIVE_PATH";

/// Variables receiving the absolute derived data path.
pub const DERIVED_DATA_VARS: &[&str] = &[
    "DERIVED_DATA_PATH",
    "XCODE_DERIVED_DATA_PATH",
    "GYM_DERIVED_DATA_PATH",
    "SCAN_DERIVED_DATA_PATH",
    "FL_CARTHAGE_DERIVED_DATA",
    "FL_SLATHER_BUILD_DIRECTORY",
];

pub const FIREBASEAPPDISTRO_APP: &str = "FIREBASEAPPDISTRO_APP";
pub const GOOGLE_APPLICATION_CREDENTIALS: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// Shared result value holding the Firebase console releases URL.
pub const FIREBASE_DISTRIBUTION_RELEASES_URL: &str = "FIREBASE_DISTRIBUTION_RELEASES_URL";

pub const FASTLANE_TEAM_ID: &str = "FASTLANE_TEAM_ID";

pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./build";
pub const DEFAULT_DERIVED_DATA_PATH: &str = "./build/DerivedData";
pub const DEFAULT_CREDENTIALS_DIR: &str = "google-application-credentials";

pub const ARCHIVE_EXTENSION: &str = "xcarchive";

/// Keychain naming.
pub const KEYCHAIN_NAME_SUFFIX: &str = "-fastlane";
pub const KEYCHAIN_PASSWORD_SUFFIX: &str = "-password";
pub const KEYCHAIN_DIR: &str = "Library/Keychains";
pub const KEYCHAIN_FILE_EXTENSION: &str = "keychain-db";

pub const GOOGLE_SERVICE_INFO_PLIST: &str = "GoogleService-Info.plist";
pub const BREWFILE: &str = "Brewfile";

/// Variables whose presence marks a CI execution.
pub const CI_MARKERS: &[&str] = &[
    "CI",
    "JENKINS_HOME",
    "JENKINS_URL",
    "TRAVIS",
    "CIRCLECI",
    "GITLAB_CI",
    "TEAMCITY_VERSION",
    "GO_PIPELINE_NAME",
    "bamboo_buildKey",
    "XCS",
    "TF_BUILD",
    "GITHUB_ACTION",
    "GITHUB_ACTIONS",
    "BITRISE_IO",
    "BUDDY",
    "APPCENTER_BUILD_ID",
    "CODEBUILD_BUILD_ARN",
];
