//! Tests for `cilane firebase-setup`.

use crate::support::*;

fn archive_arg(t: &Test) -> String {
    t.archive_with_plist("Shop").display().to_string()
}

#[test]
fn test_firebase_setup_publishes_app() {
    let t = Test::new();
    let archive = archive_arg(&t);
    t.write("google-application-credentials/shop-prod.json", "{}");

    let output = t.firebase_json(&[
        "--workspace",
        "Shop.xcworkspace",
        "--scheme",
        "Shop",
        "--configuration",
        "Release",
        "--xcodebuild-archive",
        &archive,
    ]);
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["env"]["FIREBASEAPPDISTRO_APP"], "1:1234567890:ios:abcdef");
    assert_eq!(
        json["shared"]["FIREBASE_DISTRIBUTION_RELEASES_URL"],
        "https://console.firebase.google.com/u/0/project/shop-prod/appdistribution/app/ios:com.example.shop/releases"
    );
    let cwd = t.dir.path().canonicalize().unwrap();
    assert_eq!(
        json["env"]["GOOGLE_APPLICATION_CREDENTIALS"],
        cwd.join("google-application-credentials/shop-prod.json")
            .display()
            .to_string()
            .as_str()
    );
    assert_eq!(json["problems"].as_array().unwrap().len(), 0);

    let calls = t.tool_log("xcodebuild");
    assert_eq!(
        calls,
        vec!["-showBuildSettings -workspace Shop.xcworkspace -scheme Shop -configuration Release"]
    );
}

#[test]
fn test_firebase_setup_prefers_workspace_over_project() {
    let t = Test::new();
    let archive = archive_arg(&t);

    let output = t.firebase_json(&[
        "--workspace",
        "Shop.xcworkspace",
        "--project",
        "Shop.xcodeproj",
        "--scheme",
        "Shop",
        "--xcodebuild-archive",
        &archive,
    ]);
    assert_success(&output);
    assert_eq!(
        t.tool_log("xcodebuild"),
        vec!["-showBuildSettings -workspace Shop.xcworkspace -scheme Shop"]
    );
}

#[test]
fn test_firebase_setup_without_container_aborts() {
    let t = Test::new();
    let archive = archive_arg(&t);

    let output = t.firebase_json(&["--scheme", "Shop", "--xcodebuild-archive", &archive]);
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["aborted"], true);
    assert_eq!(json["problems"][0]["kind"], "no_container");
    assert!(json["env"].as_object().unwrap().is_empty());
    assert!(t.tool_log("xcodebuild").is_empty());
}

#[test]
fn test_firebase_setup_strict_exits_nonzero() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "--strict",
            "firebase-setup",
            "--scheme",
            "Shop",
            "--xcodebuild-archive",
            "build/App.xcarchive",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_firebase_setup_falls_back_to_xc_project() {
    let t = Test::new();
    let archive = archive_arg(&t);

    let output = t
        .cmd()
        .env("XC_PROJECT", "Shop.xcodeproj")
        .args([
            "firebase-setup",
            "--scheme",
            "Shop",
            "--xcodebuild-archive",
            &archive,
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(
        t.tool_log("xcodebuild"),
        vec!["-showBuildSettings -project Shop.xcodeproj -scheme Shop"]
    );
}

#[test]
fn test_firebase_setup_empty_build_settings() {
    let t = Test::new();
    t.install_tool("xcodebuild", &failing_script(65));

    let output = t.firebase_json(&[
        "--project",
        "Shop.xcodeproj",
        "--scheme",
        "Shop",
        "--xcodebuild-archive",
        "build/App.xcarchive",
    ]);
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["aborted"], true);
    assert_eq!(json["problems"][0]["kind"], "empty_build_settings");
    assert!(json["problems"][0]["message"]
        .as_str()
        .unwrap()
        .contains("xcodebuild -showBuildSettings -project Shop.xcodeproj -scheme Shop"));
}

#[test]
fn test_firebase_setup_reports_missing_xcodebuild() {
    let t = Test::new();
    std::fs::remove_file(t.bin.path().join("xcodebuild")).unwrap();

    let output = t
        .cmd()
        .env("PATH", t.bin.path())
        .args([
            "--format",
            "json",
            "firebase-setup",
            "--project",
            "Shop.xcodeproj",
            "--scheme",
            "Shop",
            "--xcodebuild-archive",
            "build/App.xcarchive",
        ])
        .output()
        .unwrap();
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["aborted"], true);
    assert_eq!(json["problems"][0]["kind"], "build_settings_query_failed");
    assert_eq!(json["problems"][0]["reason"], "xcodebuild not found on PATH");
    assert_stderr_contains(&output, "xcodebuild not found on PATH");
}

#[test]
fn test_firebase_setup_missing_product_name() {
    let t = Test::new();
    t.install_tool(
        "xcodebuild",
        &logging_script("xcodebuild", "    ACTION = build\n"),
    );

    let output = t.firebase_json(&[
        "--project",
        "Shop.xcodeproj",
        "--scheme",
        "Shop",
        "--xcodebuild-archive",
        "build/App.xcarchive",
    ]);
    assert_success(&output);
    assert_eq!(json(&output)["problems"][0]["kind"], "missing_product_name");
}

#[test]
fn test_firebase_setup_missing_plist() {
    let t = Test::new();

    let output = t.firebase_json(&[
        "--project",
        "Shop.xcodeproj",
        "--scheme",
        "Shop",
        "--xcodebuild-archive",
        "build/Missing.xcarchive",
    ]);
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["aborted"], true);
    assert_eq!(json["problems"][0]["kind"], "missing_plist");
    assert_eq!(json["problems"][0]["product"], "Shop");
    assert!(t.tool_log("plutil").is_empty());
}

#[test]
fn test_firebase_setup_explicit_credentials_verbatim() {
    let t = Test::new();
    let archive = archive_arg(&t);
    t.write("secrets/sa.json", "{}");

    let output = t.firebase_json(&[
        "--project",
        "Shop.xcodeproj",
        "--scheme",
        "Shop",
        "--xcodebuild-archive",
        &archive,
        "--google-application-credentials",
        "secrets/sa.json",
    ]);
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["env"]["GOOGLE_APPLICATION_CREDENTIALS"], "secrets/sa.json");
    assert_eq!(json["problems"].as_array().unwrap().len(), 0);
}

#[test]
fn test_firebase_setup_missing_explicit_credentials_reported() {
    let t = Test::new();
    let archive = archive_arg(&t);

    let output = t
        .cmd()
        .env("GOOGLE_APPLICATION_CREDENTIALS", "nope.json")
        .args([
            "firebase-setup",
            "--project",
            "Shop.xcodeproj",
            "--scheme",
            "Shop",
            "--xcodebuild-archive",
            &archive,
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "export GOOGLE_APPLICATION_CREDENTIALS=nope.json\n");
    assert_stderr_contains(&output, "no file exists at that path");
}

#[test]
fn test_firebase_setup_missing_plist_key_is_warning() {
    let t = Test::new();
    let archive = archive_arg(&t);
    t.install_tool(
        "plutil",
        &logging_script("plutil", "{\n  \"PROJECT_ID\" => \"shop-prod\"\n}\n"),
    );

    let output = t.firebase_json(&[
        "--project",
        "Shop.xcodeproj",
        "--scheme",
        "Shop",
        "--xcodebuild-archive",
        &archive,
    ]);
    assert_success(&output);

    let json = json(&output);
    assert_eq!(json["aborted"], false);
    assert_eq!(json["env"]["FIREBASEAPPDISTRO_APP"], "");
    let kinds: Vec<_> = json["problems"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["kind"].as_str().unwrap().to_string())
        .collect();
    assert!(kinds.contains(&"missing_plist_key".to_string()));
}

#[test]
fn test_firebase_setup_requires_scheme() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["firebase-setup", "--project", "Shop.xcodeproj"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required option: scheme");
    assert_stderr_contains(&output, "GYM_SCHEME");
}
