//! Tests for `cilane teardown`.

use crate::support::*;

#[test]
fn test_teardown_deletes_keychain() {
    let t = Test::new();
    let output = t.ci_setup_json(&["--project", "Shop.xcodeproj"]);
    assert_success(&output);
    let keychain = t.keychain_path("shop");
    assert!(keychain.exists());

    let output = t.ci_teardown(&keychain.display().to_string());
    assert_success(&output);
    assert_stderr_contains(&output, "temporary keychain deleted");
    assert!(!keychain.exists());
    assert_eq!(
        t.tool_log("security").last().unwrap(),
        &format!("delete-keychain {}", keychain.display())
    );
}

#[test]
fn test_teardown_twice_is_noop() {
    let t = Test::new();
    t.ci_setup_json(&["--project", "Shop.xcodeproj"]);
    let keychain = t.keychain_path("shop").display().to_string();

    assert_success(&t.ci_teardown(&keychain));
    let calls = t.tool_log("security").len();

    let output = t.ci_teardown(&keychain);
    assert_success(&output);
    assert_stderr_contains(&output, "no temporary keychain to delete");
    assert_eq!(t.tool_log("security").len(), calls);
}

#[test]
fn test_teardown_without_setup() {
    let t = Test::new();

    let output = t.ci_cmd().arg("teardown").output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "no temporary keychain to delete");
    assert!(t.tool_log("security").is_empty());
}

#[test]
fn test_teardown_outside_ci_warns() {
    let t = Test::new();
    let keychain = t.keychain_path("shop");
    std::fs::create_dir_all(keychain.parent().unwrap()).unwrap();
    std::fs::write(&keychain, "").unwrap();

    let output = t
        .cmd()
        .env("KEYCHAIN_PATH", &keychain)
        .arg("teardown")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "not executed by a continuous integration system");
    assert!(keychain.exists());
}
