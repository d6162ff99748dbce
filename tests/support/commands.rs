//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a cilane command with an isolated environment.
    ///
    /// Returns a Command configured with:
    /// - a cleared environment
    /// - HOME set to the temporary home directory
    /// - PATH with the fake tools first
    /// - current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("cilane").expect("failed to find cilane binary");
        cmd.env_clear();
        cmd.env("HOME", self.home.path());
        cmd.env(
            "PATH",
            format!("{}:/usr/bin:/bin", self.bin.path().display()),
        );
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Same as `cmd()` with `CI=true`.
    pub fn ci_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("CI", "true");
        cmd
    }

    /// `cilane setup --project <project>` outside CI.
    pub fn setup(&self, project: &str) -> Output {
        self.cmd()
            .args(["setup", "--project", project])
            .output()
            .expect("failed to run cilane setup")
    }

    /// `cilane --format json setup <args>` under CI.
    pub fn ci_setup_json(&self, args: &[&str]) -> Output {
        self.ci_cmd()
            .args(["--format", "json", "setup"])
            .args(args)
            .output()
            .expect("failed to run cilane setup")
    }

    /// `cilane teardown` under CI with `KEYCHAIN_PATH` set.
    pub fn ci_teardown(&self, keychain_path: &str) -> Output {
        self.ci_cmd()
            .env("KEYCHAIN_PATH", keychain_path)
            .arg("teardown")
            .output()
            .expect("failed to run cilane teardown")
    }

    /// `cilane --format json firebase-setup <args>`.
    pub fn firebase_json(&self, args: &[&str]) -> Output {
        self.cmd()
            .args(["--format", "json", "firebase-setup"])
            .args(args)
            .output()
            .expect("failed to run cilane firebase-setup")
    }
}
