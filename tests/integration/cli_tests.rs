//! Integration tests for the privscan binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::{tempdir, TempDir};

/// Command with an explicit empty config so user/system config can't leak in
fn privscan(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    fs::write(&config, "").unwrap();

    let mut cmd = Command::cargo_bin("privscan").unwrap();
    cmd.arg("--config").arg(config).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_stdin_text_report() {
    let dir = tempdir().unwrap();
    privscan(&dir)
        .write_stdin("sudo apt update\nuseradd bob\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("privscan: <stdin>"))
        .stdout(predicate::str::contains("[Privilege Escalation] line 1: sudo apt update"))
        .stdout(predicate::str::contains("[User Management] line 2: useradd bob"))
        .stdout(predicate::str::contains("Severity: 3 (High Risk)"));
}

#[test]
fn test_clean_file() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("clean.sh");
    fs::write(&script, "echo hello\n").unwrap();

    privscan(&dir)
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("No privileged commands detected"));
}

#[test]
fn test_json_format() {
    let dir = tempdir().unwrap();
    let output = privscan(&dir)
        .args(["--format", "json"])
        .write_stdin("rm -rf /home/user\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["severity"], 3);
    assert_eq!(parsed["matches"][0]["command"], "rm -rf /home/user");
}

#[test]
fn test_fail_on_threshold() {
    let dir = tempdir().unwrap();
    privscan(&dir)
        .args(["--fail-on", "2"])
        .write_stdin("chmod 755 deploy.sh\n")
        .assert()
        .code(2);

    privscan(&dir)
        .args(["--fail-on", "3"])
        .write_stdin("chmod 755 deploy.sh\n")
        .assert()
        .success();
}

#[test]
fn test_fail_on_out_of_range_rejected() {
    let dir = tempdir().unwrap();
    privscan(&dir).args(["--fail-on", "4"]).assert().failure();
}

#[test]
fn test_missing_file_reports_and_continues() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("real.sh");
    fs::write(&script, "reboot\n").unwrap();

    privscan(&dir)
        .arg(dir.path().join("missing.sh"))
        .arg(&script)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("missing.sh"))
        .stdout(predicate::str::contains("[Destructive Command] line 1: reboot"));
}

#[test]
fn test_max_bytes_limit() {
    let dir = tempdir().unwrap();
    privscan(&dir)
        .args(["--max-bytes", "4"])
        .write_stdin("sudo reboot\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input limit"));
}

#[test]
fn test_no_advice() {
    let dir = tempdir().unwrap();
    privscan(&dir)
        .arg("--no-advice")
        .write_stdin("passwd alice\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[User Management]"))
        .stdout(predicate::str::contains("Note:").not());
}
