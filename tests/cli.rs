use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_log_flag() {
    Command::cargo_bin("funcplot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log"))
        .stdout(predicate::str::contains("Plot a function"));
}

#[test]
fn version_is_reported() {
    Command::cargo_bin("funcplot")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_rejected() {
    Command::cargo_bin("funcplot")
        .unwrap()
        .arg("--frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--frobnicate"));
}

#[test]
fn unwritable_log_path_fails_before_terminal_setup() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("missing").join("funcplot.log");

    Command::cargo_bin("funcplot")
        .unwrap()
        .arg("--log")
        .arg(&log)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open log file"));
}
