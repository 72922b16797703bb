use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_describes_library_argument() {
    Command::cargo_bin("snipdeck")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("LIBRARY"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("snipdeck")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_library_fails_before_terminal_setup() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    Command::cargo_bin("snipdeck")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_library_fails_before_terminal_setup() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[[groups]]\nname = ").unwrap();

    Command::cargo_bin("snipdeck")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid snippet library"));
}
