use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn no_args_prints_banner_and_exits_zero() {
    Command::cargo_bin("specimen")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::eq("Test file with multiple vulnerabilities\n"));
}

#[test]
fn stray_args_are_ignored_not_parsed() {
    // No flag surface at all: even `--help` is not recognized.
    Command::cargo_bin("specimen")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::eq("Test file with multiple vulnerabilities\n"));
}
