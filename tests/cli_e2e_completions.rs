//! End-to-end tests for the `completions` command.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_completions_bash() {
    cargo_bin_cmd!("multirelease")
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_multirelease()"))
        .stdout(predicate::str::contains("toolchains"));
}

#[test]
fn test_completions_zsh() {
    cargo_bin_cmd!("multirelease")
        .arg("completions")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef multirelease"));
}

#[test]
fn test_completions_need_no_project() {
    let temp = assert_fs::TempDir::new().unwrap();

    cargo_bin_cmd!("multirelease")
        .current_dir(temp.path())
        .env_clear()
        .arg("completions")
        .arg("fish")
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c multirelease"));
}

#[test]
fn test_completions_unknown_shell() {
    cargo_bin_cmd!("multirelease")
        .arg("completions")
        .arg("tcsh")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'tcsh'"));
}
