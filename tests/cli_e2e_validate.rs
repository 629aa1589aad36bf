//! End-to-end tests for the `validate` command.
//!
//! These tests invoke the actual CLI binary and validate the behavior of the
//! `validate` subcommand from a user's perspective.

mod common;
use common::prelude::*;

#[test]
fn test_validate_valid_config() {
    let fixture = TestFixture::new().with_config(configs::LAYERED);

    fixture
        .command()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("[OK] Descriptor parsed successfully"))
        .stdout(predicate::str::contains("Base release: Java 8"))
        .stdout(predicate::str::contains("Main targets: 3"))
        .stdout(predicate::str::contains("[OK] All targets are valid"))
        .stdout(predicate::str::contains("Validation passed"));
}

#[test]
fn test_validate_does_not_need_a_jdk() {
    let fixture = TestFixture::new().with_config(configs::LAYERED);

    // strict with an empty catalog would fail to plan, but validation passes
    fixture
        .command()
        .arg("--strict")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection policy: strict"));
}

#[test]
fn test_validate_invalid_yaml() {
    let fixture = TestFixture::new().with_config(configs::INVALID_YAML);

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[ERR] Descriptor parsing failed"));
}

#[test]
fn test_validate_missing_base_has_hint() {
    let fixture = TestFixture::new().with_config("targets:\n  - release: 11\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing field `base`"))
        .stderr(predicate::str::contains("hint: Declare the base release"));
}

#[test]
fn test_validate_duplicate_target() {
    let fixture = TestFixture::new().with_config(configs::DUPLICATE_TARGET);

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Java 11 is declared more than once"));
}

#[test]
fn test_validate_target_below_base() {
    let fixture = TestFixture::new().with_config(configs::BELOW_BASE);

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Cannot build version 9 as it is lower than (or equal to) the project's base version (11)",
        ));
}

#[test]
fn test_validate_target_below_layering_minimum() {
    let fixture = TestFixture::new().with_config("base: 7\ntargets:\n  - release: 8\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Java 8 cannot be layered"));
}

#[test]
fn test_validate_unquoted_legacy_version() {
    let fixture = TestFixture::new().with_config("base: 1.8\n");

    fixture
        .command()
        .arg("validate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("quote"));
}

#[test]
fn test_validate_missing_file() {
    let fixture = TestFixture::new();

    fixture
        .command()
        .arg("validate")
        .arg("--config")
        .arg(fixture.path().join("absent.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Project descriptor not found"));
}

#[test]
fn test_validate_warns_about_misspelled_property() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command()
        .arg("-Pjavahome.11=/opt/jdk11")
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[WARN] property 'javahome.11' is not used; did you mean 'javaHome.11'?",
        ))
        .stdout(predicate::str::contains("passed with 1 warning(s)"));
}

#[test]
fn test_validate_deny_warnings() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command()
        .env("JAVA_HOME_X64", "/opt/jdk")
        .arg("validate")
        .arg("--deny-warnings")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "[WARN] Could not determine java version from 'X64'",
        ))
        .stderr(predicate::str::contains("Validation failed with 1 warning(s)"));
}
