//! End-to-end tests for the `select` command.

mod common;
use common::prelude::*;

#[test]
fn test_select_lenient_uses_running_jdk() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command_running(17)
        .env("JAVA_HOME_11_X64", "/opt/jdk11")
        .arg("select")
        .arg("11")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Java 11 code would compile with the running JDK 17",
        ));
}

#[test]
fn test_select_strict_uses_installed_jdk() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command_running(17)
        .env("JAVA_HOME_11_X64", "/opt/jdk11")
        .arg("--strict")
        .arg("select")
        .arg("11")
        .assert()
        .success()
        .stdout(predicate::str::contains("compile with JDK 11 at /opt/jdk11"))
        .stdout(predicate::str::contains("/opt/jdk11/bin/javac"));
}

#[test]
fn test_select_strict_without_toolchain_fails() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command_running(17)
        .arg("--strict")
        .arg("select")
        .arg("11")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Java toolchain >= 11"))
        .stderr(predicate::str::contains("installed: none"));
}

#[test]
fn test_select_compile_respects_floor() {
    let fixture = TestFixture::new().with_config("base:\n  release: 8\n  compile-with: 11\n");

    let output = fixture
        .command_running(17)
        .env("CI", "true")
        .env("JAVA_HOME_8_X64", "/opt/jdk8")
        .env("JAVA_HOME_11_X64", "/opt/jdk11")
        .arg("select")
        .arg("1.8")
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let selected: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(selected["version"], 11);
    assert_eq!(selected["source"], "installed");
}

#[test]
fn test_select_execute_drops_floor() {
    let fixture = TestFixture::new().with_config("base:\n  release: 8\n  compile-with: 11\n");

    fixture
        .command_running(17)
        .env("CI", "true")
        .env("JAVA_HOME_8_X64", "/opt/jdk8")
        .env("JAVA_HOME_11_X64", "/opt/jdk11")
        .arg("select")
        .arg("8")
        .arg("--execute")
        .assert()
        .success()
        .stdout(predicate::str::contains("Java 8 code would run with JDK 8 at /opt/jdk8"));
}

#[test]
fn test_select_explicit_floor() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command_running(11)
        .env("JAVA_HOME_21_X64", "/opt/jdk21")
        .arg("select")
        .arg("9")
        .arg("--floor")
        .arg("21")
        .assert()
        .success()
        .stdout(predicate::str::contains("JDK 21 at /opt/jdk21"));
}

#[test]
fn test_select_rejects_bad_version() {
    let fixture = TestFixture::new().with_config(configs::BASE_ONLY);

    fixture
        .command_running(17)
        .arg("select")
        .arg("latest")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not determine java version"));
}
