//! CLI integration tests
//!
//! Tests for the command-line interface using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the presto-metrico binary
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("presto-metrico").expect("Failed to find presto-metrico binary")
}

/// Test --help flag displays usage information
#[test]
fn test_help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:").or(predicate::str::contains("usage:")))
        .stdout(predicate::str::contains("--coordinator"))
        .stdout(predicate::str::contains("--dogstatsd"));
}

/// Test --version flag displays version
#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

/// Test that a missing coordinator address is a startup error naming the
/// environment fallback that was consulted
#[test]
fn test_missing_coordinator_is_fatal() {
    cmd()
        .arg("--coordinator-env")
        .arg("METRICO_CLI_TEST_UNSET")
        .env_remove("METRICO_CLI_TEST_UNSET")
        .assert()
        .failure()
        .stderr(predicate::str::contains("METRICO_CLI_TEST_UNSET"));
}

/// Test that an invalid interval is rejected at startup
#[test]
fn test_zero_interval_is_fatal() {
    cmd()
        .arg("--coordinator")
        .arg("http://coordinator:8080")
        .arg("--interval")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interval"));
}
