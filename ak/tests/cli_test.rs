//! Integration tests for the `ak` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ak() -> Command {
    let mut cmd = Command::cargo_bin("ak").expect("ak binary should build");
    // Keep user and project config files out of the picture
    let scratch = std::env::temp_dir().join("alertkit-cli-test");
    cmd.current_dir(std::env::temp_dir());
    cmd.env("XDG_CONFIG_HOME", &scratch);
    cmd.env("HOME", &scratch);
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_classify_numeric_code() {
    ak().args(["classify", r#"{"code": 10}"#])
        .assert()
        .success()
        .stdout("10\n");
}

#[test]
fn test_classify_catalog_name() {
    ak().args(["classify", "ERR_NOT_LOGGED_IN"])
        .assert()
        .success()
        .stdout("ERR_NOT_LOGGED_IN\n");
}

#[test]
fn test_classify_unknown_is_zero() {
    ak().args(["classify", r#"{"what": "ever"}"#])
        .assert()
        .success()
        .stdout("0\n")
        .stderr(predicate::str::contains("Cannot derive error key"));
}

#[test]
fn test_present_network_unavailable() {
    ak().args(["present", "ERR_NETWORK_UNAVAILABLE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Network unavailable"))
        .stdout(predicate::str::contains("Retry"));
}

#[test]
fn test_simulate_coalesces_and_navigates() {
    ak().args(["simulate", r#"{"code": 10}"#, r#"{"code": 10}"#])
        .assert()
        .success()
        .stdout(predicate::str::contains("push loginScene"))
        .stdout(predicate::str::contains("2 reports, 1 alerts, 1 coalesced"));
}

#[test]
fn test_bytes() {
    ak().args(["bytes", "0"]).assert().success().stdout("0B\n");
    ak().args(["bytes", "1024"]).assert().success().stdout("1KB\n");
    ak().args(["bytes", "1049600", "--from", "kb"])
        .assert()
        .success()
        .stdout("1MB 1KB\n");
}

#[test]
fn test_clock_and_digits() {
    ak().args(["clock", "3725"]).assert().success().stdout("1:02:05\n");
    ak().args(["digits", "42"]).assert().success().stdout("2 4 0\n");
    ak().args(["clock", "soon"]).assert().failure();
}

#[test]
fn test_explicit_config_overrides_strings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("alertkit.yml");
    std::fs::write(&path, "strings:\n  alert-title-network-unavailable: Offline\n").unwrap();

    ak().args(["--config", path.to_str().unwrap(), "present", "ERR_NETWORK_UNAVAILABLE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Offline"));
}
