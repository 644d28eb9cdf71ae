use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_config_path_command() {
    let dir = tempdir().unwrap();

    cargo_bin_cmd!("ballot")
        .env("BALLOT_HOME", dir.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("not created"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");

    cargo_bin_cmd!("ballot")
        .env("BALLOT_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url ="));
    assert!(contents.contains("[[admins]]"));
}

#[test]
fn test_config_init_fails_if_exists() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), "# existing config").unwrap();

    cargo_bin_cmd!("ballot")
        .env("BALLOT_HOME", dir.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_config_upgrade_keeps_user_values() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[api]\nbase_url = \"http://vote.internal:9000\"\n").unwrap();

    cargo_bin_cmd!("ballot")
        .env("BALLOT_HOME", dir.path())
        .args(["config", "upgrade"])
        .assert()
        .success();

    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("http://vote.internal:9000"));
    assert!(contents.contains("[logging]"));
}

#[test]
fn test_config_generate_prints_template() {
    cargo_bin_cmd!("ballot")
        .args(["config", "generate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[api]"))
        .stdout(predicate::str::contains("timeout_secs = 0"));
}
