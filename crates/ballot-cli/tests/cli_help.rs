use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("ballot")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("register"))
        .stdout(predicate::str::contains("admin"))
        .stdout(predicate::str::contains("voters"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_register_help_lists_fields() {
    cargo_bin_cmd!("ballot")
        .args(["register", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--id"))
        .stdout(predicate::str::contains("--email"))
        .stdout(predicate::str::contains("--age"));
}

#[test]
fn test_login_requires_voter_id() {
    cargo_bin_cmd!("ballot")
        .arg("login")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--voter-id"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("ballot")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
