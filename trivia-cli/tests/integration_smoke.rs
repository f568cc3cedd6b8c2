//! Smoke tests for the trivia binary wiring

use assert_cmd::Command;
use predicates::prelude::*;

/// `trivia` with a clean environment: no DATABASE_URL and no .env files.
fn trivia(home: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("trivia").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("DATABASE_URL")
        .env_remove("TRIVIA_BIND")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_subcommands() {
    let home = tempfile::tempdir().unwrap();
    trivia(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let home = tempfile::tempdir().unwrap();
    trivia(&home)
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--in-memory"))
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_serve_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();
    trivia(&home)
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    let home = tempfile::tempdir().unwrap();
    trivia(&home)
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_seed_requires_in_memory() {
    let home = tempfile::tempdir().unwrap();
    trivia(&home)
        .args(["serve", "--seed", "questions.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--in-memory"));
}

#[test]
fn test_invalid_seed_file_fails_before_binding() {
    let home = tempfile::tempdir().unwrap();
    std::fs::write(home.path().join("questions.json"), "not json").unwrap();

    trivia(&home)
        .args(["serve", "--in-memory", "--seed", "questions.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid seed file"));
}
