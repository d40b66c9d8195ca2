#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Binary with an isolated HOME so no user config leaks in
fn gh_strength(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("gh-strength").expect("binary should compile");
    cmd.env("HOME", home.path())
        .env_remove("GH_STRENGTH_TOKEN")
        .env_remove("GITHUB_TOKEN")
        .env_remove("GH_STRENGTH_LOG");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    gh_strength(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("password"));
}

#[test]
fn password_generate_prints_requested_count() {
    let home = TempDir::new().unwrap();
    gh_strength(&home)
        .args(["password", "generate", "--length", "20", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Password #1:"))
        .stdout(predicate::str::contains("Password #3:"))
        .stdout(predicate::str::contains("Password #4:").not())
        .stdout(predicate::str::contains("Good length"));
}

#[test]
fn password_generate_digits_only() {
    let home = TempDir::new().unwrap();
    let output = gh_strength(&home)
        .args([
            "password",
            "generate",
            "-l",
            "12",
            "--no-lowercase",
            "--no-uppercase",
            "--no-symbols",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let password = stdout.lines().nth(1).unwrap().trim();
    assert_eq!(password.len(), 12);
    assert!(password.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn password_generate_rejects_short_length() {
    let home = TempDir::new().unwrap();
    gh_strength(&home)
        .args(["password", "generate", "--length", "4"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("password.length"));
}

#[test]
fn password_defaults_come_from_config() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.yaml");
    fs::write(&config, "password:\n  length: 30\n  count: 2\n").unwrap();

    let output = gh_strength(&home)
        .arg("--config")
        .arg(&config)
        .args(["password", "generate"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Password #2:"));
    let password = stdout.lines().nth(1).unwrap().trim();
    assert_eq!(password.chars().count(), 30);
}

#[test]
fn missing_explicit_config_fails() {
    let home = TempDir::new().unwrap();
    gh_strength(&home)
        .args(["--config", "/definitely/not/here.yaml", "password", "generate"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn invalid_scoring_config_reports_every_error() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("bad.yaml");
    fs::write(
        &config,
        "scoring:\n  maintenance_window: \"someday\"\n  followers:\n    - { at_least: 1, points: 99 }\n",
    )
    .unwrap();

    gh_strength(&home)
        .arg("--config")
        .arg(&config)
        .args(["analyze", "octocat"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("scoring.followers[0].points"))
        .stderr(predicate::str::contains("scoring.maintenance_window"));
}

#[test]
fn analyze_rejects_invalid_username() {
    let home = TempDir::new().unwrap();
    gh_strength(&home)
        .args(["analyze", "not a user"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Invalid GitHub username"));
}
