//! Integration tests for the `comfy` CLI binary.
//!
//! These tests validate argument parsing, help output, shell completions,
//! and error handling without requiring live cloud credentials.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `comfy` binary with env isolation.
///
/// Clears all `COMFY_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn comfy_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("comfy");
    cmd.env("HOME", "/tmp/comfy-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/comfy-test-nonexistent")
        .env("XDG_DATA_HOME", "/tmp/comfy-test-nonexistent")
        .env_remove("COMFY_PROFILE")
        .env_remove("COMFY_USERNAME")
        .env_remove("COMFY_PASSWORD")
        .env_remove("COMFY_TOKEN_FILE")
        .env_remove("COMFY_API_URL")
        .env_remove("COMFY_OUTPUT")
        .env_remove("COMFY_TIMEOUT");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = comfy_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    comfy_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("climate")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("get"))
            .and(predicate::str::contains("set"))
            .and(predicate::str::contains("dump")),
    );
}

#[test]
fn test_version_flag() {
    comfy_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("comfy"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    comfy_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    comfy_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = comfy_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_list_without_credentials_fails_with_auth_exit_code() {
    let output = comfy_cmd().arg("list").output().unwrap();
    assert_eq!(
        output.status.code(),
        Some(3),
        "missing credentials should exit 3:\n{}",
        combined_output(&output)
    );
    let text = combined_output(&output);
    assert!(
        text.contains("credentials") || text.contains("config init"),
        "Expected credentials hint:\n{text}"
    );
}

#[test]
fn test_unknown_profile_is_rejected() {
    comfy_cmd()
        .args(["--profile", "nonexistent", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nonexistent"));
}

#[test]
fn test_invalid_output_format() {
    let output = comfy_cmd()
        .args(["--output", "yaml", "get", "1"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about valid output formats:\n{text}"
    );
}

// ── Set flag vocabulary ─────────────────────────────────────────────

#[test]
fn test_set_rejects_unknown_mode_at_parse_time() {
    let output = comfy_cmd()
        .args(["set", "1", "--mode", "Turbo"])
        .output()
        .unwrap();
    assert_eq!(
        output.status.code(),
        Some(2),
        "unknown mode should fail at argument parsing"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("possible values") || text.contains("Turbo"),
        "Expected vocabulary error:\n{text}"
    );
}

#[test]
fn test_set_lists_mode_vocabulary_in_help() {
    comfy_cmd().args(["set", "--help"]).assert().success().stdout(
        predicate::str::contains("Auto")
            .and(predicate::str::contains("Cool"))
            .and(predicate::str::contains("Heat"))
            .and(predicate::str::contains("Dry"))
            .and(predicate::str::contains("Fan")),
    );
}

#[test]
fn test_set_nonnumeric_device_position_is_rejected() {
    let output = comfy_cmd()
        .args(["set", "living-room", "-t", "21"])
        .output()
        .unwrap();
    assert_eq!(
        output.status.code(),
        Some(2),
        "device argument must be a position number"
    );
}

// ── Config commands ─────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    // `config show` succeeds even when no config file exists; it just
    // renders the defaults.
    comfy_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_path_prints_a_path() {
    comfy_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_subcommands_exist() {
    comfy_cmd().args(["config", "--help"]).assert().success().stdout(
        predicate::str::contains("init")
            .and(predicate::str::contains("show"))
            .and(predicate::str::contains("path")),
    );
}
