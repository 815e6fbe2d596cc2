//! End-to-end behavior of the `claude-ext` binary.

use assert_cmd::Command;
use claude_ext::test_utils::TestHome;
use predicates::prelude::*;
use serde_json::json;

fn claude_ext(home: &TestHome) -> Command {
    let mut cmd = Command::cargo_bin("claude-ext").unwrap();
    cmd.env("HOME", home.path())
        .env("USERPROFILE", home.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_command_prints_help() {
    let home = TestHome::new();

    claude_ext(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains("Claude MCP Server Manager"))
        .stdout(predicate::str::contains("mcp"));
}

#[test]
fn test_version_flag() {
    let home = TestHome::new();

    claude_ext(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_fails() {
    let home = TestHome::new();

    claude_ext(&home).arg("frobnicate").assert().failure();
}

#[test]
fn test_mcp_without_servers_creates_no_files() {
    let home = TestHome::new();

    claude_ext(&home)
        .arg("mcp")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No MCP servers found in ~/.claude/settings.json or ~/.claude-ext.json",
        ));

    assert!(!home.settings_path().exists());
    assert!(!home.legacy_path().exists());
    assert!(!home.disabled_path().exists());
}

#[test]
fn test_mcp_empty_servers_object_falls_back_to_settings() {
    let home = TestHome::new();
    // An empty mcpServers object does not select the legacy file
    home.write_legacy(&json!({"mcpServers": {}, "numStartups": 1}));

    claude_ext(&home)
        .arg("mcp")
        .assert()
        .success()
        .stdout(predicate::str::contains("No MCP servers found in ~/.claude/settings.json"));

    assert_eq!(
        home.read_json(&home.legacy_path()),
        json!({"mcpServers": {}, "numStartups": 1})
    );
}

#[test]
fn test_mcp_malformed_files_warn_and_continue() {
    let home = TestHome::new();
    home.write_raw(&home.settings_path(), "{ not json");
    home.write_raw(&home.disabled_path(), "still not json");

    claude_ext(&home)
        .arg("mcp")
        .assert()
        .success()
        .stdout(predicate::str::contains("No MCP servers found"))
        .stderr(predicate::str::contains("Failed to read ~/.claude-ext.json"));

    // Malformed files are left alone when there is nothing to toggle
    assert_eq!(std::fs::read_to_string(home.disabled_path()).unwrap(), "still not json");
}

#[test]
fn test_mcp_quiet_suppresses_warnings() {
    let home = TestHome::new();
    home.write_raw(&home.disabled_path(), "still not json");

    claude_ext(&home)
        .args(["--quiet", "mcp"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to read").not());
}
