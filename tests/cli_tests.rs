//! CLI integration tests

use std::process::Command;

fn push_herald_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_push-herald"))
}

#[test]
fn help_output() {
    let output = push_herald_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("push notification agent"));
    assert!(stdout.contains("--root-url"));
    assert!(stdout.contains("--window-socket"));
    assert!(stdout.contains("--badge"));
    assert!(stdout.contains("send"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("config"));
}

#[test]
fn version_output() {
    let output = push_herald_bin()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("push-herald"));
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_path_command() {
    let output = push_herald_bin()
        .args(["config", "path"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("push-herald"));
    assert!(stdout.contains("config.toml"));
}

#[test]
fn config_help() {
    let output = push_herald_bin()
        .args(["config", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("init"));
    assert!(stdout.contains("set"));
    assert!(stdout.contains("get"));
    assert!(stdout.contains("list"));
    assert!(stdout.contains("path"));
}

#[test]
fn config_get_unknown_key() {
    let output = push_herald_bin()
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let output = push_herald_bin()
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_timeout() {
    let output = push_herald_bin()
        .args(["config", "set", "notify_timeout_ms", "soon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("milliseconds") || stderr.contains("Invalid"),
        "Expected error about invalid timeout, got: {}",
        stderr
    );
}

#[test]
fn send_help_lists_payload_options() {
    let output = push_herald_bin()
        .args(["send", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--body"));
    assert!(stdout.contains("--payload"));
    assert!(stdout.contains("--empty"));
}

#[test]
fn send_without_fields_is_usage_error() {
    let output = push_herald_bin()
        .arg("send")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("--title"),
        "Expected usage error naming --title, got: {}",
        stderr
    );
}

#[test]
fn status_without_agent_fails() {
    let output = push_herald_bin()
        .arg("status")
        .env("XDG_RUNTIME_DIR", "/nonexistent-runtime-dir")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No agent running"),
        "Expected error about missing agent, got: {}",
        stderr
    );
}

#[test]
fn send_without_agent_fails() {
    let output = push_herald_bin()
        .args(["send", "--title", "T", "--body", "B"])
        .env("XDG_RUNTIME_DIR", "/nonexistent-runtime-dir")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("No agent running"),
        "Expected error about missing agent, got: {}",
        stderr
    );
}
