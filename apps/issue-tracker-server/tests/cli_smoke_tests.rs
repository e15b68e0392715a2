#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the issue-tracker-server binary

use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

fn run_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_issue-tracker-server"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute issue-tracker-server")
}

async fn run_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_issue-tracker-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let child = cmd.spawn()?;

    match timeout(timeout_duration, child.wait_with_output()).await {
        Ok(result) => result.map_err(Into::into),
        Err(_elapsed) => Err("elapsed".into()),
    }
}

fn write_config(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write config file");
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("issue-tracker-server"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"), "Should mention config option");
    assert!(stdout.contains("--mock"), "Should mention mock option");
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"]);

    assert!(output.status.success(), "Version command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("issue-tracker-server"));
    assert!(stdout.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_server(&["invalid-command"]);

    assert!(!output.status.success(), "Invalid command should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "Unexpected stderr: {stderr}");
}

#[test]
fn test_cli_config_validation_missing_file() {
    let output = run_server(&["--config", "/nonexistent/config.yaml", "check"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("does not exist"),
        "Should indicate config file not found: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_invalid_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir, "invalid.yaml", "invalid: yaml: content: [unclosed");

    let output = run_server(&["--config", &config, "check"]);

    assert!(!output.status.success(), "Should fail with invalid YAML");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to parse configuration"),
        "Should mention parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_config_validation_unknown_key() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(&temp_dir, "unknown.yaml", "server:\n  listen: 0.0.0.0:80\n");

    let output = run_server(&["--config", &config, "check"]);

    assert!(!output.status.success(), "Unknown keys should be rejected");
}

#[test]
fn test_cli_config_validation_valid_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let content = format!(
        r#"
server:
  bind_addr: "127.0.0.1:0"
database:
  dsn: "sqlite://{}/issues.db?mode=rwc"
  max_conns: 4
logging:
  level: error
  format: json
issues:
  route_prefix: /api/issues
"#,
        temp_dir.path().to_string_lossy().replace('\\', "/")
    );
    let config = write_config(&temp_dir, "valid.yaml", &content);

    let output = run_server(&["--config", &config, "check"]);

    if !output.status.success() {
        eprintln!("STDERR: {}", String::from_utf8_lossy(&output.stderr));
    }
    assert!(output.status.success(), "Should succeed with valid config");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Configuration is valid"));
}

#[test]
fn test_cli_check_rejects_bad_bind_address() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(
        &temp_dir,
        "bad_addr.yaml",
        "server:\n  bind_addr: \"not-an-address\"\n",
    );

    let output = run_server(&["--config", &config, "run"]);

    assert!(!output.status.success(), "Should fail with invalid bind address");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Invalid bind address"),
        "Should mention address parsing issue: {stderr}"
    );
}

#[test]
fn test_cli_print_config_applies_overrides() {
    let output = run_server(&["--print-config", "--port", "8087", "--mock", "-vv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("127.0.0.1:8087"), "stdout: {stdout}");
    assert!(stdout.contains("sqlite::memory:"), "stdout: {stdout}");
    assert!(stdout.contains("debug"), "stdout: {stdout}");

    let parsed: Result<serde_json::Value, _> = serde_saphyr::from_str(&stdout);
    assert!(parsed.is_ok(), "Output should be valid YAML");
}

#[test]
fn test_cli_env_overrides_yaml() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = write_config(
        &temp_dir,
        "env.yaml",
        "issues:\n  route_prefix: /from-yaml\n",
    );

    let output = Command::new(env!("CARGO_BIN_EXE_issue-tracker-server"))
        .args(["--config", &config, "--print-config"])
        .env("ISSUE_TRACKER__ISSUES__ROUTE_PREFIX", "/from-env")
        .output()
        .expect("Failed to execute issue-tracker-server");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("/from-env"), "stdout: {stdout}");
    assert!(!stdout.contains("/from-yaml"), "stdout: {stdout}");
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_server(&["run", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Start the server"));

    let output = run_server(&["check", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Validate configuration"));
}

#[tokio::test]
async fn test_cli_mock_run_keeps_serving() {
    // The server runs until signalled, so a timeout means it started.
    match run_server_with_timeout(&["--mock", "--port", "0", "run"], Duration::from_secs(2)).await
    {
        Err(e) if e.to_string().contains("elapsed") => {}
        Ok(output) => panic!(
            "server exited early: {}",
            String::from_utf8_lossy(&output.stderr)
        ),
        Err(other) => panic!("Unexpected failure: {other}"),
    }
}
