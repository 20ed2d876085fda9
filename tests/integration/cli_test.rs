//! End-to-end tests for the mailform binary

use crate::common::{run_mailform, stdout_of, write_project_config};

use serde_json::Value;
use std::fs;
use tempfile::TempDir;

fn json_lines(stdout: &str) -> Vec<Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("stdout line is not JSON"))
        .collect()
}

// ============================================================================
// CHECK COMMAND TESTS
// ============================================================================

#[test]
fn test_check_valid_address_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["check", "user@example.com"]).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "✓ user@example.com\n");
}

#[test]
fn test_check_invalid_address_exits_one() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["check", "user..name@example.com"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "✗ user..name@example.com\n");
}

#[test]
fn test_check_json_output() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["--json", "check", "user@domain"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let lines = json_lines(&stdout_of(&output));
    assert_eq!(lines, vec![serde_json::json!({"email": "user@domain", "valid": false})]);
}

#[test]
fn test_check_quiet_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["-q", "check", "user@example.com"]).unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).is_empty());
}

// ============================================================================
// BATCH COMMAND TESTS
// ============================================================================

#[test]
fn test_batch_arguments() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["--json", "batch", "a@b.com", "bad", ""]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let lines = json_lines(&stdout_of(&output));
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0]["email"], "a@b.com");
    assert_eq!(lines[0]["valid"], true);
    assert_eq!(lines[1]["email"], "bad");
    assert_eq!(lines[1]["valid"], false);
    assert_eq!(lines[2]["email"], "");
    assert_eq!(lines[2]["valid"], false);
    assert_eq!(lines[3], serde_json::json!({"valid": 1, "invalid": 2}));
}

#[test]
fn test_batch_all_valid_exits_zero() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["batch", "a@b.com", "x@y.org"]).unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("✓ a@b.com"));
    assert!(stdout.contains("✓ x@y.org"));
    assert!(stdout.contains("2 valid, 0 invalid"));
}

#[test]
fn test_batch_json_file_with_mixed_types() {
    let tmp = TempDir::new().unwrap();
    let list = tmp.path().join("list.json");
    fs::write(&list, r#"["valid@example.com", null, 123, "invalid"]"#).unwrap();

    let output = run_mailform(
        tmp.path(),
        &["--json", "batch", "--file", list.to_str().unwrap()],
    )
    .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let lines = json_lines(&stdout_of(&output));
    assert_eq!(lines[0]["email"], "valid@example.com");
    assert_eq!(lines[0]["valid"], true);
    assert_eq!(lines[1]["email"], "null");
    assert_eq!(lines[1]["valid"], false);
    assert_eq!(lines[2]["email"], "123");
    assert_eq!(lines[2]["valid"], false);
    assert_eq!(lines[4], serde_json::json!({"valid": 1, "invalid": 3}));
}

#[test]
fn test_batch_line_file_large_parallel() {
    let tmp = TempDir::new().unwrap();
    let list = tmp.path().join("list.txt");
    let content: String = (0..600).map(|i| format!("user{}@example.com\n", i)).collect();
    fs::write(&list, content).unwrap();

    let output = run_mailform(
        tmp.path(),
        &["batch", "--workers", "4", "--file", list.to_str().unwrap()],
    )
    .unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).contains("600 valid, 0 invalid"));
}

#[test]
fn test_batch_without_input_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["batch"]).unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("No email addresses given"));
}

#[test]
fn test_batch_missing_file_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["batch", "--file", "nope.json"]).unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to read email list"));
}

#[test]
fn test_batch_rejects_zero_workers() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["batch", "--workers", "0", "a@b.com"]).unwrap();

    assert!(!output.status.success());
}

// ============================================================================
// EXAMPLE COMMAND TESTS
// ============================================================================

#[test]
fn test_greet() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["greet", "  Alice  "]).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Hello, Alice! Welcome to mailform.\n");
}

#[test]
fn test_greet_blank_name_fails() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["greet", "   "]).unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Name cannot be empty"));
}

#[test]
fn test_greet_safe_uses_configured_fallback() {
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "greeting:\n  fallback_name: Visitor\n").unwrap();

    let output = run_mailform(tmp.path(), &["greet", "--safe", ""]).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "Hello, Visitor! Welcome to mailform.\n");
}

#[test]
fn test_greet_web_escapes() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["greet", "--web", "<b>Bob</b>"]).unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("&lt;b&gt;Bob"));
    assert!(!stdout.contains('<'));
}

#[test]
fn test_add() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["add", "5", "-3"]).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2\n");
}

#[test]
fn test_add_verbose() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["add", "--verbose", "10", "20"]).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "  Calculating: 10 + 20\nResult: 30\n");
}

#[test]
fn test_add_overflow_fails() {
    let tmp = TempDir::new().unwrap();
    let max = i64::MAX.to_string();
    let output = run_mailform(tmp.path(), &["add", &max, "1"]).unwrap();

    assert!(!output.status.success());
}

#[test]
fn test_text_commands() {
    let tmp = TempDir::new().unwrap();

    let output = run_mailform(tmp.path(), &["text", "snake", "XMLHttpRequest"]).unwrap();
    assert_eq!(stdout_of(&output), "xml_http_request\n");

    let output = run_mailform(tmp.path(), &["text", "words", "  two   words "]).unwrap();
    assert_eq!(stdout_of(&output), "2\n");

    let output = run_mailform(
        tmp.path(),
        &["text", "truncate", "This is a long text", "--max", "10"],
    )
    .unwrap();
    assert_eq!(stdout_of(&output), "This is...\n");
}

// ============================================================================
// CONFIG AND UTILITY COMMAND TESTS
// ============================================================================

#[test]
fn test_config_output_format_json() {
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "output:\n  format: json\n").unwrap();

    let output = run_mailform(tmp.path(), &["check", "a@b.com"]).unwrap();

    assert!(output.status.success());
    let lines = json_lines(&stdout_of(&output));
    assert_eq!(lines[0]["valid"], true);
}

#[test]
fn test_invalid_config_reports_error() {
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "batch:\n  workers: 0\n").unwrap();

    let output = run_mailform(tmp.path(), &["check", "a@b.com"]).unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load configuration"));
}

#[test]
fn test_version_ignores_broken_config() {
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "batch:\n  workers: 0\n").unwrap();

    let output = run_mailform(tmp.path(), &["version"]).unwrap();

    assert!(output.status.success());
    assert!(stdout_of(&output).starts_with("mailform "));
}

#[test]
fn test_config_show_json() {
    let tmp = TempDir::new().unwrap();
    write_project_config(tmp.path(), "batch:\n  workers: 7\n").unwrap();

    let output = run_mailform(tmp.path(), &["--json", "config"]).unwrap();

    assert!(output.status.success());
    let lines = json_lines(&stdout_of(&output));
    assert_eq!(lines[0]["batch"]["workers"], 7);
    assert_eq!(lines[0]["output"]["format"], "human");
}

#[test]
fn test_version_json() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["--json", "version"]).unwrap();

    assert!(output.status.success());
    let lines = json_lines(&stdout_of(&output));
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["name"], "mailform");
    assert_eq!(lines[0]["version"], env!("CARGO_PKG_VERSION"));
}

// ============================================================================
// LOGGING TESTS
// ============================================================================

#[test]
fn test_debug_flag_logs_to_stderr() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["--debug", "check", "user@@example.com"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("DEBUG"), "stderr: {}", stderr);
    assert!(stderr.contains("Invalid @ count"), "stderr: {}", stderr);
    assert!(!stdout_of(&output).contains("Invalid @ count"));
}

#[test]
fn test_no_debug_logs_by_default() {
    let tmp = TempDir::new().unwrap();
    let output = run_mailform(tmp.path(), &["check", "user@@example.com"]).unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("Invalid @ count"), "stderr: {}", stderr);
}
