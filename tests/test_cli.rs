//! End-to-end tests for the salmontt binary with piped input

mod support;
use support::harness::{stderr, stdout, TestHarness};

const CLIENT_LINES: &str =
    "Lucia\nPerez\n11111111-1\n912345678\nlucia@example.cl\nLos Aromos 12\nMaipu\nSantiago\n";

// ============================================================================
// RUN
// ============================================================================

#[test]
fn test_run_lists_demo_employees_and_exits() {
    let harness = TestHarness::new();
    let output = harness.run(&[], "5\n");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Employee: KAKAROTO ROJAS"));
    assert!(text.contains("Employee: MARIO CHAMPIÑON"));
    assert!(text.contains("Employee: KAIMAN MAGIC"));
    assert!(text.contains("=== MAIN MENU ==="));
    assert!(text.contains("Exiting the system..."));
}

#[test]
fn test_run_no_seed_starts_empty() {
    let harness = TestHarness::new();
    let output = harness.run(&["run", "--no-seed"], "4\n5\n");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(!text.contains("KAKAROTO"));
    assert!(text.contains("No employees registered."));
}

#[test]
fn test_seed_can_be_disabled_in_config() {
    let harness = TestHarness::with_config("---\nseed:\n  demo_employees: false\n---\n");
    let output = harness.run(&[], "4\n5\n");

    assert!(output.status.success());
    assert!(stdout(&output).contains("No employees registered."));
}

#[test]
fn test_create_client_then_list() {
    let harness = TestHarness::new();
    let input = format!("1\n{}3\n5\n", CLIENT_LINES);
    let output = harness.run(&["run", "--no-seed"], &input);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Client created successfully."));
    assert!(text.contains("--- Last 3 Clients ---"));
    assert!(text.contains("1. LUCIA PEREZ"));
    assert!(text.contains("Phone: 912345678"));
    assert!(text.contains("Address: LOS AROMOS 12, MAIPU, SANTIAGO"));
}

#[test]
fn test_recent_count_follows_config() {
    let harness = TestHarness::with_config("---\ndisplay:\n  recent_count: 2\n---\n");
    let output = harness.run(&[], "4\n5\n");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Option 4: View last 2 employees"));
    assert!(text.contains("2. MARIO CHAMPIÑON"));
    assert!(text.contains("3. KAIMAN MAGIC"));
    assert!(!text.contains("1. KAKAROTO ROJAS"));
}

#[test]
fn test_run_fails_when_input_ends() {
    let harness = TestHarness::new();
    let output = harness.run(&["run", "--no-seed"], "");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Input closed"));
}

#[test]
fn test_json_mode_emits_one_event_per_line() {
    let harness = TestHarness::new();
    let output = harness.run(&["--json", "run", "--no-seed"], "3\n5\n");

    assert!(output.status.success());
    let text = stdout(&output);
    for line in text.lines() {
        serde_json::from_str::<serde_json::Value>(line)
            .unwrap_or_else(|_| panic!("not JSON: {}", line));
    }
    assert!(text.contains(r#""msg":"No clients registered.""#));
}

#[test]
fn test_bad_config_is_reported() {
    let harness = TestHarness::with_config("---\ndisplay:\n  recent_count: 0\n---\n");
    let output = harness.run(&[], "5\n");

    assert!(!output.status.success());
    assert!(stderr(&output).contains("recent_count"));
}

// ============================================================================
// CHECK
// ============================================================================

#[test]
fn test_check_accepts_valid_rut() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "rut", "12345678-5"], "");

    assert!(output.status.success());
    assert!(stdout(&output).contains("✓ Valid RUT: 12345678-5"));
}

#[test]
fn test_check_rejects_bad_email() {
    let harness = TestHarness::new();
    let output = harness.run(&["check", "email", "nobody@"], "");

    assert_eq!(output.status.code(), Some(1));
    let text = stdout(&output);
    assert!(text.contains("✗ Invalid email: nobody@"));
    assert!(text.contains("email must match"));
}

#[test]
fn test_check_uses_check_digit_setting() {
    let harness =
        TestHarness::with_config("---\ninput:\n  verify_rut_check_digit: true\n---\n");

    let output = harness.run(&["check", "rut", "12345678-9"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("RUT must have a valid check digit"));

    let output = harness.run(&["check", "rut", "11223344-k"], "");
    assert!(output.status.success());
}

// ============================================================================
// CONFIG / VERSION
// ============================================================================

#[test]
fn test_config_prints_effective_values() {
    let harness = TestHarness::with_config("---\ninput:\n  uppercase: false\n---\n");
    let output = harness.run(&["config"], "");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with("---\n"));
    assert!(text.contains("uppercase: false"));
    assert!(text.contains("recent_count: 3"));
}

#[test]
fn test_config_validate_reports_source() {
    let harness = TestHarness::new();
    let output = harness.run(&["config", "--validate"], "");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Configuration is valid"));
    assert!(text.contains("config.md"));
}

#[test]
fn test_version() {
    let harness = TestHarness::new();
    let output = harness.run(&["version", "--verbose"], "");

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.starts_with(&format!("salmontt {}", env!("CARGO_PKG_VERSION"))));
    assert!(text.contains("commit: "));
}
