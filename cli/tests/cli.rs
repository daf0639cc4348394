use assert_cmd::Command;
use predicates::prelude::*;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    Command::cargo_bin("glance")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Display system information"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("DISTRIBUTION IDS"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("glance")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glance"));
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_default_run_prints_a_block() {
    Command::cargo_bin("glance")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains(":"));
}

#[test]
fn test_forced_distro_renders_that_logo() {
    Command::cargo_bin("glance")
        .unwrap()
        .args(["--distro", "ubuntu"])
        .assert()
        .success()
        // The label color of the Ubuntu palette.
        .stdout(predicate::str::contains("\u{1b}[1;31m"));
}

#[test]
fn test_unknown_distro_id_fails_with_message() {
    Command::cargo_bin("glance")
        .unwrap()
        .args(["--distro", "templeos"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown distribution id"));
}

// ============================================================================
// JSON Mode Tests
// ============================================================================

#[test]
fn test_json_mode_emits_valid_json() {
    let output = Command::cargo_bin("glance")
        .unwrap()
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(parsed.get("distro").is_some());
    assert!(parsed.get("entries").unwrap().is_array());
}

#[test]
fn test_json_mode_carries_no_escape_sequences() {
    let output = Command::cargo_bin("glance")
        .unwrap()
        .arg("--json")
        .output()
        .unwrap();
    assert!(!output.stdout.contains(&0x1bu8));
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_missing_config_file_fails() {
    Command::cargo_bin("glance")
        .unwrap()
        .args(["--config", "/definitely/not/here.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_config_disables_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[entries]\nuser = false\n").unwrap();

    let output = Command::cargo_bin("glance")
        .unwrap()
        .args(["--json", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let labels: Vec<&str> = parsed["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["label"].as_str().unwrap())
        .collect();
    assert!(!labels.contains(&"User"));
    assert!(labels.contains(&"Kernel"));
}
