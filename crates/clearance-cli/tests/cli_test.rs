//! Exit status and configuration wiring of the `clearance` binary.

use std::process::{Command, Output};

fn clearance(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clearance"));
    cmd.args(args)
        .env_remove("CLEARANCE_SAFETY_RADIUS_M")
        .env_remove("CLEARANCE_SAMPLES_PER_SEGMENT")
        .env_remove("RUST_LOG");
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run clearance binary")
}

fn hub_file() -> String {
    format!("{}/../../data/hub_night_scan.json", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn blocked_hub_exits_with_two() {
    let output = clearance(&["--scenario", "hub"], &[]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("BLOCKED"));
    assert!(stdout.contains("early_cargo_south_corridor"));
}

#[test]
fn deferred_hub_exits_with_zero() {
    let output = clearance(&["--scenario", "hub-deferred"], &[]);
    assert_eq!(output.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&output.stdout).contains("CLEARED"));
}

#[test]
fn invalid_radius_flag_exits_with_one() {
    let output = clearance(&["--scenario", "hub", "--safety-radius=-1"], &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr)
        .contains("invalid deconfliction configuration"));
}

#[test]
fn unparsable_env_radius_exits_with_one() {
    let output = clearance(&["--scenario", "hub"], &[("CLEARANCE_SAFETY_RADIUS_M", "50m")]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("CLEARANCE_SAFETY_RADIUS_M"));
}

#[test]
fn env_radius_applies_without_flag_or_file() {
    // 22.4 m is clear of a 20 m radius
    let output = clearance(&["--scenario", "hub"], &[("CLEARANCE_SAFETY_RADIUS_M", "20")]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn flag_overrides_env_radius() {
    let output = clearance(
        &["--scenario", "hub", "--safety-radius", "25"],
        &[("CLEARANCE_SAFETY_RADIUS_M", "20")],
    );
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn scenario_file_config_overrides_env_radius() {
    let file = hub_file();
    let output = clearance(&["--file", &file], &[("CLEARANCE_SAFETY_RADIUS_M", "20")]);
    assert_eq!(output.status.code(), Some(2));

    let output = clearance(
        &["--file", &file, "--safety-radius", "20"],
        &[("CLEARANCE_SAFETY_RADIUS_M", "40")],
    );
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn json_output_is_a_report_envelope() {
    let output = clearance(&["--scenario", "hub", "--format", "json"], &[]);
    assert_eq!(output.status.code(), Some(2));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scenario"], "hub");
    assert_eq!(report["result"]["status"], "blocked");
    assert_eq!(report["result"]["worst_separation_m"], 22.4);
}
