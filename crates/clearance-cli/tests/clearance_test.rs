//! End-to-end clearance checks on the hub scenarios.

use clearance_cli::{
    create_deferred_scenario, create_hub_scenario, create_shifted_east_scenario, load_scenario,
    render_airspace_svg, summarize_clearance,
};
use clearance_core::{
    evaluate_mission_clearance, evaluate_mission_clearance_with_config, ClearanceStatus,
    DeconflictionConfig, FlightRole, RiskLevel, TimeWindow,
};
use std::fs;

fn data_file(name: &str) -> String {
    format!("{}/../../data/{}", env!("CARGO_MANIFEST_DIR"), name)
}

#[test]
fn hub_scenario_is_blocked_by_early_cargo() {
    let scenario = create_hub_scenario();
    let result = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();

    assert_eq!(result.status, ClearanceStatus::Blocked);
    assert_eq!(result.risk_level, RiskLevel::High);
    assert_eq!(result.worst_separation_m, Some(22.4));
    assert_eq!(result.conflicts.len(), 1);

    let conflict = &result.conflicts[0];
    assert_eq!(conflict.flight_id, "early_cargo_south_corridor");
    assert_eq!(conflict.role, FlightRole::Cargo);
    assert_eq!(conflict.min_separation_m, 22.4);
    assert_eq!(conflict.overlap_window, TimeWindow::new(120.0, 260.0));
}

#[test]
fn mission_moved_east_is_clear() {
    let scenario = create_shifted_east_scenario(1000.0);
    let result = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();

    assert_eq!(result.status, ClearanceStatus::Clear);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert!(result.conflicts.is_empty());
    // Traffic still overlaps in time, so a separation is reported
    assert!(result.worst_separation_m.unwrap() > 500.0);
}

#[test]
fn deferred_mission_has_no_relevant_traffic() {
    let scenario = create_deferred_scenario(10_000.0);
    let result = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();

    assert_eq!(result.status, ClearanceStatus::Clear);
    assert_eq!(result.risk_level, RiskLevel::Low);
    assert_eq!(result.worst_separation_m, None);
    assert!(summarize_clearance(&result).contains("worst separation n/a"));
}

#[test]
fn smaller_radius_clears_hub_at_medium_risk() {
    let scenario = create_hub_scenario();
    let config = DeconflictionConfig::new(20.0, 10).unwrap();
    let result =
        evaluate_mission_clearance_with_config(&scenario.mission, &scenario.traffic, &config)
            .unwrap();

    assert_eq!(result.status, ClearanceStatus::Clear);
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert_eq!(result.config, config);
}

#[test]
fn hub_summary_names_the_conflict() {
    let scenario = create_hub_scenario();
    let result = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();
    let summary = summarize_clearance(&result);

    assert!(summary
        .starts_with("Mission night_perimeter_scan_pune_hub_v1 BLOCKED (risk level high)."));
    assert!(summary.contains(
        "- early_cargo_south_corridor [cargo] violates safety radius (22.4 m) between t=120s and t=260s."
    ));
}

#[test]
fn hub_evaluation_is_repeatable() {
    let scenario = create_hub_scenario();
    let first = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();
    let second = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn bundled_scenario_file_matches_builtin_hub() {
    let loaded = load_scenario(data_file("hub_night_scan.json")).unwrap();
    let builtin = create_hub_scenario();

    assert_eq!(loaded.name, "hub_night_scan");
    assert_eq!(loaded.mission, builtin.mission);
    assert_eq!(loaded.traffic, builtin.traffic);
    assert_eq!(loaded.config, Some(DeconflictionConfig::default()));
}

#[test]
fn scenario_file_without_name_uses_file_stem() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rooftop_check.json");
    let mut scenario = create_hub_scenario();
    scenario.name = String::new();
    fs::write(&path, serde_json::to_string(&scenario).unwrap()).unwrap();

    let loaded = load_scenario(&path).unwrap();
    assert_eq!(loaded.name, "rooftop_check");
    assert_eq!(loaded.traffic.len(), 3);
    assert_eq!(loaded.config, None);
}

#[test]
fn unparsable_scenario_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, r#"{"mission": {"mission_id": "m"}}"#).unwrap();

    let err = load_scenario(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse scenario file"));
}

#[test]
fn plot_is_written_as_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("airspace.svg");
    let scenario = create_hub_scenario();
    let result = evaluate_mission_clearance(&scenario.mission, &scenario.traffic).unwrap();

    render_airspace_svg(&path, &result, &scenario.traffic).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("early_cargo_south_corridor"));
}
