//! Operator-facing rendering of clearance results.

use chrono::{DateTime, Utc};
use clearance_core::{ClearanceResult, ClearanceStatus};
use serde::Serialize;

/// JSON envelope written by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct ClearanceReport<'a> {
    pub evaluated_at: DateTime<Utc>,
    pub scenario: &'a str,
    pub result: &'a ClearanceResult,
}

impl<'a> ClearanceReport<'a> {
    pub fn new(scenario: &'a str, result: &'a ClearanceResult) -> Self {
        Self {
            evaluated_at: Utc::now(),
            scenario,
            result,
        }
    }
}

/// Concise summary for logs or the operator console.
pub fn summarize_clearance(result: &ClearanceResult) -> String {
    let mission_id = &result.mission.mission_id;

    if result.status == ClearanceStatus::Clear {
        let worst = result
            .worst_separation_m
            .map(|w| format!("{w:.1} m"))
            .unwrap_or_else(|| "n/a".to_string());
        return format!(
            "Mission {} CLEARED with risk level {} (worst separation {}).",
            mission_id, result.risk_level, worst
        );
    }

    let mut lines = vec![
        format!(
            "Mission {} BLOCKED (risk level {}).",
            mission_id, result.risk_level
        ),
        "Conflicts detected:".to_string(),
    ];
    for conflict in &result.conflicts {
        lines.push(format!(
            "- {} [{}] violates safety radius ({:.1} m) between t={}s and t={}s.",
            conflict.flight_id,
            conflict.role,
            conflict.min_separation_m,
            conflict.overlap_window.start_s,
            conflict.overlap_window.end_s
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clearance_core::{
        Conflict, DeconflictionConfig, FlightRole, Mission, RiskLevel, TimeWindow, Waypoint,
    };

    fn result(
        status: ClearanceStatus,
        worst: Option<f64>,
        conflicts: Vec<Conflict>,
    ) -> ClearanceResult {
        ClearanceResult {
            status,
            risk_level: if conflicts.is_empty() {
                RiskLevel::Low
            } else {
                RiskLevel::High
            },
            worst_separation_m: worst,
            conflicts,
            mission: Mission::new(
                "scan_v1",
                vec![Waypoint::new(0.0, 0.0, 60.0, 0.0), Waypoint::new(1.0, 0.0, 60.0, 1.0)],
                0.0,
                600.0,
            ),
            config: DeconflictionConfig::default(),
        }
    }

    #[test]
    fn clear_summary_reports_worst_separation() {
        let text = summarize_clearance(&result(ClearanceStatus::Clear, Some(88.0), vec![]));
        assert_eq!(
            text,
            "Mission scan_v1 CLEARED with risk level low (worst separation 88.0 m)."
        );
    }

    #[test]
    fn clear_summary_without_overlap_says_na() {
        let text = summarize_clearance(&result(ClearanceStatus::Clear, None, vec![]));
        assert!(text.ends_with("(worst separation n/a)."));
    }

    #[test]
    fn blocked_summary_lists_each_conflict() {
        let conflicts = vec![Conflict {
            flight_id: "early_cargo_south_corridor".to_string(),
            role: FlightRole::Cargo,
            min_separation_m: 22.4,
            overlap_window: TimeWindow::new(120.0, 260.0),
        }];
        let text = summarize_clearance(&result(ClearanceStatus::Blocked, Some(22.4), conflicts));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Mission scan_v1 BLOCKED (risk level high).");
        assert_eq!(lines[1], "Conflicts detected:");
        assert_eq!(
            lines[2],
            "- early_cargo_south_corridor [cargo] violates safety radius (22.4 m) between t=120s and t=260s."
        );
    }

    #[test]
    fn report_serializes_result_inline() {
        let result = result(ClearanceStatus::Clear, None, vec![]);
        let report = ClearanceReport::new("hub", &result);
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["scenario"], "hub");
        assert_eq!(value["result"]["status"], "clear");
        assert!(value["result"]["worst_separation_m"].is_null());
        assert!(value["evaluated_at"].is_string());
    }
}
