//! Strategic clearance evaluation.
//!
//! Decides whether a planned mission can be flown given the scheduled
//! traffic around the hub, attaches a qualitative risk level, and lists
//! every flight that would violate the safety radius.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::models::{FlightRole, Mission, ScheduledFlight, TimeWindow, TrajectoryRecord};
use crate::rules::DeconflictionConfig;
use crate::spatial::{min_separation, sample_record};

/// Mission-level verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearanceStatus {
    /// No scheduled flight violates the safety radius
    Clear,
    /// At least one conflict was found
    Blocked,
}

impl fmt::Display for ClearanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClearanceStatus::Clear => write!(f, "clear"),
            ClearanceStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// Qualitative risk derived from the worst separation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Comfortably separated, or no relevant traffic
    Low,
    /// Clear of the safety radius but within twice of it
    Medium,
    /// Safety radius violated at least once
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Medium => write!(f, "medium"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

/// Scheduled flight predicted to come closer than the safety radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    pub flight_id: String,
    pub role: FlightRole,
    /// Closest sampled approach, rounded to 0.1 m
    pub min_separation_m: f64,
    /// Part of the mission window shared with the flight
    pub overlap_window: TimeWindow,
}

/// Outcome of a clearance evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearanceResult {
    pub status: ClearanceStatus,
    pub risk_level: RiskLevel,
    /// Smallest separation to any time-overlapping flight, rounded to 0.1 m.
    /// `None` when no flight overlapped the mission window.
    pub worst_separation_m: Option<f64>,
    /// In traffic order
    pub conflicts: Vec<Conflict>,
    pub mission: Mission,
    pub config: DeconflictionConfig,
}

impl ClearanceResult {
    pub fn is_clear(&self) -> bool {
        self.status == ClearanceStatus::Clear
    }
}

/// Classify mission risk from the worst 3D separation.
///
/// `None` means no traffic overlapped in time and is always low risk.
/// Boundary values fall into the lower-risk bucket.
pub fn classify_risk_level(
    worst_separation_m: Option<f64>,
    config: &DeconflictionConfig,
) -> RiskLevel {
    let Some(worst) = worst_separation_m else {
        return RiskLevel::Low;
    };
    if worst < config.safety_radius_m {
        RiskLevel::High
    } else if worst < config.risk_buffer_m() {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

/// Clearance engine bound to one configuration.
#[derive(Debug, Clone, Default)]
pub struct ClearanceEvaluator {
    config: DeconflictionConfig,
}

impl ClearanceEvaluator {
    /// Create an evaluator, validating the configuration first.
    pub fn new(config: DeconflictionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &DeconflictionConfig {
        &self.config
    }

    /// Evaluate a mission against scheduled traffic.
    ///
    /// Flights whose window does not overlap the mission window are skipped
    /// without being sampled. Conflicts keep the order of `traffic`.
    ///
    /// # Errors
    /// Any malformed record that has to be sampled aborts the evaluation;
    /// no partial result is returned.
    pub fn evaluate(
        &self,
        mission: &Mission,
        traffic: &[ScheduledFlight],
    ) -> Result<ClearanceResult> {
        let config = &self.config;
        let mission_window = mission.window();
        mission_window.validate(mission.record_id())?;

        let mission_traj = sample_record(mission, config)?;

        let mut conflicts = Vec::new();
        let mut worst: Option<f64> = None;

        for flight in traffic {
            flight.window().validate(flight.record_id())?;
            if !mission_window.overlaps(&flight.window()) {
                tracing::debug!(
                    flight_id = %flight.flight_id,
                    "skipping flight without time overlap"
                );
                continue;
            }

            let flight_traj = sample_record(flight, config)?;
            let separation = min_separation(&mission_traj, &flight_traj)?;
            worst = Some(worst.map_or(separation, |w| w.min(separation)));

            tracing::debug!(
                flight_id = %flight.flight_id,
                role = %flight.role,
                separation_m = separation,
                "assessed scheduled flight"
            );

            if separation < config.safety_radius_m {
                conflicts.push(Conflict {
                    flight_id: flight.flight_id.clone(),
                    role: flight.role,
                    min_separation_m: round_to_tenth(separation),
                    overlap_window: mission_window.intersection(&flight.window()),
                });
            }
        }

        let status = if conflicts.is_empty() {
            ClearanceStatus::Clear
        } else {
            ClearanceStatus::Blocked
        };
        let risk_level = classify_risk_level(worst, config);

        tracing::info!(
            mission_id = %mission.mission_id,
            %status,
            %risk_level,
            conflicts = conflicts.len(),
            "clearance evaluated"
        );

        Ok(ClearanceResult {
            status,
            risk_level,
            worst_separation_m: worst.map(round_to_tenth),
            conflicts,
            mission: mission.clone(),
            config: *config,
        })
    }
}

/// Evaluate a mission with the default configuration.
pub fn evaluate_mission_clearance(
    mission: &Mission,
    traffic: &[ScheduledFlight],
) -> Result<ClearanceResult> {
    ClearanceEvaluator::default().evaluate(mission, traffic)
}

/// Evaluate a mission with an explicit configuration.
pub fn evaluate_mission_clearance_with_config(
    mission: &Mission,
    traffic: &[ScheduledFlight],
    config: &DeconflictionConfig,
) -> Result<ClearanceResult> {
    ClearanceEvaluator::new(*config)?.evaluate(mission, traffic)
}

/// Round to one decimal place for reporting.
///
/// Rounds the exact binary value, ties to even: 22.25 becomes 22.2 and
/// 0.15 (stored just below the half) becomes 0.1.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}
