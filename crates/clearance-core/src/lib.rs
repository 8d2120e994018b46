//! Strategic pre-flight deconfliction engine.
//!
//! Samples the planned mission and each scheduled flight, filters traffic by
//! time window, and classifies the mission as clear or blocked with a
//! qualitative risk level.

pub mod clearance;
pub mod error;
pub mod models;
pub mod rules;
pub mod spatial;

pub use clearance::{
    classify_risk_level, evaluate_mission_clearance, evaluate_mission_clearance_with_config,
    round_to_tenth, ClearanceEvaluator, ClearanceResult, ClearanceStatus, Conflict, RiskLevel,
};
pub use error::{ClearanceError, Result};
pub use models::{
    time_windows_overlap, validate_waypoints, FlightRole, Mission, ScheduledFlight, TimeWindow,
    TrajectoryRecord, Waypoint,
};
pub use rules::DeconflictionConfig;
pub use spatial::{min_separation, sample_record, sample_trajectory, Position, SampledTrajectory};
