//! Error taxonomy for clearance evaluation.

use thiserror::Error;

/// Errors raised while validating inputs or evaluating a mission.
///
/// Every variant names the record or field that caused it so the caller can
/// point an operator at the bad input. A failed evaluation never produces a
/// partial [`ClearanceResult`](crate::ClearanceResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClearanceError {
    /// Waypoint list too short, non-finite, or out of time order.
    #[error("malformed waypoint sequence for '{record}' at waypoint {index}: {reason}")]
    MalformedWaypointSequence {
        record: String,
        index: usize,
        reason: String,
    },

    /// Configuration knob outside its allowed range.
    #[error("invalid configuration field '{field}': {reason}")]
    InvalidConfiguration { field: &'static str, reason: String },

    /// Activity window with non-finite or inverted bounds.
    #[error("invalid time window for '{record}': {reason}")]
    InvalidTimeWindow { record: String, reason: String },

    /// A sampled trajectory with no points reached the separation estimator.
    #[error("cannot compare an empty sampled trajectory")]
    EmptyTrajectoryComparison,
}

impl ClearanceError {
    pub(crate) fn malformed(record: &str, index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedWaypointSequence {
            record: record.to_string(),
            index,
            reason: reason.into(),
        }
    }

    pub(crate) fn config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClearanceError>;
