//! Core data models for the clearance engine.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ClearanceError, Result};

/// Single 4D waypoint in the local hub frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Meters east of the hub origin
    pub x: f64,
    /// Meters north of the hub origin
    pub y: f64,
    /// Meters above ground
    pub z: f64,
    /// Seconds from scenario start
    pub time: f64,
}

impl Waypoint {
    pub fn new(x: f64, y: f64, z: f64, time: f64) -> Self {
        Self { x, y, z, time }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.time.is_finite()
    }
}

/// Operational role of a scheduled flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlightRole {
    Cargo,
    Delivery,
    Emergency,
}

impl fmt::Display for FlightRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightRole::Cargo => write!(f, "cargo"),
            FlightRole::Delivery => write!(f, "delivery"),
            FlightRole::Emergency => write!(f, "emergency"),
        }
    }
}

/// Interval during which a flight is considered active.
///
/// Independent of the waypoint timestamps: a flight can reserve a window
/// wider than the span its waypoints actually cover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_s: f64,
    pub end_s: f64,
}

impl TimeWindow {
    pub fn new(start_s: f64, end_s: f64) -> Self {
        Self { start_s, end_s }
    }

    /// True if the two windows share more than a single instant.
    ///
    /// Windows that only touch (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeWindow) -> bool {
        time_windows_overlap(self.start_s, self.end_s, other.start_s, other.end_s)
    }

    /// Shared part of the two windows: `(max(starts), min(ends))`.
    ///
    /// Only meaningful when [`overlaps`](Self::overlaps) holds.
    pub fn intersection(&self, other: &TimeWindow) -> TimeWindow {
        TimeWindow {
            start_s: self.start_s.max(other.start_s),
            end_s: self.end_s.min(other.end_s),
        }
    }

    pub fn shifted(&self, offset_s: f64) -> TimeWindow {
        TimeWindow {
            start_s: self.start_s + offset_s,
            end_s: self.end_s + offset_s,
        }
    }

    pub(crate) fn validate(&self, record: &str) -> Result<()> {
        if !self.start_s.is_finite() || !self.end_s.is_finite() {
            return Err(ClearanceError::InvalidTimeWindow {
                record: record.to_string(),
                reason: "bounds must be finite".to_string(),
            });
        }
        if self.start_s > self.end_s {
            return Err(ClearanceError::InvalidTimeWindow {
                record: record.to_string(),
                reason: format!(
                    "start ({}) is after end ({})",
                    self.start_s, self.end_s
                ),
            });
        }
        Ok(())
    }
}

/// Overlap test on raw interval bounds: `max(starts) < min(ends)`.
pub fn time_windows_overlap(a_start: f64, a_end: f64, b_start: f64, b_end: f64) -> bool {
    a_start.max(b_start) < a_end.min(b_end)
}

/// Anything with a waypoint path and an activity window.
pub trait TrajectoryRecord {
    /// Identifier used in conflicts and error messages.
    fn record_id(&self) -> &str;

    fn waypoints(&self) -> &[Waypoint];

    fn window(&self) -> TimeWindow;
}

/// The flight plan being evaluated for clearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub mission_id: String,
    pub waypoints: Vec<Waypoint>,
    pub window: TimeWindow,
}

impl Mission {
    pub fn new(
        mission_id: impl Into<String>,
        waypoints: Vec<Waypoint>,
        start_s: f64,
        end_s: f64,
    ) -> Self {
        Self {
            mission_id: mission_id.into(),
            waypoints,
            window: TimeWindow::new(start_s, end_s),
        }
    }

    /// Copy of the mission moved by a fixed offset in space.
    pub fn translated(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            mission_id: self.mission_id.clone(),
            waypoints: self
                .waypoints
                .iter()
                .map(|wp| Waypoint::new(wp.x + dx, wp.y + dy, wp.z + dz, wp.time))
                .collect(),
            window: self.window,
        }
    }

    /// Copy of the mission with its window and every timestamp delayed.
    pub fn time_shifted(&self, offset_s: f64) -> Self {
        Self {
            mission_id: self.mission_id.clone(),
            waypoints: self
                .waypoints
                .iter()
                .map(|wp| Waypoint::new(wp.x, wp.y, wp.z, wp.time + offset_s))
                .collect(),
            window: self.window.shifted(offset_s),
        }
    }
}

impl TrajectoryRecord for Mission {
    fn record_id(&self) -> &str {
        &self.mission_id
    }

    fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    fn window(&self) -> TimeWindow {
        self.window
    }
}

/// Pre-existing traffic the mission must stay clear of.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledFlight {
    pub flight_id: String,
    pub role: FlightRole,
    pub waypoints: Vec<Waypoint>,
    pub window: TimeWindow,
}

impl ScheduledFlight {
    pub fn new(
        flight_id: impl Into<String>,
        role: FlightRole,
        waypoints: Vec<Waypoint>,
        start_s: f64,
        end_s: f64,
    ) -> Self {
        Self {
            flight_id: flight_id.into(),
            role,
            waypoints,
            window: TimeWindow::new(start_s, end_s),
        }
    }
}

impl TrajectoryRecord for ScheduledFlight {
    fn record_id(&self) -> &str {
        &self.flight_id
    }

    fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    fn window(&self) -> TimeWindow {
        self.window
    }
}

/// Check that a waypoint sequence can be interpolated.
///
/// Requires at least two waypoints, finite values, and non-decreasing
/// timestamps. Repeated timestamps are accepted.
pub fn validate_waypoints(record: &str, waypoints: &[Waypoint]) -> Result<()> {
    if waypoints.len() < 2 {
        return Err(ClearanceError::malformed(
            record,
            waypoints.len().saturating_sub(1),
            format!("need at least 2 waypoints, got {}", waypoints.len()),
        ));
    }

    for (idx, wp) in waypoints.iter().enumerate() {
        if !wp.is_finite() {
            return Err(ClearanceError::malformed(
                record,
                idx,
                "coordinates and time must be finite",
            ));
        }
        if idx > 0 && wp.time < waypoints[idx - 1].time {
            return Err(ClearanceError::malformed(
                record,
                idx,
                format!(
                    "timestamp {} precedes previous timestamp {}",
                    wp.time,
                    waypoints[idx - 1].time
                ),
            ));
        }
    }

    Ok(())
}
