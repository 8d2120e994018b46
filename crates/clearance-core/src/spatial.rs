//! Trajectory sampling and separation math.
//!
//! Waypoint paths are densified by piecewise-linear interpolation over time,
//! and separation between two paths is the smallest distance between any
//! pair of their samples.

use serde::{Deserialize, Serialize};

use crate::error::{ClearanceError, Result};
use crate::models::{validate_waypoints, TrajectoryRecord, Waypoint};
use crate::rules::DeconflictionConfig;

/// Point in the local hub frame (meters).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line 3D distance.
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Densely sampled path: `points[i]` is the position at `times[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledTrajectory {
    points: Vec<Position>,
    times: Vec<f64>,
}

impl SampledTrajectory {
    pub fn points(&self) -> &[Position] {
        &self.points
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last sample time.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }
}

/// Number of samples taken for a path of `waypoint_count` waypoints.
///
/// The count is spread over the whole path, not per segment, so paths with
/// many short segments get the same density budget as one long leg.
pub fn sample_count(waypoint_count: usize, samples_per_segment: usize) -> usize {
    waypoint_count.saturating_mul(samples_per_segment).max(2)
}

/// Turn a waypoint list into a sampled 3D trajectory.
///
/// Samples are spaced uniformly in time across `[first.time, last.time]`
/// and each axis is interpolated independently.
///
/// # Errors
/// `MalformedWaypointSequence` if the waypoints cannot be interpolated,
/// `InvalidConfiguration` if `samples_per_segment` is zero.
pub fn sample_trajectory(
    record: &str,
    waypoints: &[Waypoint],
    samples_per_segment: usize,
) -> Result<SampledTrajectory> {
    if samples_per_segment == 0 {
        return Err(ClearanceError::config("samples_per_segment", "must be at least 1"));
    }
    validate_waypoints(record, waypoints)?;

    let knots: Vec<f64> = waypoints.iter().map(|wp| wp.time).collect();
    let xs: Vec<f64> = waypoints.iter().map(|wp| wp.x).collect();
    let ys: Vec<f64> = waypoints.iter().map(|wp| wp.y).collect();
    let zs: Vec<f64> = waypoints.iter().map(|wp| wp.z).collect();

    // validate_waypoints guarantees at least two knots
    let t0 = knots[0];
    let t1 = knots[knots.len() - 1];
    let times = linspace(t0, t1, sample_count(waypoints.len(), samples_per_segment));

    let points = times
        .iter()
        .map(|&t| {
            Position::new(
                interpolate(t, &knots, &xs),
                interpolate(t, &knots, &ys),
                interpolate(t, &knots, &zs),
            )
        })
        .collect();

    Ok(SampledTrajectory { points, times })
}

/// Sample any mission or flight record with the configured density.
pub fn sample_record<R: TrajectoryRecord + ?Sized>(
    record: &R,
    config: &DeconflictionConfig,
) -> Result<SampledTrajectory> {
    sample_trajectory(
        record.record_id(),
        record.waypoints(),
        config.samples_per_segment,
    )
}

/// Minimum 3D distance over every sample pair of two trajectories.
///
/// O(N×M); only the samples themselves are compared, so the result is an
/// upper bound on the true closest approach that tightens with density.
///
/// # Errors
/// `EmptyTrajectoryComparison` if either trajectory has no samples.
pub fn min_separation(a: &SampledTrajectory, b: &SampledTrajectory) -> Result<f64> {
    // The sampler never emits fewer than two points.
    if a.is_empty() || b.is_empty() {
        return Err(ClearanceError::EmptyTrajectoryComparison);
    }

    Ok(a
        .points
        .iter()
        .flat_map(|p| b.points.iter().map(move |q| p.distance_to(q)))
        .fold(f64::INFINITY, f64::min))
}

/// `count` evenly spaced values from `start` to `end`, both inclusive.
fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    // Pin the endpoint so the sampled span matches the waypoint span exactly.
    if let Some(last) = values.last_mut() {
        *last = end;
    }
    values
}

/// Piecewise-linear interpolation of `values` over ascending `knots`.
///
/// Queries before the first knot or at/after the last clamp to the boundary
/// value. `knots` must be non-empty and the same length as `values`.
fn interpolate(t: f64, knots: &[f64], values: &[f64]) -> f64 {
    // First knot strictly after t
    let upper = knots.partition_point(|&k| k <= t);
    if upper == 0 {
        return values[0];
    }
    if upper == knots.len() {
        return values[values.len() - 1];
    }

    let lower = upper - 1;
    let span = knots[upper] - knots[lower];
    let ratio = (t - knots[lower]) / span;
    values[lower] + (values[upper] - values[lower]) * ratio
}
