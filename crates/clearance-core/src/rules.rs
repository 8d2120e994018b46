//! Separation rules and sampling knobs for the clearance engine.

use serde::{Deserialize, Serialize};

use crate::error::{ClearanceError, Result};

/// Default minimum 3D separation (meters).
pub const DEFAULT_SAFETY_RADIUS_M: f64 = 25.0;
/// Default sampling density per waypoint.
pub const DEFAULT_SAMPLES_PER_SEGMENT: usize = 10;

/// Worst separation below `safety_radius_m * RISK_BUFFER_MULTIPLIER` is medium risk.
pub const RISK_BUFFER_MULTIPLIER: f64 = 2.0;

/// Configuration for clearance evaluation.
///
/// Passed explicitly to every evaluation; there is no process-wide instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeconflictionConfig {
    /// Minimum allowed 3D separation between active flights (meters)
    pub safety_radius_m: f64,
    /// Samples per waypoint when densifying a trajectory
    pub samples_per_segment: usize,
}

impl Default for DeconflictionConfig {
    fn default() -> Self {
        Self {
            safety_radius_m: DEFAULT_SAFETY_RADIUS_M,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
        }
    }
}

impl DeconflictionConfig {
    /// Create a validated configuration.
    ///
    /// # Arguments
    /// * `safety_radius_m` - Minimum separation, must be finite and positive
    /// * `samples_per_segment` - Sampling density, must be at least 1
    pub fn new(safety_radius_m: f64, samples_per_segment: usize) -> Result<Self> {
        let config = Self {
            safety_radius_m,
            samples_per_segment,
        };
        config.validate()?;
        Ok(config)
    }

    /// Re-check the invariants, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        if !self.safety_radius_m.is_finite() || self.safety_radius_m <= 0.0 {
            return Err(ClearanceError::config(
                "safety_radius_m",
                format!("must be a positive number, got {}", self.safety_radius_m),
            ));
        }
        if self.samples_per_segment == 0 {
            return Err(ClearanceError::config(
                "samples_per_segment",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Separation below which the mission is still considered medium risk.
    pub fn risk_buffer_m(&self) -> f64 {
        self.safety_radius_m * RISK_BUFFER_MULTIPLIER
    }
}
