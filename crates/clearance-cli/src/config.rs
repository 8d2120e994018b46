//! CLI configuration from environment.

use anyhow::{Context, Result};
use clearance_core::rules::{DEFAULT_SAFETY_RADIUS_M, DEFAULT_SAMPLES_PER_SEGMENT};
use clearance_core::DeconflictionConfig;
use std::env;
use std::str::FromStr;

pub const SAFETY_RADIUS_ENV: &str = "CLEARANCE_SAFETY_RADIUS_M";
pub const SAMPLES_PER_SEGMENT_ENV: &str = "CLEARANCE_SAMPLES_PER_SEGMENT";

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub safety_radius_m: f64,
    pub samples_per_segment: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            safety_radius_m: DEFAULT_SAFETY_RADIUS_M,
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
        }
    }
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup.
    ///
    /// Unset keys take the defaults; a set but unparsable value is an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            safety_radius_m: parse_var(&lookup, SAFETY_RADIUS_ENV)?
                .unwrap_or(defaults.safety_radius_m),
            samples_per_segment: parse_var(&lookup, SAMPLES_PER_SEGMENT_ENV)?
                .unwrap_or(defaults.samples_per_segment),
        })
    }

    /// Layer scenario-file values and command-line flags on top, then validate.
    ///
    /// Precedence: flag > scenario file > environment > default.
    pub fn resolve(
        &self,
        scenario: Option<&DeconflictionConfig>,
        safety_radius_m: Option<f64>,
        samples_per_segment: Option<usize>,
    ) -> clearance_core::Result<DeconflictionConfig> {
        let base = scenario.copied().unwrap_or(DeconflictionConfig {
            safety_radius_m: self.safety_radius_m,
            samples_per_segment: self.samples_per_segment,
        });
        DeconflictionConfig::new(
            safety_radius_m.unwrap_or(base.safety_radius_m),
            samples_per_segment.unwrap_or(base.samples_per_segment),
        )
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .with_context(|| format!("invalid {key} value '{raw}'"))
        })
        .transpose()
}
