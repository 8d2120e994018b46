//! Airspace scenarios around the logistics hub.
//!
//! The built-in scenario is a night-time perimeter scan of a warehouse roof
//! with three scheduled traffic lanes nearby. Scenarios can also be loaded
//! from JSON files using the same record layout.

use anyhow::{Context, Result};
use clearance_core::{DeconflictionConfig, FlightRole, Mission, ScheduledFlight, Waypoint};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Low layer for the perimeter scan, below most transit traffic.
const PERIMETER_ALTITUDE_M: f64 = 60.0;

/// A mission plus the traffic it must be deconflicted against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub mission: Mission,
    #[serde(default)]
    pub traffic: Vec<ScheduledFlight>,
    /// Overrides the environment configuration when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<DeconflictionConfig>,
}

/// Perimeter scan: SW -> SE -> NE -> NW around the warehouse roof,
/// inside a 10-minute clearance window.
pub fn define_perimeter_scan_mission() -> Mission {
    let alt = PERIMETER_ALTITUDE_M;
    Mission::new(
        "night_perimeter_scan_pune_hub_v1",
        vec![
            Waypoint::new(0.0, -20.0, alt, 0.0),
            Waypoint::new(120.0, -20.0, alt, 60.0),
            Waypoint::new(120.0, 80.0, alt, 180.0),
            Waypoint::new(0.0, 80.0, alt, 300.0),
        ],
        0.0,
        600.0,
    )
}

/// Scheduled traffic around the hub:
///
/// - early cargo corridor along the south edge (low-mid altitude)
/// - diagonal urban delivery corridor above the hub
/// - high-altitude emergency lane cutting across the site
pub fn define_scheduled_traffic() -> Vec<ScheduledFlight> {
    vec![
        ScheduledFlight::new(
            "early_cargo_south_corridor",
            FlightRole::Cargo,
            vec![
                Waypoint::new(-50.0, -30.0, 80.0, 120.0),
                Waypoint::new(200.0, -30.0, 80.0, 260.0),
            ],
            120.0,
            260.0,
        ),
        ScheduledFlight::new(
            "urban_diag_delivery",
            FlightRole::Delivery,
            vec![
                Waypoint::new(-50.0, -50.0, 100.0, 100.0),
                Waypoint::new(200.0, 200.0, 100.0, 400.0),
            ],
            100.0,
            400.0,
        ),
        ScheduledFlight::new(
            "emergency_overpass_lane",
            FlightRole::Emergency,
            vec![
                Waypoint::new(0.0, 150.0, 130.0, 50.0),
                Waypoint::new(150.0, -50.0, 130.0, 250.0),
            ],
            50.0,
            250.0,
        ),
    ]
}

pub fn create_hub_scenario() -> Scenario {
    Scenario {
        name: "hub".to_string(),
        mission: define_perimeter_scan_mission(),
        traffic: define_scheduled_traffic(),
        config: None,
    }
}

/// Same traffic, mission flown `offset_m` further east.
pub fn create_shifted_east_scenario(offset_m: f64) -> Scenario {
    Scenario {
        name: "hub-shifted-east".to_string(),
        mission: define_perimeter_scan_mission().translated(offset_m, 0.0, 0.0),
        traffic: define_scheduled_traffic(),
        config: None,
    }
}

/// Same path, mission window and timestamps pushed `offset_s` later.
pub fn create_deferred_scenario(offset_s: f64) -> Scenario {
    let base = define_perimeter_scan_mission();
    let mut mission = base.time_shifted(offset_s);
    mission.mission_id = format!("{}_shifted", base.mission_id);
    Scenario {
        name: "hub-deferred".to_string(),
        mission,
        traffic: define_scheduled_traffic(),
        config: None,
    }
}

/// Load a scenario from a JSON file.
///
/// A missing `name` defaults to the file stem.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario file {}", path.display()))?;
    let mut scenario: Scenario = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse scenario file {}", path.display()))?;

    if scenario.name.is_empty() {
        scenario.name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scenario".to_string());
    }

    tracing::debug!(
        scenario = %scenario.name,
        flights = scenario.traffic.len(),
        "loaded scenario file"
    );
    Ok(scenario)
}
