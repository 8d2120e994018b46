//! Clearance CLI - scenarios, reporting and plotting around the clearance engine.
//!
//! This crate provides the `clearance` binary:
//! - built-in hub scenarios and JSON scenario loading
//! - text and JSON clearance reports
//! - SVG 3D plot of mission and traffic

pub mod config;
pub mod plot;
pub mod report;
pub mod scenarios;

pub use config::CliConfig;
pub use plot::render_airspace_svg;
pub use report::{summarize_clearance, ClearanceReport};
pub use scenarios::{
    create_deferred_scenario, create_hub_scenario, create_shifted_east_scenario,
    define_perimeter_scan_mission, define_scheduled_traffic, load_scenario, Scenario,
};
