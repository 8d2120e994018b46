//! Strategic clearance check for a drone mission.
//!
//! Evaluates a mission against scheduled traffic and prints a verdict.
//!
//! Usage:
//!   cargo run -p clearance-cli --bin clearance -- --scenario hub
//!   cargo run -p clearance-cli --bin clearance -- --file data/hub_night_scan.json --format json
//!
//! Exit status is 0 when the mission is clear, 2 when it is blocked and 1
//! when the check could not be run.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clearance_cli::{
    create_deferred_scenario, create_hub_scenario, create_shifted_east_scenario, load_scenario,
    render_airspace_svg, summarize_clearance, CliConfig, ClearanceReport,
};
use clearance_core::ClearanceEvaluator;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Offset used by the shifted-east scenario (meters)
const SHIFT_EAST_M: f64 = 1000.0;
/// Delay used by the deferred scenario (seconds)
const DEFER_S: f64 = 10_000.0;

/// Built-in scenarios
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioType {
    /// Night perimeter scan with the default hub traffic
    Hub,
    /// Perimeter scan moved 1 km east of the hub
    HubShiftedEast,
    /// Perimeter scan deferred past all scheduled traffic
    HubDeferred,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Strategic pre-flight deconfliction check
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Built-in scenario to evaluate
    #[arg(long, value_enum, default_value = "hub")]
    scenario: ScenarioType,

    /// JSON scenario file (takes precedence over --scenario)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Minimum allowed 3D separation in meters
    #[arg(long)]
    safety_radius: Option<f64>,

    /// Sampling density per waypoint
    #[arg(long)]
    samples_per_segment: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write a 3D SVG plot of the airspace to this path
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so JSON output stays machine-readable
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("clearance=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let scenario = match &args.file {
        Some(path) => load_scenario(path)?,
        None => match args.scenario {
            ScenarioType::Hub => create_hub_scenario(),
            ScenarioType::HubShiftedEast => create_shifted_east_scenario(SHIFT_EAST_M),
            ScenarioType::HubDeferred => create_deferred_scenario(DEFER_S),
        },
    };

    let config = CliConfig::from_env()?
        .resolve(
            scenario.config.as_ref(),
            args.safety_radius,
            args.samples_per_segment,
        )
        .context("invalid deconfliction configuration")?;

    tracing::info!(
        scenario = %scenario.name,
        safety_radius_m = config.safety_radius_m,
        samples_per_segment = config.samples_per_segment,
        flights = scenario.traffic.len(),
        "evaluating mission clearance"
    );

    let result = ClearanceEvaluator::new(config)?
        .evaluate(&scenario.mission, &scenario.traffic)
        .with_context(|| format!("clearance evaluation failed for '{}'", scenario.name))?;

    match args.format {
        OutputFormat::Text => println!("{}", summarize_clearance(&result)),
        OutputFormat::Json => {
            let report = ClearanceReport::new(&scenario.name, &result);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if let Some(path) = &args.plot {
        render_airspace_svg(path, &result, &scenario.traffic)?;
    }

    Ok(if result.is_clear() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(2)
    })
}
