//! 3D airspace plot of the mission and scheduled traffic.

use anyhow::{Context, Result};
use clearance_core::{sample_record, ClearanceResult, FlightRole, Position, ScheduledFlight};
use plotters::prelude::*;
use std::fs;
use std::ops::Range;
use std::path::Path;

const PLOT_SIZE: (u32, u32) = (1000, 700);
const AXIS_PADDING_M: f64 = 20.0;
const ORANGE: RGBColor = RGBColor(255, 140, 0);

fn role_color(role: FlightRole) -> RGBColor {
    match role {
        FlightRole::Cargo => RED,
        FlightRole::Delivery => GREEN,
        FlightRole::Emergency => ORANGE,
    }
}

/// Axis ranges covering every point, padded on both sides.
fn bounds<'a>(
    points: impl Iterator<Item = &'a Position>,
) -> (Range<f64>, Range<f64>, Range<f64>) {
    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for p in points {
        for (axis, value) in [p.x, p.y, p.z].into_iter().enumerate() {
            lo[axis] = lo[axis].min(value);
            hi[axis] = hi[axis].max(value);
        }
    }
    let range = |axis: usize| (lo[axis] - AXIS_PADDING_M)..(hi[axis] + AXIS_PADDING_M);
    (range(0), range(1), range(2))
}

/// Render the sampled mission and every scheduled flight to an SVG file.
///
/// The chart's vertical axis is altitude; traffic is coloured by role.
pub fn render_airspace_svg(
    path: impl AsRef<Path>,
    result: &ClearanceResult,
    traffic: &[ScheduledFlight],
) -> Result<()> {
    let path = path.as_ref();
    let mission_traj = sample_record(&result.mission, &result.config)?;
    let flight_trajs = traffic
        .iter()
        .map(|flight| Ok((flight, sample_record(flight, &result.config)?)))
        .collect::<clearance_core::Result<Vec<_>>>()?;

    let (x_range, y_range, z_range) = bounds(
        mission_traj
            .points()
            .iter()
            .chain(flight_trajs.iter().flat_map(|(_, traj)| traj.points())),
    );

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("3D Trajectories (risk={})", result.risk_level),
            ("sans-serif", 24).into_font(),
        )
        .margin(20)
        .build_cartesian_3d(x_range, z_range, y_range)?;
    chart
        .configure_axes()
        .draw()
        .with_context(|| format!("failed to draw axes to {}", path.display()))?;

    let mission_style = BLUE.stroke_width(3);
    chart
        .draw_series(LineSeries::new(
            mission_traj.points().iter().map(|p| (p.x, p.z, p.y)),
            mission_style,
        ))?
        .label(result.mission.mission_id.clone())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mission_style));

    for (flight, traj) in &flight_trajs {
        let style = role_color(flight.role).stroke_width(2);
        chart
            .draw_series(LineSeries::new(
                traj.points().iter().map(|p| (p.x, p.z, p.y)),
                style,
            ))?
            .label(flight.flight_id.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
    }

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    root.present()
        .with_context(|| format!("failed to write plot to {}", path.display()))?;
    tracing::info!(path = %path.display(), flights = traffic.len(), "rendered airspace plot");
    Ok(())
}
