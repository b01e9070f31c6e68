//! Chart rendering with plotters.
//!
//! Two chart kinds: the per-hour mean profile with confidence bands and
//! the temperature scatter with a fitted line.

use std::path::Path;

use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::info;

use crate::analyzers::hourly::HourlyProfile;
use crate::analyzers::regression::LinearFit;

const PROFILE_SIZE: (u32, u32) = (800, 500);
const SCATTER_SIZE: (u32, u32) = (800, 800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Svg,
}

impl ImageFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Renders the hourly profile chart to `path` in the given format.
pub fn render_hourly_profile(
    path: &Path,
    format: ImageFormat,
    profile: &HourlyProfile,
) -> Result<()> {
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, PROFILE_SIZE).into_drawing_area();
            draw_hourly_profile(&root, profile)?;
            root.present()?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, PROFILE_SIZE).into_drawing_area();
            draw_hourly_profile(&root, profile)?;
            root.present()?;
        }
    }
    info!(path = %path.display(), "Hourly profile chart written");
    Ok(())
}

/// Renders the temperature scatter chart to `path` in the given format.
pub fn render_temp_scatter(
    path: &Path,
    format: ImageFormat,
    points: &[(f64, f64)],
    fit: Option<&LinearFit>,
) -> Result<()> {
    match format {
        ImageFormat::Png => {
            let root = BitMapBackend::new(path, SCATTER_SIZE).into_drawing_area();
            draw_temp_scatter(&root, points, fit)?;
            root.present()?;
        }
        ImageFormat::Svg => {
            let root = SVGBackend::new(path, SCATTER_SIZE).into_drawing_area();
            draw_temp_scatter(&root, points, fit)?;
            root.present()?;
        }
    }
    info!(path = %path.display(), "Temperature scatter chart written");
    Ok(())
}

fn draw_hourly_profile<DB>(root: &DrawingArea<DB, Shift>, profile: &HourlyProfile) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let y_max = (profile.max_upper_bound() * 1.1).max(1.0);
    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..23u32, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_labels(24)
        .x_desc("Hour of Day")
        .y_desc("Average Trips per Hour")
        .draw()?;

    for (series, color, label) in [(&profile.dry, BLUE, "Dry"), (&profile.wet, RED, "Wet")] {
        if series.is_empty() {
            continue;
        }

        // Confidence band: upper bounds left to right, lower bounds back.
        let band: Vec<(u32, f64)> = series
            .iter()
            .map(|p| (p.hour, p.ci_high))
            .chain(series.iter().rev().map(|p| (p.hour, p.ci_low)))
            .collect();
        chart.draw_series(std::iter::once(Polygon::new(band, color.mix(0.15).filled())))?;

        chart
            .draw_series(LineSeries::new(
                series.iter().map(|p| (p.hour, p.mean_trips)),
                &color,
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    Ok(())
}

fn draw_temp_scatter<DB>(
    root: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    fit: Option<&LinearFit>,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (x_min, x_max) = if points.is_empty() {
        (0.0, 30.0)
    } else {
        let lo = points.iter().map(|p| p.0).fold(f64::MAX, f64::min);
        let hi = points.iter().map(|p| p.0).fold(f64::MIN, f64::max);
        (lo - 1.0, hi + 1.0)
    };

    let mut chart = ChartBuilder::on(root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..8000f64)?;

    chart
        .configure_mesh()
        .x_desc("Temperature (Feels Like)")
        .y_desc("Trips per Hour")
        .draw()?;

    chart.draw_series(
        points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), 3, BLUE.mix(0.2).filled())),
    )?;

    if let Some(fit) = fit {
        chart.draw_series(LineSeries::new(
            vec![(x_min, fit.predict(x_min)), (x_max, fit.predict(x_max))],
            &BLUE,
        ))?;
    }

    Ok(())
}
