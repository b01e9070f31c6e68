//! CLI entry point for the cycle trends tool.
//!
//! Provides subcommands for the hourly journey profile chart, the
//! temperature scatter chart, and the seasonal LaTeX table. All three
//! share the same load-and-filter pipeline from the library crate.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use cycle_trends::analyzers::{hourly, regression, seasonal};
use cycle_trends::dataset::{self, JourneyRecord};
use cycle_trends::filters;
use cycle_trends::output;
use cycle_trends::plot::{self, ImageFormat};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "cycle_trends")]
#[command(about = "A tool to analyze hourly cycle-journey records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Serialize)]
struct DataOpts {
    /// CSV file of hourly journey records
    #[arg(long, default_value = "data/raw/london_merged.csv")]
    input: PathBuf,

    /// First day of the analysis window (inclusive)
    #[arg(long, default_value = "2015-01-04")]
    start: NaiveDate,

    /// Last day of the analysis window (inclusive)
    #[arg(long, default_value = "2017-01-03")]
    end: NaiveDate,
}

#[derive(Args)]
struct ChartOpts {
    /// Write an SVG instead of a PNG
    #[arg(long, default_value_t = false)]
    svg: bool,

    /// Output path; defaults to the subcommand name with a matching extension
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Chart average trips per hour of day on working days, split by dry and wet weather
    DailyProfile {
        #[command(flatten)]
        data: DataOpts,

        #[command(flatten)]
        chart: ChartOpts,
    },
    /// Chart trips against feels-like temperature at a fixed hour on dry working days
    TempScatter {
        #[command(flatten)]
        data: DataOpts,

        #[command(flatten)]
        chart: ChartOpts,

        /// Hour of day to correlate (0-23)
        #[arg(long, default_value_t = 8)]
        hour: u32,
    },
    /// Write a LaTeX table of mean trips at a fixed hour by weather and season
    SeasonTable {
        #[command(flatten)]
        data: DataOpts,

        /// Hour of day to tabulate (0-23)
        #[arg(long, default_value_t = 8)]
        hour: u32,

        /// Output path; defaults to season-table.tex
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::DailyProfile { data, chart } => {
            output::print_json(&data)?;
            let records = load_window(&data)?;
            let working = filters::weekday_non_holiday(&records);

            let profile = hourly::profile(&working);
            let (path, format) = chart_target(&chart, "daily-profile");
            plot::render_hourly_profile(&path, format, &profile)?;
        }
        Commands::TempScatter { data, chart, hour } => {
            output::print_json(&data)?;
            let records = load_window(&data)?;
            let working = filters::weekday_non_holiday(&records);
            let morning = filters::at_hour(&working, hour);
            let dry: Vec<JourneyRecord> = morning.into_iter().filter(|r| r.is_dry()).collect();
            info!(hour, records = dry.len(), "Dry working-day records at fixed hour");

            let points = regression::points(&dry);
            let fit = regression::fit(&points);
            if fit.is_none() {
                warn!("Not enough data for a regression fit, drawing scatter only");
            }
            let (path, format) = chart_target(&chart, "temp-scatter");
            plot::render_temp_scatter(&path, format, &points, fit.as_ref())?;
        }
        Commands::SeasonTable { data, hour, output: table_path } => {
            output::print_json(&data)?;
            let records = load_window(&data)?;
            let working = filters::weekday_non_holiday(&records);
            let morning = filters::at_hour(&working, hour);
            info!(hour, records = morning.len(), "Working-day records at fixed hour");

            let table = seasonal::table(&morning);
            let path = table_path.unwrap_or_else(|| PathBuf::from("season-table.tex"));
            output::write_latex_table(&path, &table)?;
            info!(path = %path.display(), "Seasonal table written");
        }
    }

    Ok(())
}

/// Loads the full record set and narrows it to the requested date window.
fn load_window(data: &DataOpts) -> Result<Vec<JourneyRecord>> {
    let records = dataset::load(&data.input)?;
    let selected = filters::in_range(&records, data.start, data.end);
    info!(
        loaded = records.len(),
        selected = selected.len(),
        "Records selected for analysis window"
    );
    Ok(selected)
}

fn chart_target(chart: &ChartOpts, stem: &str) -> (PathBuf, ImageFormat) {
    let format = if chart.svg {
        ImageFormat::Svg
    } else {
        ImageFormat::Png
    };
    let path = chart
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("{stem}.{}", format.extension())));
    (path, format)
}
