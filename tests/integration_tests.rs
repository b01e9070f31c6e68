use chrono::NaiveDate;
use cycle_trends::analyzers::{hourly, regression, seasonal};
use cycle_trends::plot::{self, ImageFormat};
use cycle_trends::{dataset, filters, output};
use std::env;
use std::fs;
use std::path::PathBuf;

const FIXTURE: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/journeys_two_days.csv"
);

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn temp_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}/{}", env::temp_dir().display(), name))
}

#[test]
fn test_full_table_pipeline() {
    let records = dataset::load(FIXTURE).expect("Failed to load fixture");
    assert_eq!(records.len(), 48);

    // Filtering by the fixture's own date span keeps everything.
    let selected = filters::in_range(&records, date("2015-01-05"), date("2015-01-10"));
    assert_eq!(selected.len(), 48);

    // 24 weekday records minus the one flagged holiday hour.
    let working = filters::weekday_non_holiday(&selected);
    assert_eq!(working.len(), 23);

    let morning = filters::at_hour(&working, 8);
    assert_eq!(morning.len(), 1);
    assert_eq!(morning[0].trip_count, 180);
    assert!(morning[0].is_dry());

    // Dry-weather groups print under the "Wet" label.
    let table = seasonal::table(&morning);
    assert_eq!(table.display_cell(1, 3), Some(180));
    assert_eq!(table.display_cell(0, 3), None);

    let out = temp_path("cycle_trends_integration_table.tex");
    let _ = fs::remove_file(&out);
    output::write_latex_table(&out, &table).unwrap();
    let rendered = fs::read_to_string(&out).unwrap();
    assert!(rendered.contains("Wet & -- & -- & -- & 180 \\\\"));
    fs::remove_file(&out).unwrap();
}

#[test]
fn test_full_profile_pipeline() {
    let records = dataset::load(FIXTURE).unwrap();
    let selected = filters::in_range(&records, date("2015-01-05"), date("2015-01-10"));
    let working = filters::weekday_non_holiday(&selected);

    let profile = hourly::profile(&working);
    // Dry hours 0-11 minus the holiday hour at 03:00; wet hours 12-23.
    assert_eq!(profile.dry.len(), 11);
    assert_eq!(profile.wet.len(), 12);
    assert!(profile.dry.iter().all(|p| p.samples == 1));
    assert!(!profile.dry.iter().any(|p| p.hour == 3));

    let out = temp_path("cycle_trends_integration_profile.svg");
    let _ = fs::remove_file(&out);
    plot::render_hourly_profile(&out, ImageFormat::Svg, &profile).unwrap();
    assert!(out.exists());
    fs::remove_file(&out).unwrap();
}

#[test]
fn test_full_scatter_pipeline() {
    let records = dataset::load(FIXTURE).unwrap();
    let selected = filters::in_range(&records, date("2015-01-05"), date("2015-01-10"));
    let working = filters::weekday_non_holiday(&selected);
    let morning = filters::at_hour(&working, 8);
    let dry: Vec<_> = morning.into_iter().filter(|r| r.is_dry()).collect();

    let points = regression::points(&dry);
    assert_eq!(points, vec![(6.0, 180.0)]);

    // A single point has no defined fit; rendering still succeeds.
    let fit = regression::fit(&points);
    assert!(fit.is_none());

    let out = temp_path("cycle_trends_integration_scatter.svg");
    let _ = fs::remove_file(&out);
    plot::render_temp_scatter(&out, ImageFormat::Svg, &points, fit.as_ref()).unwrap();
    assert!(out.exists());
    fs::remove_file(&out).unwrap();
}

#[test]
fn test_range_narrows_to_single_day() {
    let records = dataset::load(FIXTURE).unwrap();
    let monday = filters::in_range(&records, date("2015-01-05"), date("2015-01-05"));
    assert_eq!(monday.len(), 24);
    assert!(monday.iter().all(|r| !r.is_weekend));

    let saturday = filters::in_range(&records, date("2015-01-10"), date("2015-01-10"));
    assert_eq!(saturday.len(), 24);
    assert!(saturday.iter().all(|r| r.is_weekend));
}
