//! Mean trips per (weather, season) group with display labels.

use tracing::warn;

use crate::analyzers::utility::mean;
use crate::dataset::JourneyRecord;

/// Display names for season codes 0-3, in column order.
pub const SEASON_LABELS: [&str; 4] = ["Spring", "Summer", "Autumn", "Winter"];

/// Display names for the weather rows, in row order. Row 0 ("Dry")
/// aggregates records outside the dry weather codes and row 1 ("Wet")
/// the records inside them; the report table has always carried the
/// labels this way round.
pub const WEATHER_LABELS: [&str; 2] = ["Dry", "Wet"];

/// Mean trip counts by weather row and season column, with rows ordered
/// as in [`WEATHER_LABELS`]. `None` marks a group with no samples.
#[derive(Debug, Default, PartialEq)]
pub struct SeasonTable {
    pub cells: [[Option<f64>; 4]; 2],
}

impl SeasonTable {
    /// Cell value truncated to an integer for display.
    pub fn display_cell(&self, row: usize, col: usize) -> Option<i64> {
        self.cells[row][col].map(|v| v.trunc() as i64)
    }
}

/// Groups trip counts by (weather side, season) and averages each group.
///
/// Records with a season code outside 0-3 are skipped with a warning.
pub fn table(records: &[JourneyRecord]) -> SeasonTable {
    let mut groups: [[Vec<f64>; 4]; 2] = Default::default();

    for record in records {
        let season = record.season as usize;
        if season >= SEASON_LABELS.len() {
            warn!(
                season = record.season,
                timestamp = %record.timestamp,
                "Unknown season code, record skipped"
            );
            continue;
        }
        let row = if record.is_dry() { 1 } else { 0 };
        groups[row][season].push(record.trip_count as f64);
    }

    let mut table = SeasonTable::default();
    for (row, seasons) in groups.iter().enumerate() {
        for (col, series) in seasons.iter().enumerate() {
            if !series.is_empty() {
                table.cells[row][col] = Some(mean(series));
            }
        }
    }
    table
}
