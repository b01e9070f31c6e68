//! Output formatting and persistence for analysis results.
//!
//! Supports JSON echo of parsed options and LaTeX table emission.

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::analyzers::seasonal::{SEASON_LABELS, SeasonTable, WEATHER_LABELS};
use std::fs;
use std::path::Path;

/// Logs a value as pretty-printed JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Renders the seasonal mean table as a booktabs `tabular` block.
///
/// Empty groups render as `--` so the table stays compilable.
pub fn latex_table(table: &SeasonTable) -> String {
    let mut out = String::from("\\begin{tabular}{lrrrr}\n\\toprule\n");

    for label in SEASON_LABELS {
        out.push_str(&format!(" & {label}"));
    }
    out.push_str(" \\\\\n\\midrule\n");

    for (row, weather) in WEATHER_LABELS.iter().enumerate() {
        out.push_str(weather);
        for col in 0..SEASON_LABELS.len() {
            match table.display_cell(row, col) {
                Some(value) => out.push_str(&format!(" & {value}")),
                None => out.push_str(" & --"),
            }
        }
        out.push_str(" \\\\\n");
    }

    out.push_str("\\bottomrule\n\\end{tabular}\n");
    out
}

/// Writes the rendered LaTeX table to `path`.
pub fn write_latex_table(path: &Path, table: &SeasonTable) -> Result<()> {
    debug!(path = %path.display(), "Writing LaTeX table");
    fs::write(path, latex_table(table))?;
    Ok(())
}
