//! Loading of hourly journey records from the raw CSV export.
//!
//! The export stores flags and small categorical codes as floats
//! (`0.0`, `1.0`, `3.0`), so integer and boolean columns accept both
//! integer and float-formatted text.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, de};
use tracing::{debug, warn};

/// Timestamp layout used by the raw export, e.g. `2015-01-04 13:00:00`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Weather codes treated as non-precipitating conditions.
pub const DRY_WEATHER_CODES: [u8; 4] = [1, 2, 3, 4];

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("journey data not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("malformed journey data: {0}")]
    Malformed(#[from] csv::Error),
}

/// One hourly bucket of journey counts with its calendar and weather context.
///
/// Columns not listed here (`t2`, `hum`, `wind_speed`) are present in the
/// export but unused and are skipped during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct JourneyRecord {
    #[serde(deserialize_with = "de_timestamp")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "cnt", deserialize_with = "de_count")]
    pub trip_count: u32,
    #[serde(rename = "t1")]
    pub feels_like: f64,
    #[serde(deserialize_with = "de_small_code")]
    pub weather_code: u8,
    #[serde(deserialize_with = "de_flag")]
    pub is_holiday: bool,
    #[serde(deserialize_with = "de_flag")]
    pub is_weekend: bool,
    #[serde(deserialize_with = "de_small_code")]
    pub season: u8,
}

impl JourneyRecord {
    /// Day of week with Monday as 0 and Sunday as 6.
    pub fn day_of_week(&self) -> u32 {
        self.timestamp.weekday().num_days_from_monday()
    }

    /// Hour of day, 0-23.
    pub fn hour_of_day(&self) -> u32 {
        self.timestamp.hour()
    }

    /// True for clear or cloudy conditions without precipitation.
    pub fn is_dry(&self) -> bool {
        DRY_WEATHER_CODES.contains(&self.weather_code)
    }
}

/// Reads every record from the CSV file at `path`, in file order.
///
/// # Errors
///
/// Returns [`DatasetError::NotFound`] if the path does not exist and
/// [`DatasetError::Malformed`] if a required column is missing or a value
/// fails to parse as its declared type. No partial results are returned.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<JourneyRecord>, DatasetError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Loading journey records");

    let mut reader = match csv::Reader::from_path(path) {
        Ok(reader) => reader,
        Err(e) => {
            let not_found = matches!(
                e.kind(),
                csv::ErrorKind::Io(io) if io.kind() == std::io::ErrorKind::NotFound
            );
            return Err(if not_found {
                DatasetError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                DatasetError::Malformed(e)
            });
        }
    };

    let mut records: Vec<JourneyRecord> = Vec::new();
    for row in reader.deserialize() {
        let record: JourneyRecord = row?;
        // Timestamps are the ordering key; the export should already be sorted.
        if let Some(prev) = records.last() {
            if record.timestamp <= prev.timestamp {
                warn!(
                    timestamp = %record.timestamp,
                    "Out-of-order timestamp in source file"
                );
            }
        }
        records.push(record);
    }

    debug!(count = records.len(), "Journey records loaded");
    Ok(records)
}

fn de_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(de::Error::custom)
}

/// Parses integer text or float text with a zero fractional part.
fn parse_whole(s: &str) -> Option<u64> {
    let s = s.trim();
    if let Ok(v) = s.parse::<u64>() {
        return Some(v);
    }
    let f = s.parse::<f64>().ok()?;
    if f.is_finite() && f >= 0.0 && f.fract() == 0.0 {
        Some(f as u64)
    } else {
        None
    }
}

fn de_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_whole(&s)
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| de::Error::custom(format!("invalid trip count: {s:?}")))
}

fn de_small_code<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_whole(&s)
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| de::Error::custom(format!("invalid categorical code: {s:?}")))
}

fn de_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim() {
        "true" | "True" | "TRUE" => Ok(true),
        "false" | "False" | "FALSE" => Ok(false),
        other => match parse_whole(other) {
            Some(0) => Ok(false),
            Some(1) => Ok(true),
            _ => Err(de::Error::custom(format!("invalid boolean flag: {s:?}"))),
        },
    }
}
