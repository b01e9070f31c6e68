//! Date-range and day-type filters over loaded journey records.
//!
//! Every filter is a single order-preserving pass and an empty result is
//! not an error.

use chrono::NaiveDate;

use crate::dataset::JourneyRecord;

/// Keeps records whose calendar date falls inside `[start, end]`.
///
/// Both bounds are inclusive; `end` covers its entire day, so an hourly
/// record stamped 23:00 on the end date is kept.
pub fn in_range(records: &[JourneyRecord], start: NaiveDate, end: NaiveDate) -> Vec<JourneyRecord> {
    records
        .iter()
        .filter(|r| {
            let date = r.timestamp.date();
            start <= date && date <= end
        })
        .cloned()
        .collect()
}

/// Keeps records on working days: not a weekend and not a holiday.
pub fn weekday_non_holiday(records: &[JourneyRecord]) -> Vec<JourneyRecord> {
    records
        .iter()
        .filter(|r| !r.is_weekend && !r.is_holiday)
        .cloned()
        .collect()
}

/// Keeps records whose hour of day equals `hour`.
pub fn at_hour(records: &[JourneyRecord], hour: u32) -> Vec<JourneyRecord> {
    records
        .iter()
        .filter(|r| r.hour_of_day() == hour)
        .cloned()
        .collect()
}
