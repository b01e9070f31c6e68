//! Average trips per hour of day, split by dry and wet weather.

use crate::analyzers::utility::{ci95_half_width, mean};
use crate::dataset::JourneyRecord;

/// Mean trip count for one hour of day on one weather side, with its 95%
/// confidence interval.
#[derive(Debug, Clone)]
pub struct HourlyPoint {
    pub hour: u32,
    pub mean_trips: f64,
    pub ci_low: f64,
    pub ci_high: f64,
    pub samples: usize,
}

/// Per-hour mean profile for dry and wet conditions. Hours with no samples
/// on a side are omitted from that side's series.
#[derive(Debug, Default)]
pub struct HourlyProfile {
    pub dry: Vec<HourlyPoint>,
    pub wet: Vec<HourlyPoint>,
}

impl HourlyProfile {
    /// Largest upper confidence bound across both sides, for axis scaling.
    pub fn max_upper_bound(&self) -> f64 {
        self.dry
            .iter()
            .chain(self.wet.iter())
            .map(|p| p.ci_high)
            .fold(0.0, f64::max)
    }
}

/// Groups trip counts by hour of day and weather side.
pub fn profile(records: &[JourneyRecord]) -> HourlyProfile {
    let mut by_hour: Vec<(Vec<f64>, Vec<f64>)> = vec![(Vec::new(), Vec::new()); 24];

    for record in records {
        let slot = &mut by_hour[record.hour_of_day() as usize];
        let series = if record.is_dry() {
            &mut slot.0
        } else {
            &mut slot.1
        };
        series.push(record.trip_count as f64);
    }

    let mut profile = HourlyProfile::default();
    for (hour, (dry, wet)) in by_hour.into_iter().enumerate() {
        if let Some(point) = point_for(hour as u32, &dry) {
            profile.dry.push(point);
        }
        if let Some(point) = point_for(hour as u32, &wet) {
            profile.wet.push(point);
        }
    }
    profile
}

fn point_for(hour: u32, series: &[f64]) -> Option<HourlyPoint> {
    if series.is_empty() {
        return None;
    }
    let mean_trips = mean(series);
    let half_width = ci95_half_width(series, mean_trips);
    Some(HourlyPoint {
        hour,
        mean_trips,
        ci_low: mean_trips - half_width,
        ci_high: mean_trips + half_width,
        samples: series.len(),
    })
}
