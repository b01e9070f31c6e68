//! Ordinary least-squares fit of trip counts against temperature.

use crate::dataset::JourneyRecord;

/// A fitted line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Extracts (feels-like temperature, trip count) pairs in record order.
pub fn points(records: &[JourneyRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .map(|r| (r.feels_like, r.trip_count as f64))
        .collect()
}

/// Least-squares fit over the given points.
///
/// Returns `None` for fewer than two points or when all x values are equal,
/// where the slope is undefined.
pub fn fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }

    let n = points.len() as f64;
    let mean_x = points.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = points.iter().map(|p| p.1).sum::<f64>() / n;

    let mut sxx = 0.0;
    let mut sxy = 0.0;
    for &(x, y) in points {
        sxx += (x - mean_x) * (x - mean_x);
        sxy += (x - mean_x) * (y - mean_y);
    }

    if sxx == 0.0 {
        return None;
    }

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}
