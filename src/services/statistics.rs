//! Distribution summaries for Monte Carlo result vectors.

use serde::Serialize;

/// Summary of one simulated metric across all iterations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSummary {
    pub mean: f64,
    pub median: f64,
    /// Population standard deviation; zero for a single sample.
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Tail percentiles, absent below [`PERCENTILE_MIN_SAMPLES`] samples.
    pub p5: Option<f64>,
    pub p95: Option<f64>,
}

/// Minimum sample count before tail percentiles are reported.
pub const PERCENTILE_MIN_SAMPLES: usize = 5;

pub fn summarize(values: &[f64]) -> MetricSummary {
    if values.is_empty() {
        return MetricSummary {
            mean: 0.0,
            median: 0.0,
            std_dev: 0.0,
            min: 0.0,
            max: 0.0,
            p5: None,
            p95: None,
        };
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mean = sorted.iter().sum::<f64>() / sorted.len() as f64;
    let std_dev = if sorted.len() > 1 {
        let variance =
            sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / sorted.len() as f64;
        variance.sqrt()
    } else {
        0.0
    };
    let (p5, p95) = if sorted.len() >= PERCENTILE_MIN_SAMPLES {
        (
            Some(percentile_sorted(&sorted, 5.0)),
            Some(percentile_sorted(&sorted, 95.0)),
        )
    } else {
        (None, None)
    };

    MetricSummary {
        mean,
        median: median_sorted(&sorted),
        std_dev,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        p5,
        p95,
    }
}

/// Median of an ascending slice; averages the middle pair for even counts.
fn median_sorted(sorted: &[f64]) -> f64 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Percentile of an ascending slice by rounding the fractional position
/// within `[0, len - 1]` to the nearest index. Percentiles outside
/// `[0, 100]` clamp to the ends; an empty slice yields zero.
pub fn percentile_sorted(sorted: &[f64], percentile: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if percentile <= 0.0 {
        return sorted[0];
    }
    if percentile >= 100.0 {
        return sorted[sorted.len() - 1];
    }
    let position = percentile / 100.0 * (sorted.len() - 1) as f64;
    sorted[position.round() as usize]
}
