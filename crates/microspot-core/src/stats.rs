use serde::{Deserialize, Serialize};

use crate::detect::Blob;

/// Summary statistics of blob diameters in micrometers.
///
/// `None` is the explicit undefined marker: all derived fields for an empty
/// list, and the coefficient of variation whenever the mean is zero. No NaN
/// ever leaves this module.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub mean_um: Option<f64>,
    pub std_um: Option<f64>,
    pub cv_percent: Option<f64>,
    pub count: usize,
}

/// Compute mean, population standard deviation, and coefficient of variation
/// of the blob diameters scaled by `pixel_size_um`.
pub fn compute_statistics(blobs: &[Blob], pixel_size_um: f64) -> StatisticsResult {
    let count = blobs.len();
    if count == 0 {
        return StatisticsResult {
            mean_um: None,
            std_um: None,
            cv_percent: None,
            count: 0,
        };
    }

    let diameters: Vec<f64> = blobs
        .iter()
        .map(|b| b.diameter_px * pixel_size_um)
        .collect();
    let mean = diameters.iter().sum::<f64>() / count as f64;
    let variance = diameters.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / count as f64;
    let std = variance.sqrt();
    let cv_percent = if mean > 0.0 {
        Some(std / mean * 100.0)
    } else {
        None
    };

    StatisticsResult {
        mean_um: Some(mean),
        std_um: Some(std),
        cv_percent,
        count,
    }
}
