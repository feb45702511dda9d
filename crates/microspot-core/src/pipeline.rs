use tracing::info;

use crate::detect::{detect, Blob, DetectionConfig};
use crate::error::Result;
use crate::filter::filter_blobs;
use crate::frame::RawFrame;
use crate::preprocess::{preprocess, PreprocessConfig};
use crate::stats::{compute_statistics, StatisticsResult};

/// Result of one analysis session.
#[derive(Clone, Debug)]
pub struct AnalysisReport {
    /// The kept blobs, largest first.
    pub blobs: Vec<Blob>,
    pub stats: StatisticsResult,
}

/// One-call analysis session: preprocess, detect, keep the largest spots,
/// summarize.
///
/// `pixel_size_um` is always an explicit argument; the core holds no
/// process-wide calibration state.
pub fn analyze(
    raw: &RawFrame,
    preset: &PreprocessConfig,
    detection: &DetectionConfig,
    max_blobs: usize,
    pixel_size_um: f64,
) -> Result<AnalysisReport> {
    let frame = preprocess(raw, preset)?;
    info!(
        width = frame.width(),
        height = frame.height(),
        "preprocessing complete"
    );

    let blobs = filter_blobs(detect(&frame, detection)?, max_blobs);
    info!(count = blobs.len(), "detection complete");

    let stats = compute_statistics(&blobs, pixel_size_um);
    Ok(AnalysisReport { blobs, stats })
}
