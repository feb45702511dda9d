use serde::Serialize;
use tracing::info;

use crate::consts::DEFAULT_SEARCH_ITERATIONS;
use crate::detect::{detect, Blob, DetectionConfig};
use crate::error::{Result, SpotError};
use crate::filter::filter_blobs;
use crate::frame::GrayFrame;

/// Outcome classification for one search iteration, passed to the observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchStatus {
    /// The iteration hit the target count exactly.
    Matched,
    /// The iteration became the new best candidate.
    NewBest,
    /// The iteration was recorded but did not improve on the best candidate.
    Discarded,
}

impl std::fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matched => write!(f, "Exact match"),
            Self::NewBest => write!(f, "New best"),
            Self::Discarded => write!(f, "Discarded"),
        }
    }
}

/// Per-iteration observer for the threshold search.
///
/// The default implementation is a no-op, so embedders only override what
/// they need. Returning an error aborts the search; the optimizer propagates
/// it to the caller unchanged.
pub trait SearchObserver {
    fn on_iteration(&self, _threshold: u8, _count: usize, _status: SearchStatus) -> Result<()> {
        Ok(())
    }
}

/// No-op observer used when the caller supplies none.
pub struct NoOpObserver;
impl SearchObserver for NoOpObserver {}

/// One recorded search iteration.
#[derive(Clone, Debug, Serialize)]
pub struct SearchRecord {
    pub threshold: u8,
    pub count: usize,
    pub blobs: Vec<Blob>,
}

/// Final state of a threshold search. Immutable after return.
#[derive(Clone, Debug, Serialize)]
pub struct OptimizationResult {
    pub threshold: u8,
    pub blob_count: usize,
    pub blobs: Vec<Blob>,
    /// Every iteration in execution order, one entry per detection pass.
    pub history: Vec<SearchRecord>,
    pub exact_match: bool,
}

/// [`optimize_threshold_observed`] with the default iteration cap and no
/// observer.
pub fn optimize_threshold(
    frame: &GrayFrame,
    target_count: usize,
    template: &DetectionConfig,
    max_blobs: usize,
) -> Result<OptimizationResult> {
    optimize_threshold_observed(
        frame,
        target_count,
        template,
        max_blobs,
        DEFAULT_SEARCH_ITERATIONS,
        &NoOpObserver,
    )
}

/// Binary-search the detection threshold toward a target blob count.
///
/// The frame must already be preprocessed; only the threshold varies between
/// iterations. Assumes the blob count decreases as the threshold rises (more
/// foreground at lower cutoffs). Merges and splits near contour boundaries
/// can break strict monotonicity locally, so the search keeps a best-so-far
/// fallback (smallest count distance, ties toward the higher threshold) and
/// returns it when no threshold hits the target exactly. Known limitation:
/// the bound-adjustment direction is fixed to this assumption and is not
/// inferred from the image.
pub fn optimize_threshold_observed(
    frame: &GrayFrame,
    target_count: usize,
    template: &DetectionConfig,
    max_blobs: usize,
    max_iterations: usize,
    observer: &dyn SearchObserver,
) -> Result<OptimizationResult> {
    template.validate()?;
    if max_iterations == 0 {
        return Err(SpotError::InvalidParam {
            name: "max_iterations",
            reason: "at least one search iteration is required".into(),
        });
    }

    let mut low: i32 = 0;
    let mut high: i32 = 255;
    let mut best: Option<usize> = None;
    let mut history: Vec<SearchRecord> = Vec::new();
    let mut exact_match = false;

    while history.len() < max_iterations && low <= high {
        let mid = ((low + high) / 2) as u8;
        let mut config = template.clone();
        config.threshold = mid;

        let blobs = filter_blobs(detect(frame, &config)?, max_blobs);
        let count = blobs.len();
        history.push(SearchRecord {
            threshold: mid,
            count,
            blobs,
        });
        let index = history.len() - 1;

        let distance = count.abs_diff(target_count);
        let improved = match best {
            None => true,
            Some(b) => {
                let best_distance = history[b].count.abs_diff(target_count);
                distance < best_distance
                    || (distance == best_distance && mid > history[b].threshold)
            }
        };
        if improved {
            best = Some(index);
        }

        let status = if count == target_count {
            SearchStatus::Matched
        } else if improved {
            SearchStatus::NewBest
        } else {
            SearchStatus::Discarded
        };
        info!(
            iteration = history.len(),
            threshold = mid,
            count,
            target = target_count,
            %status,
            "search step"
        );
        observer.on_iteration(mid, count, status)?;

        if count == target_count {
            exact_match = true;
            break;
        }
        if count > target_count {
            // Too many blobs: tighten by raising the threshold.
            low = mid as i32 + 1;
        } else {
            high = mid as i32 - 1;
        }
    }

    let Some(best_index) = best else {
        // Unreachable with max_iterations >= 1, kept as an honest failure.
        return Err(SpotError::InvalidParam {
            name: "max_iterations",
            reason: "search executed no iterations".into(),
        });
    };
    let record = history[best_index].clone();
    if !exact_match {
        info!(
            threshold = record.threshold,
            count = record.count,
            "search exhausted, returning best candidate"
        );
    }
    Ok(OptimizationResult {
        threshold: record.threshold,
        blob_count: record.count,
        blobs: record.blobs,
        history,
        exact_match,
    })
}
