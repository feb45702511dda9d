pub mod clahe;
pub mod median;
pub mod morphology;
pub mod stretch;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{
    CLAHE_CLIP_MAX, CLAHE_CLIP_MIN, MEDIAN_KERNEL_MAX, MEDIAN_KERNEL_MIN, TOPHAT_KERNEL_MAX,
    TOPHAT_KERNEL_MIN,
};
use crate::error::{Result, SpotError};
use crate::frame::{GrayFrame, RawFrame};

/// Parameters for the preprocessing chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreprocessConfig {
    /// Invert intensities after normalization. Used for materials where spots
    /// appear dark against a bright background.
    pub invert: bool,
    /// CLAHE clip limit, 0.5..=10.
    pub clahe_clip: f32,
    /// Structuring element size for top-hat background suppression, 3..=80.
    pub tophat_kernel: usize,
    /// Median blur aperture, odd, 1..=31.
    pub median_kernel: usize,
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            invert: false,
            clahe_clip: 2.0,
            tophat_kernel: 15,
            median_kernel: 3,
        }
    }
}

impl PreprocessConfig {
    /// Range-check all fields and return the normalized copy used for
    /// processing. An even `median_kernel` is coerced down to the nearest odd
    /// value (a documented recovery, not an error); everything else
    /// out-of-range is rejected.
    pub fn validated(&self) -> Result<Self> {
        if !(CLAHE_CLIP_MIN..=CLAHE_CLIP_MAX).contains(&self.clahe_clip) {
            return Err(SpotError::ParamOutOfRange {
                name: "clahe_clip",
                value: self.clahe_clip as f64,
                min: CLAHE_CLIP_MIN as f64,
                max: CLAHE_CLIP_MAX as f64,
            });
        }
        if !(TOPHAT_KERNEL_MIN..=TOPHAT_KERNEL_MAX).contains(&self.tophat_kernel) {
            return Err(SpotError::ParamOutOfRange {
                name: "tophat_kernel",
                value: self.tophat_kernel as f64,
                min: TOPHAT_KERNEL_MIN as f64,
                max: TOPHAT_KERNEL_MAX as f64,
            });
        }
        if !(MEDIAN_KERNEL_MIN..=MEDIAN_KERNEL_MAX).contains(&self.median_kernel) {
            return Err(SpotError::ParamOutOfRange {
                name: "median_kernel",
                value: self.median_kernel as f64,
                min: MEDIAN_KERNEL_MIN as f64,
                max: MEDIAN_KERNEL_MAX as f64,
            });
        }
        let mut config = self.clone();
        if config.median_kernel % 2 == 0 {
            config.median_kernel -= 1;
        }
        Ok(config)
    }
}

/// Normalize a raw frame into a detector-ready 8-bit frame.
///
/// Stage order is fixed: min-max stretch, optional inversion, CLAHE, top-hat
/// background suppression, median blur. Each stage output stays in [0, 255].
/// The output has the same dimensions as the input.
pub fn preprocess(frame: &RawFrame, config: &PreprocessConfig) -> Result<GrayFrame> {
    let config = config.validated()?;
    if frame.is_empty() {
        return Err(SpotError::EmptyImage);
    }

    let mut img = stretch::normalize_to_u8(&frame.data);
    if config.invert {
        stretch::invert_in_place(&mut img);
    }
    debug!(clip = config.clahe_clip, "equalizing");
    let img = clahe::clahe(&img, config.clahe_clip);
    debug!(kernel = config.tophat_kernel, "suppressing background");
    let img = morphology::black_hat(&img, config.tophat_kernel);
    let img = median::median_blur(&img, config.median_kernel);
    Ok(GrayFrame::new(img))
}
