use ndarray::Array2;
use num_traits::ToPrimitive;

use crate::error::{Result, SpotError};

/// A raw grayscale frame with arbitrary dynamic range.
///
/// Pixel values are f32 in whatever range the source container produced
/// (8/16/32-bit integer or float). The preprocessor normalizes against the
/// frame's own min/max, so no fixed scale is assumed here.
#[derive(Clone, Debug)]
pub struct RawFrame {
    /// Pixel data, row-major, shape = (height, width).
    pub data: Array2<f32>,
}

impl RawFrame {
    pub fn new(data: Array2<f32>) -> Self {
        Self { data }
    }

    /// Build a frame from a row-major sample buffer of any primitive type.
    ///
    /// Samples that cannot be represented as f32 (e.g. NaN-producing
    /// conversions) become 0.0.
    pub fn from_samples<T: ToPrimitive + Copy>(
        samples: &[T],
        width: usize,
        height: usize,
    ) -> Result<Self> {
        if samples.len() != width * height {
            return Err(SpotError::ShapeMismatch {
                width,
                height,
                actual: samples.len(),
            });
        }
        let data = Array2::from_shape_fn((height, width), |(row, col)| {
            samples[row * width + col].to_f32().unwrap_or(0.0)
        });
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A detector-ready 8-bit grayscale frame, as produced by preprocessing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayFrame {
    /// Pixel data, row-major, shape = (height, width).
    pub data: Array2<u8>,
}

impl GrayFrame {
    pub fn new(data: Array2<u8>) -> Self {
        Self { data }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
