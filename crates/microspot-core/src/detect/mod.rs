pub mod binary;
pub mod contour;
pub mod geometry;

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::{ELLIPSE_MIN_ASPECT, ELLIPSE_MIN_POINTS, MIN_CONTOUR_AREA};
use crate::error::{Result, SpotError};
use crate::frame::GrayFrame;

/// Parameters for one detection pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectionConfig {
    /// Binarization cutoff: samples >= threshold become foreground.
    pub threshold: u8,
    /// Closing passes applied to the binary image before contour extraction.
    pub morph_iterations: usize,
    /// Diameter acceptance window in pixels.
    pub min_diameter: f64,
    pub max_diameter: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            threshold: 120,
            morph_iterations: 2,
            min_diameter: 5.0,
            max_diameter: 200.0,
        }
    }
}

impl DetectionConfig {
    /// Reject logically inconsistent parameters before any pixel work.
    pub fn validate(&self) -> Result<()> {
        if self.min_diameter <= 0.0 {
            return Err(SpotError::ParamOutOfRange {
                name: "min_diameter",
                value: self.min_diameter,
                min: f64::MIN_POSITIVE,
                max: f64::MAX,
            });
        }
        if self.max_diameter <= self.min_diameter {
            return Err(SpotError::DiameterRange {
                min: self.min_diameter,
                max: self.max_diameter,
            });
        }
        Ok(())
    }
}

/// A detected spot. Value object: created here, consumed read-only downstream.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Blob {
    /// Center in pixel coordinates (x, y).
    pub center: (f64, f64),
    /// Characteristic diameter in pixels, always > 0.
    pub diameter_px: f64,
    /// Fitted shape; an ellipse only when meaningfully non-circular.
    pub shape: BlobShape,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BlobShape {
    Circle,
    Ellipse {
        major_axis: f64,
        minor_axis: f64,
        /// Major-axis orientation in degrees, [0, 180).
        angle_deg: f64,
    },
}

/// Detect roughly circular bright regions in an 8-bit frame.
///
/// Binarize at the threshold, close the binary image `morph_iterations`
/// times, extract outer contours, fit geometry, and keep blobs whose
/// diameter falls inside the configured window. Zero foreground is an empty
/// result, not an error. Output is in contour traversal order, unsorted.
pub fn detect(frame: &GrayFrame, config: &DetectionConfig) -> Result<Vec<Blob>> {
    config.validate()?;

    let foreground = binarize(&frame.data, config.threshold);
    let closed = binary::closing(&foreground, config.morph_iterations);

    let mut blobs = Vec::new();
    for component in contour::find_components(&closed) {
        if component.area < MIN_CONTOUR_AREA {
            continue;
        }
        let Some((circle_center, radius)) = geometry::min_enclosing_circle(&component.boundary)
        else {
            continue;
        };
        // A contour degenerated to a point never becomes a zero-diameter blob.
        if radius <= 0.0 {
            continue;
        }

        let ellipse = if component.boundary.len() >= ELLIPSE_MIN_POINTS {
            geometry::moments_ellipse(&component.moments)
                .filter(|e| e.minor_axis > 0.0 && e.major_axis / e.minor_axis >= ELLIPSE_MIN_ASPECT)
        } else {
            None
        };

        let blob = match ellipse {
            Some(e) => Blob {
                center: e.center,
                diameter_px: (e.major_axis + e.minor_axis) / 2.0,
                shape: BlobShape::Ellipse {
                    major_axis: e.major_axis,
                    minor_axis: e.minor_axis,
                    angle_deg: e.angle_deg,
                },
            },
            None => Blob {
                center: circle_center,
                diameter_px: 2.0 * radius,
                shape: BlobShape::Circle,
            },
        };

        if blob.diameter_px < config.min_diameter || blob.diameter_px > config.max_diameter {
            continue;
        }
        blobs.push(blob);
    }

    debug!(
        count = blobs.len(),
        threshold = config.threshold,
        "detection pass complete"
    );
    Ok(blobs)
}

fn binarize(data: &Array2<u8>, threshold: u8) -> Array2<u8> {
    data.mapv(|v| if v >= threshold { 255 } else { 0 })
}
