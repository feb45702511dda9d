use serde::{Deserialize, Serialize};

use crate::detect::DetectionConfig;
use crate::preprocess::PreprocessConfig;

/// Preprocessing preset for a sample material, persisted by outer layers.
///
/// Field set is the on-disk preset format verbatim, so presets round-trip
/// without translation. Unknown fields are rejected at the boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaterialPreset {
    pub clahe_clip: f32,
    pub tophat_kernel: usize,
    pub median_kernel: usize,
    pub invert: bool,
    /// Consumed by outer cleanup layers; carried here so presets round-trip.
    pub scratch_removal: bool,
}

impl MaterialPreset {
    /// The preprocessing view of this preset.
    pub fn preprocess_config(&self) -> PreprocessConfig {
        PreprocessConfig {
            invert: self.invert,
            clahe_clip: self.clahe_clip,
            tophat_kernel: self.tophat_kernel,
            median_kernel: self.median_kernel,
        }
    }
}

/// Built-in sample materials with tuned presets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Material {
    Glass,
    Aluminum,
}

impl Material {
    pub fn preset(self) -> MaterialPreset {
        match self {
            Self::Glass => MaterialPreset {
                clahe_clip: 2.0,
                tophat_kernel: 15,
                median_kernel: 3,
                invert: false,
                scratch_removal: false,
            },
            Self::Aluminum => MaterialPreset {
                clahe_clip: 2.0,
                tophat_kernel: 25,
                median_kernel: 3,
                invert: true,
                scratch_removal: true,
            },
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Glass => write!(f, "glass"),
            Self::Aluminum => write!(f, "aluminum"),
        }
    }
}

/// Flat parameter record as persisted by tuning front-ends.
///
/// Covers both processing stages in one bag; [`AnalysisParams::preprocess_config`]
/// and [`AnalysisParams::detection_config`] split it without changing any value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisParams {
    pub clahe_clip: f32,
    pub tophat_kernel: usize,
    pub median_kernel: usize,
    pub threshold: u8,
    pub morph_iterations: usize,
    pub min_diameter: f64,
    pub max_diameter: f64,
}

impl Default for AnalysisParams {
    fn default() -> Self {
        Self {
            clahe_clip: 2.0,
            tophat_kernel: 15,
            median_kernel: 3,
            threshold: 120,
            morph_iterations: 2,
            min_diameter: 5.0,
            max_diameter: 200.0,
        }
    }
}

impl AnalysisParams {
    /// The preprocessing view. Inversion is a material property, not part of
    /// the flat record, so the caller supplies it.
    pub fn preprocess_config(&self, invert: bool) -> PreprocessConfig {
        PreprocessConfig {
            invert,
            clahe_clip: self.clahe_clip,
            tophat_kernel: self.tophat_kernel,
            median_kernel: self.median_kernel,
        }
    }

    /// The detection view.
    pub fn detection_config(&self) -> DetectionConfig {
        DetectionConfig {
            threshold: self.threshold,
            morph_iterations: self.morph_iterations,
            min_diameter: self.min_diameter,
            max_diameter: self.max_diameter,
        }
    }
}
