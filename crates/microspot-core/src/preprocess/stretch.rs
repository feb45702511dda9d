use ndarray::Array2;

use crate::consts::EPSILON;

/// Min-max stretch to the full 8-bit range using the frame's own dynamic
/// range, independent of the source bit depth.
///
/// A flat frame (zero dynamic range) maps to all zeros; non-finite samples
/// are ignored when estimating the range and clamp like any other value.
pub fn normalize_to_u8(data: &Array2<f32>) -> Array2<u8> {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for &v in data.iter() {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }

    let range = max - min;
    if !range.is_finite() || range < EPSILON {
        return Array2::zeros(data.raw_dim());
    }

    data.mapv(|v| (((v - min) / range * 255.0).clamp(0.0, 255.0)).round() as u8)
}

/// Per-sample inversion: 255 - value.
pub fn invert_in_place(data: &mut Array2<u8>) {
    data.mapv_inplace(|v| 255 - v);
}
