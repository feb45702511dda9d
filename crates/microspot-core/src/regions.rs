use ndarray::s;

use crate::frame::GrayFrame;

/// Split a frame into labeled vertical strips, one per degree step.
///
/// Labels run from `deg_start` down to `deg_end` inclusive; strip `i` covers
/// columns `[i * width, (i + 1) * width)`. The last strip is clipped to the
/// frame; strips entirely outside it are omitted. A zero `width` or an
/// inverted degree range yields an empty result.
pub fn split_columns(
    frame: &GrayFrame,
    deg_start: i32,
    deg_end: i32,
    width: usize,
) -> Vec<(i32, GrayFrame)> {
    let mut strips = Vec::new();
    if width == 0 || deg_end > deg_start {
        return strips;
    }

    let total = frame.width();
    for (i, deg) in (deg_end..=deg_start).rev().enumerate() {
        let x0 = i * width;
        if x0 >= total {
            break;
        }
        let x1 = (x0 + width).min(total);
        let strip = frame.data.slice(s![.., x0..x1]).to_owned();
        strips.push((deg, GrayFrame::new(strip)));
    }
    strips
}
