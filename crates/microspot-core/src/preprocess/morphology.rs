use ndarray::Array2;

/// Offsets of an elliptical structuring element inscribed in a `size` x
/// `size` box, relative to the anchor at `size / 2`.
///
/// Matches the shape of OpenCV's `MORPH_ELLIPSE`: size 3 degenerates to a
/// cross, larger sizes approach a disk.
pub fn ellipse_offsets(size: usize) -> Vec<(isize, isize)> {
    if size <= 1 {
        return vec![(0, 0)];
    }
    let r = (size as f64 - 1.0) / 2.0;
    let inv_r2 = 1.0 / (r * r);
    let anchor = (size / 2) as isize;

    let mut offsets = Vec::new();
    for dy in 0..size {
        for dx in 0..size {
            let y = dy as f64 - r;
            let x = dx as f64 - r;
            if (x * x + y * y) * inv_r2 <= 1.0 + 1e-9 {
                offsets.push((dy as isize - anchor, dx as isize - anchor));
            }
        }
    }
    offsets
}

fn apply<F>(data: &Array2<u8>, offsets: &[(isize, isize)], init: u8, op: F) -> Array2<u8>
where
    F: Fn(u8, u8) -> u8,
{
    let (h, w) = data.dim();
    let mut out = Array2::from_elem((h, w), init);
    for y in 0..h {
        for x in 0..w {
            let mut acc = init;
            for &(dy, dx) in offsets {
                // Replicated border: out-of-bounds taps clamp to the edge.
                let sy = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                let sx = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                acc = op(acc, data[[sy, sx]]);
            }
            out[[y, x]] = acc;
        }
    }
    out
}

/// Grayscale dilation: maximum over the structuring element.
pub fn dilate(data: &Array2<u8>, offsets: &[(isize, isize)]) -> Array2<u8> {
    apply(data, offsets, 0, u8::max)
}

/// Grayscale erosion: minimum over the structuring element.
pub fn erode(data: &Array2<u8>, offsets: &[(isize, isize)]) -> Array2<u8> {
    apply(data, offsets, 255, u8::min)
}

/// Grayscale closing: dilation followed by erosion.
pub fn closing(data: &Array2<u8>, offsets: &[(isize, isize)]) -> Array2<u8> {
    erode(&dilate(data, offsets), offsets)
}

/// Black-hat filtering: closing minus the input, clamped at zero.
///
/// Isolates compact features darker than their morphologically estimated
/// background; slowly varying background cancels out.
pub fn black_hat(data: &Array2<u8>, kernel: usize) -> Array2<u8> {
    let offsets = ellipse_offsets(kernel);
    let closed = closing(data, &offsets);

    let (h, w) = data.dim();
    let mut out = Array2::<u8>::zeros((h, w));
    for y in 0..h {
        for x in 0..w {
            out[[y, x]] = closed[[y, x]].saturating_sub(data[[y, x]]);
        }
    }
    out
}
