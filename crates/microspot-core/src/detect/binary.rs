use ndarray::Array2;

/// 3x3 cross structuring element, the shape OpenCV produces for an
/// elliptical element of size 3.
const CROSS: [(isize, isize); 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

fn apply<F>(data: &Array2<u8>, init: u8, op: F) -> Array2<u8>
where
    F: Fn(u8, u8) -> u8,
{
    let (h, w) = data.dim();
    let mut out = Array2::from_elem((h, w), init);
    for y in 0..h {
        for x in 0..w {
            let mut acc = init;
            for &(dy, dx) in CROSS.iter() {
                let sy = (y as isize + dy).clamp(0, h as isize - 1) as usize;
                let sx = (x as isize + dx).clamp(0, w as isize - 1) as usize;
                acc = op(acc, data[[sy, sx]]);
            }
            out[[y, x]] = acc;
        }
    }
    out
}

/// Binary closing: `iterations` dilation passes followed by the same number
/// of erosion passes, merging fragmented foreground regions and filling
/// small holes. Zero iterations is the identity.
pub fn closing(data: &Array2<u8>, iterations: usize) -> Array2<u8> {
    if iterations == 0 {
        return data.clone();
    }
    let mut img = apply(data, 0, u8::max);
    for _ in 1..iterations {
        img = apply(&img, 0, u8::max);
    }
    for _ in 0..iterations {
        img = apply(&img, 255, u8::min);
    }
    img
}
