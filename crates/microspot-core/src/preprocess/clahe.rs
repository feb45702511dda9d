use ndarray::Array2;

use crate::consts::{CLAHE_TILE_GRID, HISTOGRAM_BINS};

/// Contrast-limited adaptive histogram equalization over an 8x8 tile grid.
///
/// Follows the OpenCV formulation: each tile's histogram is clipped at
/// `clip_limit * tile_pixels / 256` (minimum 1), the clipped excess is
/// redistributed uniformly, and each pixel is remapped by bilinear
/// interpolation between the CDF lookup tables of the four surrounding tile
/// centers. Flattens large-scale illumination gradients without blowing out
/// local contrast.
pub fn clahe(data: &Array2<u8>, clip_limit: f32) -> Array2<u8> {
    let (h, w) = data.dim();
    if h == 0 || w == 0 {
        return data.clone();
    }

    let tile_h = h.div_ceil(CLAHE_TILE_GRID).max(1);
    let tile_w = w.div_ceil(CLAHE_TILE_GRID).max(1);
    let ty_count = h.div_ceil(tile_h);
    let tx_count = w.div_ceil(tile_w);

    let mut luts = vec![[0u8; HISTOGRAM_BINS]; ty_count * tx_count];
    for ty in 0..ty_count {
        for tx in 0..tx_count {
            let y0 = ty * tile_h;
            let y1 = ((ty + 1) * tile_h).min(h);
            let x0 = tx * tile_w;
            let x1 = ((tx + 1) * tile_w).min(w);

            let mut hist = [0u32; HISTOGRAM_BINS];
            for y in y0..y1 {
                for x in x0..x1 {
                    hist[data[[y, x]] as usize] += 1;
                }
            }
            let tile_pixels = ((y1 - y0) * (x1 - x0)) as u32;
            build_lut(&mut hist, tile_pixels, clip_limit, &mut luts[ty * tx_count + tx]);
        }
    }

    let clamp_ty = |t: isize| t.clamp(0, ty_count as isize - 1) as usize;
    let clamp_tx = |t: isize| t.clamp(0, tx_count as isize - 1) as usize;

    let mut out = Array2::<u8>::zeros((h, w));
    for y in 0..h {
        let fy = (y as f32 + 0.5) / tile_h as f32 - 0.5;
        let ty0 = fy.floor() as isize;
        let wy = fy - ty0 as f32;
        let (ta, tb) = (clamp_ty(ty0), clamp_ty(ty0 + 1));

        for x in 0..w {
            let fx = (x as f32 + 0.5) / tile_w as f32 - 0.5;
            let tx0 = fx.floor() as isize;
            let wx = fx - tx0 as f32;
            let (tl, tr) = (clamp_tx(tx0), clamp_tx(tx0 + 1));

            let v = data[[y, x]] as usize;
            let top = luts[ta * tx_count + tl][v] as f32 * (1.0 - wx)
                + luts[ta * tx_count + tr][v] as f32 * wx;
            let bottom = luts[tb * tx_count + tl][v] as f32 * (1.0 - wx)
                + luts[tb * tx_count + tr][v] as f32 * wx;
            let blended = top * (1.0 - wy) + bottom * wy;
            out[[y, x]] = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
    out
}

/// Clip a tile histogram, redistribute the excess, and fold the CDF into an
/// intensity lookup table scaled to [0, 255].
fn build_lut(
    hist: &mut [u32; HISTOGRAM_BINS],
    tile_pixels: u32,
    clip_limit: f32,
    lut: &mut [u8; HISTOGRAM_BINS],
) {
    if tile_pixels == 0 {
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = i as u8;
        }
        return;
    }

    let limit = (clip_limit * tile_pixels as f32 / HISTOGRAM_BINS as f32).max(1.0) as u32;
    let mut excess = 0u32;
    for bin in hist.iter_mut() {
        if *bin > limit {
            excess += *bin - limit;
            *bin = limit;
        }
    }

    let step = excess / HISTOGRAM_BINS as u32;
    let mut remainder = excess % HISTOGRAM_BINS as u32;
    for bin in hist.iter_mut() {
        *bin += step;
        if remainder > 0 {
            *bin += 1;
            remainder -= 1;
        }
    }

    let scale = 255.0 / tile_pixels as f32;
    let mut cumulative = 0u32;
    for (i, &bin) in hist.iter().enumerate() {
        cumulative += bin;
        lut[i] = (cumulative as f32 * scale).round().clamp(0.0, 255.0) as u8;
    }
}
