/// Number of intensity levels in a detector-ready 8-bit frame.
pub const HISTOGRAM_BINS: usize = 256;

/// CLAHE tile grid dimension: the frame is equalized over an 8x8 grid of tiles.
pub const CLAHE_TILE_GRID: usize = 8;

/// Valid range for the CLAHE clip limit.
pub const CLAHE_CLIP_MIN: f32 = 0.5;
pub const CLAHE_CLIP_MAX: f32 = 10.0;

/// Valid range for the top-hat structuring element size.
pub const TOPHAT_KERNEL_MIN: usize = 3;
pub const TOPHAT_KERNEL_MAX: usize = 80;

/// Valid range for the median blur aperture. Even values are coerced to odd.
pub const MEDIAN_KERNEL_MIN: usize = 1;
pub const MEDIAN_KERNEL_MAX: usize = 31;

/// Connected components smaller than this many pixels are noise, not spots.
pub const MIN_CONTOUR_AREA: usize = 20;

/// Minimum boundary point count for an ellipse fit to be attempted.
pub const ELLIPSE_MIN_POINTS: usize = 5;

/// Minimum major/minor axis ratio for a blob to be reported as an ellipse
/// instead of a circle.
pub const ELLIPSE_MIN_ASPECT: f64 = 1.1;

/// Default iteration cap for the threshold search: ceil(log2(256)) = 8 plus
/// headroom for non-monotonic count jumps.
pub const DEFAULT_SEARCH_ITERATIONS: usize = 12;

/// Default cap on the number of blobs kept per detection pass.
pub const DEFAULT_MAX_BLOBS: usize = 8;

/// Small epsilon guarding divisions in floating-point normalization.
pub const EPSILON: f32 = 1e-10;
