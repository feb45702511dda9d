use crate::detect::Blob;

/// Keep the `max_count` largest blobs by diameter.
///
/// Stable sort descending, so equal diameters keep their detection order.
/// `max_count` of 0 yields an empty list; the result length is always
/// `min(len, max_count)`. Idempotent.
pub fn filter_blobs(mut blobs: Vec<Blob>, max_count: usize) -> Vec<Blob> {
    blobs.sort_by(|a, b| b.diameter_px.total_cmp(&a.diameter_px));
    blobs.truncate(max_count);
    blobs
}
