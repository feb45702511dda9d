use approx::assert_abs_diff_eq;

use microspot_core::detect::{Blob, BlobShape};
use microspot_core::filter::filter_blobs;
use microspot_core::stats::compute_statistics;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn blob(diameter_px: f64, tag: f64) -> Blob {
    Blob {
        center: (tag, tag),
        diameter_px,
        shape: BlobShape::Circle,
    }
}

// ---------------------------------------------------------------------------
// filter_blobs
// ---------------------------------------------------------------------------

#[test]
fn test_filter_sorts_descending_and_truncates() {
    let blobs = vec![blob(4.0, 0.0), blob(10.0, 1.0), blob(7.0, 2.0)];
    let kept = filter_blobs(blobs, 2);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].diameter_px, 10.0);
    assert_eq!(kept[1].diameter_px, 7.0);
}

#[test]
fn test_filter_keeps_all_when_under_limit() {
    let blobs = vec![blob(4.0, 0.0), blob(10.0, 1.0)];
    let kept = filter_blobs(blobs, 8);
    assert_eq!(kept.len(), 2);
}

#[test]
fn test_filter_zero_limit_is_empty() {
    let blobs = vec![blob(4.0, 0.0), blob(10.0, 1.0)];
    assert!(filter_blobs(blobs, 0).is_empty());
}

#[test]
fn test_filter_ties_keep_detection_order() {
    // Three equal diameters: stable sort preserves insertion order.
    let blobs = vec![blob(20.0, 0.0), blob(20.0, 1.0), blob(20.0, 2.0)];
    let kept = filter_blobs(blobs, 2);
    assert_eq!(kept[0].center.0, 0.0);
    assert_eq!(kept[1].center.0, 1.0);
}

#[test]
fn test_filter_is_idempotent() {
    let blobs = vec![blob(4.0, 0.0), blob(10.0, 1.0), blob(7.0, 2.0)];
    let once = filter_blobs(blobs, 2);
    let twice = filter_blobs(once.clone(), 2);
    assert_eq!(once, twice);
}

// ---------------------------------------------------------------------------
// compute_statistics
// ---------------------------------------------------------------------------

#[test]
fn test_statistics_uniform_diameters() {
    // Three 10 px blobs at 0.5 um/px: mean 5 um, no spread.
    let blobs = vec![blob(10.0, 0.0), blob(10.0, 1.0), blob(10.0, 2.0)];
    let stats = compute_statistics(&blobs, 0.5);
    assert_eq!(stats.count, 3);
    assert_abs_diff_eq!(stats.mean_um.unwrap(), 5.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.std_um.unwrap(), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.cv_percent.unwrap(), 0.0, epsilon = 1e-9);
}

#[test]
fn test_statistics_population_std() {
    let blobs = vec![blob(4.0, 0.0), blob(8.0, 1.0)];
    let stats = compute_statistics(&blobs, 1.0);
    assert_abs_diff_eq!(stats.mean_um.unwrap(), 6.0, epsilon = 1e-9);
    // Population form: sqrt(((4-6)^2 + (8-6)^2) / 2) = 2.
    assert_abs_diff_eq!(stats.std_um.unwrap(), 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(stats.cv_percent.unwrap(), 100.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn test_statistics_empty_list_is_undefined_not_nan() {
    let stats = compute_statistics(&[], 0.5);
    assert_eq!(stats.count, 0);
    assert!(stats.mean_um.is_none());
    assert!(stats.std_um.is_none());
    assert!(stats.cv_percent.is_none());
}

#[test]
fn test_statistics_zero_mean_has_undefined_cv() {
    // A zero pixel size collapses every diameter to 0 um; the CV would be a
    // division by zero and must be the undefined marker instead.
    let blobs = vec![blob(10.0, 0.0)];
    let stats = compute_statistics(&blobs, 0.0);
    assert_eq!(stats.count, 1);
    assert_eq!(stats.mean_um, Some(0.0));
    assert!(stats.cv_percent.is_none());
}
