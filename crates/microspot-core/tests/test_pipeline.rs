use ndarray::Array2;

use microspot_core::detect::DetectionConfig;
use microspot_core::frame::{GrayFrame, RawFrame};
use microspot_core::pipeline::analyze;
use microspot_core::preprocess::PreprocessConfig;
use microspot_core::regions::split_columns;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Bright background with dark disks, the glass-micrograph case: black-hat
/// preprocessing turns the dark spots into bright detector foreground.
fn dark_spot_raw() -> RawFrame {
    let mut data = Array2::from_elem((96, 96), 200.0f32);
    for &(cy, cx) in &[(24usize, 24usize), (24, 72), (72, 48)] {
        for y in 0..96 {
            for x in 0..96 {
                let dy = y as f64 - cy as f64;
                let dx = x as f64 - cx as f64;
                if dy * dy + dx * dx <= 16.0 {
                    data[[y, x]] = 40.0;
                }
            }
        }
    }
    RawFrame::new(data)
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn test_analyze_end_to_end_dark_spots() {
    let raw = dark_spot_raw();
    let preset = PreprocessConfig {
        invert: false,
        clahe_clip: 2.0,
        tophat_kernel: 15,
        median_kernel: 3,
    };
    let detection = DetectionConfig {
        threshold: 128,
        morph_iterations: 1,
        min_diameter: 5.0,
        max_diameter: 200.0,
    };

    let report = analyze(&raw, &preset, &detection, 8, 0.5).unwrap();
    assert_eq!(report.blobs.len(), 3);
    assert_eq!(report.stats.count, 3);
    for blob in &report.blobs {
        assert!(
            blob.diameter_px >= 5.0 && blob.diameter_px <= 14.0,
            "diameter {} outside the expected spot size",
            blob.diameter_px
        );
    }
    let mean = report.stats.mean_um.unwrap();
    assert!(mean > 2.0 && mean < 8.0, "mean {mean} um");
}

#[test]
fn test_analyze_respects_max_blobs() {
    let raw = dark_spot_raw();
    let preset = PreprocessConfig::default();
    let detection = DetectionConfig {
        threshold: 128,
        morph_iterations: 1,
        ..DetectionConfig::default()
    };

    let report = analyze(&raw, &preset, &detection, 2, 0.5).unwrap();
    assert!(report.blobs.len() <= 2);
    assert_eq!(report.stats.count, report.blobs.len());
}

// ---------------------------------------------------------------------------
// split_columns
// ---------------------------------------------------------------------------

fn ramp_frame(h: usize, w: usize) -> GrayFrame {
    GrayFrame::new(Array2::from_shape_fn((h, w), |(_, col)| col as u8))
}

#[test]
fn test_split_columns_labels_descend() {
    let frame = ramp_frame(6, 12);
    let strips = split_columns(&frame, 30, 28, 4);
    assert_eq!(strips.len(), 3);
    assert_eq!(strips[0].0, 30);
    assert_eq!(strips[1].0, 29);
    assert_eq!(strips[2].0, 28);
    for (_, strip) in &strips {
        assert_eq!(strip.width(), 4);
        assert_eq!(strip.height(), 6);
    }
    // Second strip starts at column 4.
    assert_eq!(strips[1].1.data[[0, 0]], 4);
}

#[test]
fn test_split_columns_clips_last_strip() {
    let frame = ramp_frame(4, 12);
    let strips = split_columns(&frame, 10, 8, 5);
    assert_eq!(strips.len(), 3);
    assert_eq!(strips[2].1.width(), 2);
}

#[test]
fn test_split_columns_degenerate_inputs() {
    let frame = ramp_frame(4, 12);
    assert!(split_columns(&frame, 10, 8, 0).is_empty());
    assert!(split_columns(&frame, 8, 10, 4).is_empty());
}
