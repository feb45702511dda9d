use microspot_core::detect::DetectionConfig;
use microspot_core::optimize::SearchStatus;
use microspot_core::preprocess::PreprocessConfig;
use microspot_core::preset::{AnalysisParams, Material, MaterialPreset};

// ---------------------------------------------------------------------------
// Material presets
// ---------------------------------------------------------------------------

#[test]
fn test_glass_preset_values() {
    let preset = Material::Glass.preset();
    assert_eq!(preset.clahe_clip, 2.0);
    assert_eq!(preset.tophat_kernel, 15);
    assert_eq!(preset.median_kernel, 3);
    assert!(!preset.invert);
    assert!(!preset.scratch_removal);
}

#[test]
fn test_aluminum_preset_values() {
    let preset = Material::Aluminum.preset();
    assert_eq!(preset.tophat_kernel, 25);
    assert!(preset.invert);
    assert!(preset.scratch_removal);
}

#[test]
fn test_material_display() {
    assert_eq!(format!("{}", Material::Glass), "glass");
    assert_eq!(format!("{}", Material::Aluminum), "aluminum");
}

#[test]
fn test_search_status_display() {
    assert_eq!(format!("{}", SearchStatus::Matched), "Exact match");
    assert_eq!(format!("{}", SearchStatus::NewBest), "New best");
    assert_eq!(format!("{}", SearchStatus::Discarded), "Discarded");
}

// ---------------------------------------------------------------------------
// Serde round-trips
// ---------------------------------------------------------------------------

#[test]
fn test_material_preset_round_trip() {
    let preset = Material::Aluminum.preset();
    let json = serde_json::to_string(&preset).unwrap();
    let back: MaterialPreset = serde_json::from_str(&json).unwrap();
    assert_eq!(back, preset);
}

#[test]
fn test_material_preset_rejects_unknown_fields() {
    let json = r#"{
        "clahe_clip": 2.0,
        "tophat_kernel": 15,
        "median_kernel": 3,
        "invert": false,
        "scratch_removal": false,
        "mystery_knob": 1
    }"#;
    assert!(serde_json::from_str::<MaterialPreset>(json).is_err());
}

#[test]
fn test_analysis_params_accepts_persisted_field_set_verbatim() {
    // Exactly the flat record a tuning front-end persists.
    let json = r#"{
        "clahe_clip": 2.5,
        "tophat_kernel": 21,
        "median_kernel": 5,
        "threshold": 140,
        "morph_iterations": 3,
        "min_diameter": 6.0,
        "max_diameter": 150.0
    }"#;
    let params: AnalysisParams = serde_json::from_str(json).unwrap();
    assert_eq!(params.threshold, 140);
    assert_eq!(params.tophat_kernel, 21);

    let back = serde_json::to_string(&params).unwrap();
    let again: AnalysisParams = serde_json::from_str(&back).unwrap();
    assert_eq!(again, params);
}

#[test]
fn test_analysis_params_rejects_unknown_fields() {
    let json = r#"{
        "clahe_clip": 2.0,
        "tophat_kernel": 15,
        "median_kernel": 3,
        "threshold": 120,
        "morph_iterations": 2,
        "min_diameter": 5.0,
        "max_diameter": 200.0,
        "max_blobs": 8
    }"#;
    assert!(serde_json::from_str::<AnalysisParams>(json).is_err());
}

// ---------------------------------------------------------------------------
// Config conversions
// ---------------------------------------------------------------------------

#[test]
fn test_preset_to_preprocess_config() {
    let config = Material::Aluminum.preset().preprocess_config();
    assert!(config.invert);
    assert_eq!(config.tophat_kernel, 25);
    assert!(config.validated().is_ok());
}

#[test]
fn test_params_split_preserves_values() {
    let params = AnalysisParams {
        clahe_clip: 3.0,
        tophat_kernel: 11,
        median_kernel: 5,
        threshold: 99,
        morph_iterations: 4,
        min_diameter: 7.0,
        max_diameter: 90.0,
    };
    let pre = params.preprocess_config(true);
    assert!(pre.invert);
    assert_eq!(pre.clahe_clip, 3.0);
    assert_eq!(pre.median_kernel, 5);

    let det = params.detection_config();
    assert_eq!(det.threshold, 99);
    assert_eq!(det.morph_iterations, 4);
    assert_eq!(det.min_diameter, 7.0);
    assert_eq!(det.max_diameter, 90.0);
}

#[test]
fn test_defaults_match_detection_defaults() {
    let params = AnalysisParams::default();
    assert_eq!(params.threshold, 120);
    assert_eq!(params.morph_iterations, 2);
    assert_eq!(params.min_diameter, 5.0);
    assert_eq!(params.max_diameter, 200.0);

    let det = DetectionConfig::default();
    assert_eq!(det.threshold, 120);
    assert!(det.validate().is_ok());

    let pre = PreprocessConfig::default();
    assert_eq!(pre.tophat_kernel, 15);
    assert!(pre.validated().is_ok());
}
