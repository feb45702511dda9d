use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotError {
    #[error("parameter {name} out of range: {value} (allowed {min}..={max})")]
    ParamOutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("max_diameter ({max}) must be greater than min_diameter ({min})")]
    DiameterRange { min: f64, max: f64 },

    #[error("invalid parameter {name}: {reason}")]
    InvalidParam { name: &'static str, reason: String },

    #[error("empty image")]
    EmptyImage,

    #[error("sample buffer length {actual} does not match {width}x{height}")]
    ShapeMismatch {
        width: usize,
        height: usize,
        actual: usize,
    },

    #[error("search aborted by observer: {0}")]
    Aborted(String),
}

pub type Result<T> = std::result::Result<T, SpotError>;
