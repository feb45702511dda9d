pub mod consts;
pub mod detect;
pub mod error;
pub mod filter;
pub mod frame;
pub mod optimize;
pub mod pipeline;
pub mod preprocess;
pub mod preset;
pub mod regions;
pub mod stats;
