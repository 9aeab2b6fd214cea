// File: crates/pricing-core/src/error.rs
// Summary: Error type shared by rendering, data loading and configuration.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },
    #[error("encode PNG failed")]
    Encode,
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("unsupported data file extension: {0:?}")]
    UnsupportedFormat(String),
}

pub type Result<T, E = ChartError> = std::result::Result<T, E>;
