//! Error types for population-map operations.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Primary error type for map rendering operations.
#[derive(Debug, Error)]
pub enum MapError {
    // === Data Errors ===
    #[error("Country not found in dataset: {0}")]
    CountryNotFound(u32),

    #[error("Failed to read population data: {0}")]
    DataReadError(String),

    #[error("Invalid population grid: {0}")]
    InvalidGrid(String),

    // === Feature Errors ===
    #[error("Invalid feature data: {0}")]
    FeatureError(String),

    // === Rendering Errors ===
    #[error("Unknown colormap: {0}")]
    UnknownColormap(String),

    #[error("Rendering failed: {0}")]
    RenderError(String),

    #[error("PNG encoding failed: {0}")]
    EncodeError(String),

    // === Infrastructure Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MapError {
    /// Create a DataReadError.
    pub fn data_read(msg: impl Into<String>) -> Self {
        Self::DataReadError(msg.into())
    }

    /// Create an InvalidGrid error.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Create a FeatureError.
    pub fn feature(msg: impl Into<String>) -> Self {
        Self::FeatureError(msg.into())
    }

    /// Create a RenderError.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::RenderError(msg.into())
    }
}
