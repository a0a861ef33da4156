//! Error types and error handling for segkit.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (MCP error codes)
//! is handled in the respective adapter modules.
//!
//! Degenerate inputs (non-text batch entries, empty corpora) are not
//! errors: they degrade to an empty result for their index.

use thiserror::Error;

/// Result type alias for segkit operations
pub type Result<T> = std::result::Result<T, SegkitError>;

/// Main error type for segkit
#[derive(Error, Debug)]
pub enum SegkitError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Segmentation failed: {0}")]
    SegmentationFailed(String),

    #[error("Computation failed: {0}")]
    ComputationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl SegkitError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Stable error kind name reported to callers
    pub fn kind(&self) -> &'static str {
        match self {
            SegkitError::InvalidInput(_) => "InvalidInput",
            SegkitError::SegmentationFailed(_) => "SegmentationFailed",
            SegkitError::ComputationFailed(_) => "ComputationFailed",
            SegkitError::ConfigError(_) => "ConfigError",
            SegkitError::IoError(_) => "IoError",
            SegkitError::SerdeError(_) => "SerdeError",
            SegkitError::TomlError(_) => "TomlError",
        }
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            SegkitError::InvalidInput(_) | SegkitError::ConfigError(_)
        )
    }
}
