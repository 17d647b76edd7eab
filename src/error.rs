//! Error types for the hand gesture recognition library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Recorded frame could not be (de)serialized
    #[error("Recording error: {0}")]
    Recording(#[from] serde_json::Error),

    /// Landmark input failed validation (wrong count, non-finite coordinates)
    #[error("Invalid landmarks: {0}")]
    InvalidLandmarks(String),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
