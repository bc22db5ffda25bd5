//! Error types for the face overlay library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Image loading or processing failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Landmark index outside the detected landmark set
    #[error("Landmark index {index} out of range for set of length {len}")]
    LandmarkOutOfRange {
        /// The requested landmark index
        index: usize,
        /// Length of the landmark set that was indexed
        len: usize,
    },

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Sprite asset loading or validation error
    #[error("Sprite asset error: {0}")]
    AssetError(String),

    /// Smoother construction or processing error
    #[error("Smoothing error: {0}")]
    SmoothingError(String),

    /// Landmark trace parsing error
    #[error("Landmark trace error: {0}")]
    TraceError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
