//! Error types for LRCLIB provider

use thiserror::Error;

/// LRCLIB provider errors
#[derive(Error, Debug)]
pub enum LrclibError {
    /// API request returned an error
    #[error("LRCLIB API error (status {status_code}): {message}")]
    ApiError { status_code: u16, message: String },

    /// Track not found
    #[error("Track not found: {track_id}")]
    TrackNotFound { track_id: i64 },

    /// Failed to parse API response
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// HTTP transport error
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Result type for LRCLIB operations
pub type Result<T> = std::result::Result<T, LrclibError>;
