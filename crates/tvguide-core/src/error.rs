//! Error types for the tvguide catalog browser
//!
//! Provides a comprehensive error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all tvguide operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum TvGuideError {
    /// HTTP request failed (transport error, connection refused, ...)
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Catalog answered with a non-success status code
    #[error("Catalog returned status {status} for {url}")]
    Status { status: u16, url: String },

    /// Response body was not the expected JSON collection
    #[error("Failed to parse catalog response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Invalid base URL in the client configuration
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Show picker value that is neither empty nor a show id
    #[error("Invalid show ID: {0}")]
    InvalidShowId(String),
}

impl Serialize for TvGuideError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for tvguide operations
pub type Result<T> = std::result::Result<T, TvGuideError>;

/// The action a load failure belongs to
///
/// Every failure of an action collapses to one generic message shown
/// to the user, regardless of what actually went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFailure {
    Shows,
    Episodes,
}

impl LoadFailure {
    /// User-visible message for this failure
    pub fn message(self) -> &'static str {
        match self {
            LoadFailure::Shows => {
                "Sorry, something went wrong while loading shows. Please try again later."
            }
            LoadFailure::Episodes => {
                "Sorry, something went wrong while loading episodes. Please try again later."
            }
        }
    }
}
