//! Core error types for Vibe Player

use thiserror::Error;

/// Result type alias using [`VibeError`]
pub type Result<T> = std::result::Result<T, VibeError>;

/// Core error type for collaborator services
///
/// The playback core never surfaces these to the presentation layer;
/// failures are absorbed at the call site and converted into
/// control-flow fallbacks.
#[derive(Error, Debug)]
pub enum VibeError {
    /// Transport-level failure reaching a backend service
    #[error("Network error: {0}")]
    Network(String),

    /// Backend service returned an error response
    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Entity not found
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to parse a service response
    #[error("Failed to parse response: {0}")]
    Parse(String),
}
