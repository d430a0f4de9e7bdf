//! Error types for playback orchestration

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Track has no usable audio source and was rejected before load
    #[error("Track is not playable: {0}")]
    UnplayableTrack(String),

    /// Queue index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// Platform audio backend failed to open a source
    #[error("Audio backend error: {0}")]
    Backend(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlayerError>;
