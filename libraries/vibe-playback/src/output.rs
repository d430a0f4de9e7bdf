//! Platform-agnostic audio output traits
//!
//! Abstracts the single active audio handle (an HTML audio element, a
//! native output stream) behind traits so the orchestrator works on any
//! platform. The platform drives progress/ended/error events by calling
//! the corresponding [`crate::Player`] hooks.

use crate::error::Result;
use std::time::Duration;

/// A live audio output handle for one source.
///
/// Exactly one handle exists at a time; the engine tears down the
/// previous one before opening the next.
pub trait AudioOutput: Send {
    /// Begin or resume playback.
    ///
    /// A rejected start (autoplay policy, codec probe failure) is
    /// reported as an error; the engine absorbs it into paused state.
    fn play(&mut self) -> Result<()>;

    /// Pause playback, keeping the handle alive.
    fn pause(&mut self);

    /// Move the play head.
    fn seek(&mut self, position: Duration);

    /// Set output volume (0.0 - 1.0).
    fn set_volume(&mut self, volume: f32);

    /// Set the playback rate multiplier.
    fn set_rate(&mut self, rate: f32);

    /// Current play head position.
    fn position(&self) -> Duration;

    /// Total duration, once the media has been probed.
    fn duration(&self) -> Option<Duration>;
}

/// Factory for audio output handles.
pub trait AudioBackend: Send + Sync {
    /// Open a new handle for the given audio source URL.
    fn open(&self, url: &str) -> Result<Box<dyn AudioOutput>>;
}
