//! Core types for playback orchestration

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Free preview length enforced for paid tracks.
pub const PREVIEW_LIMIT: Duration = Duration::from_secs(40);

/// Playback rate, restricted to the rates the UI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackRate {
    /// 0.5x
    X0_5,
    /// 0.75x
    X0_75,
    /// 1x (normal)
    X1,
    /// 1.25x
    X1_25,
    /// 1.5x
    X1_5,
    /// 2x
    X2,
}

impl PlaybackRate {
    /// The rate as a multiplier for the audio output.
    pub fn as_f32(self) -> f32 {
        match self {
            PlaybackRate::X0_5 => 0.5,
            PlaybackRate::X0_75 => 0.75,
            PlaybackRate::X1 => 1.0,
            PlaybackRate::X1_25 => 1.25,
            PlaybackRate::X1_5 => 1.5,
            PlaybackRate::X2 => 2.0,
        }
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        PlaybackRate::X1
    }
}

/// Why a track started playing.
///
/// User-initiated playback expands the player UI; automatic continuation
/// preserves the current minimized/expanded state. Passed explicitly to
/// the internal start operation rather than read from shared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayOrigin {
    /// The user asked for this track directly
    UserInitiated,

    /// The player continued on its own (track end, queue advance)
    AutomaticContinuation,
}

/// Configuration for the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Initial volume (0.0 - 1.0, default: 1.0)
    pub volume: f32,

    /// Initial playback rate (default: 1x)
    pub rate: PlaybackRate,

    /// How many tracks to request from the recommendation source when
    /// extending an exhausted context or the queue (default: 10)
    pub recommendation_limit: usize,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            volume: 1.0,
            rate: PlaybackRate::default(),
            recommendation_limit: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.volume, 1.0);
        assert_eq!(config.rate, PlaybackRate::X1);
        assert_eq!(config.recommendation_limit, 10);
    }

    #[test]
    fn rate_multipliers() {
        assert_eq!(PlaybackRate::X0_5.as_f32(), 0.5);
        assert_eq!(PlaybackRate::X1.as_f32(), 1.0);
        assert_eq!(PlaybackRate::X2.as_f32(), 2.0);
    }
}
