//! Preview gate for paid tracks
//!
//! Paid tracks stream a fixed-length free preview. The gate watches
//! progress ticks and latches the first time the threshold is crossed,
//! so seeking back and forth across the limit cannot re-trigger it. The
//! latch resets whenever a new track is loaded.

use crate::types::PREVIEW_LIMIT;
use std::time::Duration;
use vibe_core::Track;

/// One-shot preview-limit latch for the currently loaded track.
#[derive(Debug, Default)]
pub struct PreviewGate {
    fired: bool,
}

impl PreviewGate {
    /// Create a gate in the unfired state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the latch for a newly loaded track instance.
    pub fn reset(&mut self) {
        self.fired = false;
    }

    /// Check a progress tick. Returns true exactly once per track load,
    /// when a paid track first reaches the preview limit.
    pub fn check(&mut self, track: &Track, elapsed: Duration) -> bool {
        if self.fired || !track.is_paid() || elapsed < PREVIEW_LIMIT {
            return false;
        }
        self.fired = true;
        true
    }

    /// Whether the gate has fired for the current track instance.
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
