//! Playback engine - audio handle lifecycle
//!
//! Owns the single active [`AudioOutput`] handle: load/teardown, play,
//! pause, seek, volume and rate. Engine events (progress, ended, error)
//! are pushed in by the platform through the [`crate::Player`] hooks.

use crate::error::{PlayerError, Result};
use crate::output::{AudioBackend, AudioOutput};
use std::time::Duration;
use tracing::{debug, warn};
use vibe_core::Track;

/// Owns at most one live audio output handle.
pub struct PlaybackEngine {
    backend: Box<dyn AudioBackend>,
    handle: Option<Box<dyn AudioOutput>>,
}

impl PlaybackEngine {
    /// Create an engine over a platform audio backend.
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            handle: None,
        }
    }

    /// Load a track and begin playback.
    ///
    /// Tears down any existing handle first, then applies the session's
    /// volume and rate to the new handle so user preferences persist
    /// across track changes. Returns whether playback actually started:
    /// a rejected start is absorbed into paused state (`Ok(false)`),
    /// never an error.
    pub fn load(&mut self, track: &Track, volume: f32, rate: f32) -> Result<bool> {
        if !track.is_playable() {
            warn!(track_id = %track.id, "rejected track with empty audio source");
            return Err(PlayerError::UnplayableTrack(track.id.clone()));
        }

        self.teardown();

        let mut handle = self.backend.open(&track.audio_url)?;
        handle.set_volume(volume);
        handle.set_rate(rate);

        let started = match handle.play() {
            Ok(()) => true,
            Err(e) => {
                debug!(track_id = %track.id, error = %e, "playback start rejected, staying paused");
                false
            }
        };

        self.handle = Some(handle);
        Ok(started)
    }

    /// Resume the current handle. Returns whether playback started.
    pub fn resume(&mut self) -> bool {
        match self.handle.as_mut() {
            Some(handle) => match handle.play() {
                Ok(()) => true,
                Err(e) => {
                    debug!(error = %e, "resume rejected");
                    false
                }
            },
            None => false,
        }
    }

    /// Pause playback. No-op if no handle exists.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.as_mut() {
            handle.pause();
        }
    }

    /// Tear down the active handle, if any.
    pub fn teardown(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.pause();
        }
    }

    /// Seek the current handle. No-op without a handle or before the
    /// media duration is known.
    pub fn seek(&mut self, position: Duration) {
        if let Some(handle) = self.handle.as_mut() {
            if handle.duration().is_some() {
                handle.seek(position);
            }
        }
    }

    /// Forward a volume change to the live handle.
    pub fn set_volume(&mut self, volume: f32) {
        if let Some(handle) = self.handle.as_mut() {
            handle.set_volume(volume);
        }
    }

    /// Forward a rate change to the live handle.
    pub fn set_rate(&mut self, rate: f32) {
        if let Some(handle) = self.handle.as_mut() {
            handle.set_rate(rate);
        }
    }

    /// Current play head position, zero without a handle.
    pub fn position(&self) -> Duration {
        self.handle
            .as_ref()
            .map(|h| h.position())
            .unwrap_or(Duration::ZERO)
    }

    /// Duration of the loaded media, if known.
    pub fn duration(&self) -> Option<Duration> {
        self.handle.as_ref().and_then(|h| h.duration())
    }

    /// Whether a handle is currently alive.
    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use vibe_core::{MediaKind, Monetization};

    fn test_track(id: &str, audio_url: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            cover_url: String::new(),
            audio_url: audio_url.to_string(),
            duration_secs: Some(120.0),
            creator_id: None,
            album_id: None,
            play_count: 0,
            like_count: 0,
            kind: MediaKind::Song,
            monetization: Monetization::Free,
            contact_handle: None,
        }
    }

    struct CountingOutput {
        live: Arc<AtomicUsize>,
        reject_start: bool,
    }

    impl Drop for CountingOutput {
        fn drop(&mut self) {
            self.live.fetch_sub(1, Ordering::SeqCst);
        }
    }

    impl AudioOutput for CountingOutput {
        fn play(&mut self) -> Result<()> {
            if self.reject_start {
                Err(PlayerError::Backend("autoplay blocked".to_string()))
            } else {
                Ok(())
            }
        }
        fn pause(&mut self) {}
        fn seek(&mut self, _position: Duration) {}
        fn set_volume(&mut self, _volume: f32) {}
        fn set_rate(&mut self, _rate: f32) {}
        fn position(&self) -> Duration {
            Duration::ZERO
        }
        fn duration(&self) -> Option<Duration> {
            Some(Duration::from_secs(120))
        }
    }

    struct CountingBackend {
        live: Arc<AtomicUsize>,
        reject_start: bool,
    }

    impl AudioBackend for CountingBackend {
        fn open(&self, _url: &str) -> Result<Box<dyn AudioOutput>> {
            self.live.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(CountingOutput {
                live: Arc::clone(&self.live),
                reject_start: self.reject_start,
            }))
        }
    }

    fn engine_with_counter(reject_start: bool) -> (PlaybackEngine, Arc<AtomicUsize>) {
        let live = Arc::new(AtomicUsize::new(0));
        let backend = CountingBackend {
            live: Arc::clone(&live),
            reject_start,
        };
        (PlaybackEngine::new(Box::new(backend)), live)
    }

    #[test]
    fn load_tears_down_previous_handle() {
        let (mut engine, live) = engine_with_counter(false);

        engine
            .load(&test_track("1", "https://cdn/a.mp3"), 1.0, 1.0)
            .unwrap();
        assert_eq!(live.load(Ordering::SeqCst), 1);

        engine
            .load(&test_track("2", "https://cdn/b.mp3"), 1.0, 1.0)
            .unwrap();
        // At most one handle is ever live.
        assert_eq!(live.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unplayable_track_is_rejected_before_load() {
        let (mut engine, live) = engine_with_counter(false);

        let result = engine.load(&test_track("1", "  "), 1.0, 1.0);
        assert!(matches!(result, Err(PlayerError::UnplayableTrack(_))));
        assert_eq!(live.load(Ordering::SeqCst), 0);
        assert!(!engine.has_handle());
    }

    #[test]
    fn rejected_start_becomes_paused_not_error() {
        let (mut engine, _live) = engine_with_counter(true);

        let started = engine
            .load(&test_track("1", "https://cdn/a.mp3"), 1.0, 1.0)
            .unwrap();
        assert!(!started);
        assert!(engine.has_handle());
    }

    #[test]
    fn stop_releases_the_handle() {
        let (mut engine, live) = engine_with_counter(false);

        engine
            .load(&test_track("1", "https://cdn/a.mp3"), 1.0, 1.0)
            .unwrap();
        engine.teardown();
        assert_eq!(live.load(Ordering::SeqCst), 0);
        assert!(!engine.has_handle());
    }

    #[test]
    fn pause_without_handle_is_a_noop() {
        let (mut engine, _live) = engine_with_counter(false);
        engine.pause();
        engine.seek(Duration::from_secs(10));
        assert_eq!(engine.position(), Duration::ZERO);
    }
}
