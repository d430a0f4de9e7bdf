//! Player - playback orchestration facade
//!
//! One explicitly constructed, dependency-injected service instance that
//! owns the audio handle, the playback context, the queue, the preview
//! gate, and the engagement sync, and reconciles the overlapping sources
//! of "what plays next": explicit queue, positional context, and the
//! recommendation-driven continuation strategy.
//!
//! The platform drives engine events by calling [`Player::on_progress_tick`],
//! [`Player::on_track_ended`] and [`Player::on_playback_error`]; the UI
//! observes state through the getters and the event stream.

use crate::context::PlaybackContext;
use crate::continuation::Continuation;
use crate::engagement::EngagementSync;
use crate::engine::PlaybackEngine;
use crate::error::{PlayerError, Result};
use crate::events::{EventBus, PlayerEvent, PurchaseAction};
use crate::output::AudioBackend;
use crate::preview::PreviewGate;
use crate::queue::PlayQueue;
use crate::shuffle::shuffle_tracks;
use crate::types::{PlayOrigin, PlaybackRate, PlayerConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use vibe_core::{
    CatalogMaintenance, Comment, CommentThread, CreatorDirectory, EngagementService, Monetization,
    RecommendationSource, Track,
};

/// The playback orchestrator.
///
/// All mutable session state lives here as plain fields - the single
/// source of truth read by every internal method. Collaborator failures
/// never propagate to the presentation layer; they degrade into
/// control-flow fallbacks, log lines, or [`PlayerEvent::Notice`]s.
pub struct Player {
    engine: PlaybackEngine,
    continuation: Continuation,
    engagement: EngagementSync,
    catalog: Arc<dyn CatalogMaintenance>,
    creators: Arc<dyn CreatorDirectory>,
    events: Arc<EventBus>,

    context: PlaybackContext,
    /// Sequence that was active before the player dropped into Single
    /// context; the Single-context continuation falls back to it when no
    /// recommendation comes back.
    snapshot: Option<Vec<Track>>,
    queue: PlayQueue,
    preview: PreviewGate,

    current: Option<Track>,
    playing: bool,
    elapsed: Duration,
    duration: Duration,
    volume: f32,
    rate: PlaybackRate,
    loop_enabled: bool,
    minimized: bool,

    recommendation_limit: usize,
    /// Bumped by every load and by stop. Async results captured before
    /// an await are discarded when the generation moved on, so a
    /// late-resolving fetch can never start playback after the user
    /// navigated away.
    generation: u64,
}

impl Player {
    /// Create a player over a platform audio backend and the backend
    /// service collaborators.
    pub fn new(
        backend: Box<dyn AudioBackend>,
        recommendations: Arc<dyn RecommendationSource>,
        engagement: Arc<dyn EngagementService>,
        catalog: Arc<dyn CatalogMaintenance>,
        creators: Arc<dyn CreatorDirectory>,
        config: PlayerConfig,
    ) -> Self {
        let events = Arc::new(EventBus::new());
        Self {
            engine: PlaybackEngine::new(backend),
            continuation: Continuation::new(recommendations),
            engagement: EngagementSync::new(engagement, Arc::clone(&events)),
            catalog,
            creators,
            events,
            context: PlaybackContext::Single,
            snapshot: None,
            queue: PlayQueue::new(),
            preview: PreviewGate::new(),
            current: None,
            playing: false,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            volume: config.volume.clamp(0.0, 1.0),
            rate: config.rate,
            loop_enabled: false,
            minimized: false,
            recommendation_limit: config.recommendation_limit,
            generation: 0,
        }
    }

    // ===== Playback control =====

    /// Play a track in isolation (Single context).
    ///
    /// If the track is already current with a live handle, this resumes
    /// it instead of reloading. Dropping into Single context retains the
    /// previously active sequence as the continuation snapshot.
    pub fn play_track(&mut self, track: Track) {
        if !track.is_playable() {
            warn!(track_id = %track.id, "ignoring play request for track with no audio source");
            return;
        }

        if self.engine.has_handle()
            && self.current.as_ref().is_some_and(|c| c.id == track.id)
        {
            self.playing = self.engine.resume();
            self.minimized = false;
            self.events.emit(PlayerEvent::StateChanged {
                playing: self.playing,
            });
            return;
        }

        if !self.context.tracks().is_empty() {
            self.snapshot = Some(self.context.tracks().to_vec());
        }
        self.context = PlaybackContext::Single;
        self.events
            .emit(PlayerEvent::ContextChanged { display_name: None });

        self.start_track(track, PlayOrigin::UserInitiated);
    }

    /// Play a playlist starting at the given index. Unplayable tracks
    /// are filtered out before the sequence is adopted.
    pub fn play_playlist(&mut self, tracks: Vec<Track>, name: impl Into<String>, start: usize) {
        let Some((tracks, start)) = Self::sanitize_sequence(tracks, start) else {
            return;
        };
        let name = name.into();

        self.context = PlaybackContext::Playlist {
            name: name.clone(),
            tracks,
            position: start,
        };
        self.events.emit(PlayerEvent::ContextChanged {
            display_name: Some(name),
        });

        if let Some(track) = self.context.track_at(start) {
            self.start_track(track, PlayOrigin::UserInitiated);
        }
    }

    /// Play an album starting at the given index.
    pub fn play_album(
        &mut self,
        album_id: impl Into<String>,
        name: impl Into<String>,
        tracks: Vec<Track>,
        start: usize,
    ) {
        let Some((tracks, start)) = Self::sanitize_sequence(tracks, start) else {
            return;
        };
        let name = name.into();

        self.context = PlaybackContext::Album {
            id: album_id.into(),
            name: name.clone(),
            tracks,
            position: start,
            complete: false,
        };
        self.events.emit(PlayerEvent::ContextChanged {
            display_name: Some(name),
        });

        if let Some(track) = self.context.track_at(start) {
            self.start_track(track, PlayOrigin::UserInitiated);
        }
    }

    /// Resume the current track, reloading it if the handle is gone.
    /// No-op when nothing is current.
    pub fn resume(&mut self) {
        if self.current.is_none() {
            return;
        }
        if self.engine.has_handle() {
            self.playing = self.engine.resume();
            self.events.emit(PlayerEvent::StateChanged {
                playing: self.playing,
            });
        } else if let Some(track) = self.current.clone() {
            self.start_track(track, PlayOrigin::UserInitiated);
        }
    }

    /// Pause playback. No-op if no handle exists.
    pub fn pause(&mut self) {
        if !self.engine.has_handle() {
            return;
        }
        self.engine.pause();
        self.playing = false;
        self.events
            .emit(PlayerEvent::StateChanged { playing: false });
    }

    /// Stop playback entirely.
    ///
    /// The only operation that clears current-track identity. Also
    /// resets the session-scoped queue, context, and snapshot; elapsed
    /// time and duration go back to zero.
    pub fn stop(&mut self) {
        self.engine.teardown();
        self.generation = self.generation.wrapping_add(1);
        self.current = None;
        self.playing = false;
        self.elapsed = Duration::ZERO;
        self.duration = Duration::ZERO;
        self.queue.clear();
        self.context = PlaybackContext::Single;
        self.snapshot = None;
        self.preview.reset();
        self.events.emit(PlayerEvent::Stopped);
        self.events
            .emit(PlayerEvent::StateChanged { playing: false });
    }

    /// Seek within the current track. No-op without a handle or before
    /// the media duration is known.
    pub fn seek(&mut self, position: Duration) {
        if self.engine.has_handle() && self.engine.duration().is_some() {
            self.engine.seek(position);
            self.elapsed = position.min(self.duration);
        }
    }

    /// Set volume (0.0 - 1.0). Persists across track changes.
    pub fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        self.engine.set_volume(self.volume);
        self.events.emit(PlayerEvent::VolumeChanged {
            volume: self.volume,
        });
    }

    /// Set the playback rate. Persists across track changes.
    pub fn set_rate(&mut self, rate: PlaybackRate) {
        self.rate = rate;
        self.engine.set_rate(rate.as_f32());
        self.events.emit(PlayerEvent::RateChanged { rate });
    }

    /// Toggle the per-track loop flag. Returns the new value.
    pub fn toggle_loop(&mut self) -> bool {
        self.loop_enabled = !self.loop_enabled;
        self.events.emit(PlayerEvent::LoopChanged {
            enabled: self.loop_enabled,
        });
        self.loop_enabled
    }

    /// Set the minimized/expanded UI flag.
    pub fn set_minimized(&mut self, minimized: bool) {
        self.minimized = minimized;
    }

    // ===== Next / previous =====

    /// Skip to the next track (user action).
    pub async fn skip_next(&mut self) {
        self.advance(PlayOrigin::UserInitiated).await;
    }

    /// Go to the previous track: positional with wraparound within the
    /// active sequence; a single-track context restarts itself. No-op
    /// when playback is stopped.
    pub fn skip_previous(&mut self) {
        let Some(current) = self.current.clone() else {
            return;
        };

        match self.context.previous_position() {
            Some(previous) => {
                if let Some(track) = self.context.track_at(previous) {
                    self.context.set_position(previous);
                    self.start_track(track, PlayOrigin::UserInitiated);
                }
            }
            // Single context: the sequence is the track itself.
            None => self.start_track(current, PlayOrigin::UserInitiated),
        }
    }

    /// Resolve and start whatever plays next.
    ///
    /// The resolution order below is deliberate and must not be
    /// reordered: playlist-positional advancement beats the queue, the
    /// queue beats album advancement and the Single-context fallback
    /// chain, and only then does generic sequence handling apply.
    async fn advance(&mut self, origin: PlayOrigin) {
        // 1. Stopped sessions stay stopped.
        let Some(current) = self.current.clone() else {
            return;
        };
        let generation = self.generation;

        // 2. Playlist context with a next positional track.
        if matches!(self.context, PlaybackContext::Playlist { .. }) {
            if let Some(next) = self.context.next_position() {
                if let Some(track) = self.context.track_at(next) {
                    self.context.set_position(next);
                    self.start_track(track, origin);
                    return;
                }
            }
        }

        // 3. Non-empty queue: dequeue the head. The context's sequence
        // stays in place for later positional lookups even though the
        // dequeued track need not belong to it.
        if let Some(track) = self.queue.dequeue() {
            self.events.emit(PlayerEvent::QueueChanged {
                length: self.queue.len(),
            });
            self.start_track(track, origin);
            return;
        }

        // 4. Album context: positional advancement, then completion.
        if let PlaybackContext::Album { id, .. } = &self.context {
            let album_id = id.clone();
            if let Some(next) = self.context.next_position() {
                if let Some(track) = self.context.track_at(next) {
                    self.context.set_position(next);
                    self.start_track(track, origin);
                    return;
                }
            }

            if let PlaybackContext::Album { complete, .. } = &mut self.context {
                *complete = true;
            }
            self.events.emit(PlayerEvent::AlbumCompleted {
                album_id: album_id.clone(),
            });

            let recommended = self
                .continuation
                .fetch(&current.id, self.recommendation_limit)
                .await;
            if self.is_stale(generation) {
                return;
            }
            if recommended.is_empty() {
                info!(album_id = %album_id, "album complete, no recommendations; stopping");
                self.stop();
                return;
            }

            if let Some(first) = self.context.convert_album_to_playlist(recommended) {
                self.events.emit(PlayerEvent::ContextChanged {
                    display_name: self.context.display_name().map(String::from),
                });
                self.context.set_position(first);
                if let Some(track) = self.context.track_at(first) {
                    self.start_track(track, origin);
                }
            }
            return;
        }

        // 5. Single context: one recommendation, else the retained
        // playlist snapshot, else stop.
        if matches!(self.context, PlaybackContext::Single) {
            let recommended = self.continuation.fetch(&current.id, 1).await;
            if self.is_stale(generation) {
                return;
            }
            if let Some(track) = recommended.into_iter().next() {
                self.start_track(track, origin);
                return;
            }

            match self.snapshot.clone() {
                Some(snapshot) if !snapshot.is_empty() => {
                    let next = match snapshot.iter().position(|t| t.id == current.id) {
                        Some(index) => (index + 1) % snapshot.len(),
                        None => 0,
                    };
                    self.start_track(snapshot[next].clone(), origin);
                }
                _ => self.stop(),
            }
            return;
        }

        // 6. Empty sequence: nothing to play.
        if self.context.tracks().is_empty() {
            self.stop();
            return;
        }

        // 7. Exhausted sequence: extend it with recommendations.
        if self.context.is_exhausted() {
            let recommended = self
                .continuation
                .fetch(&current.id, self.recommendation_limit)
                .await;
            if self.is_stale(generation) {
                return;
            }
            match self.context.append_tracks(recommended) {
                Some(first) => {
                    self.context.set_position(first);
                    if let Some(track) = self.context.track_at(first) {
                        self.start_track(track, origin);
                    }
                }
                None => self.stop(),
            }
            return;
        }

        // 8. Plain positional advancement.
        if let Some(next) = self.context.next_position() {
            if let Some(track) = self.context.track_at(next) {
                self.context.set_position(next);
                self.start_track(track, origin);
            }
        }
    }

    // ===== Engine event hooks (driven by the platform) =====

    /// Progress tick: refresh elapsed/duration and run the preview gate.
    pub async fn on_progress_tick(&mut self) {
        let Some(current) = self.current.clone() else {
            return;
        };
        if !self.engine.has_handle() {
            return;
        }
        let generation = self.generation;

        self.elapsed = self.engine.position();
        if let Some(duration) = self.engine.duration() {
            self.duration = duration;
        }

        if self.preview.check(&current, self.elapsed) {
            self.engine.pause();
            self.playing = false;
            self.events
                .emit(PlayerEvent::StateChanged { playing: false });

            let action = self.resolve_purchase_action(&current).await;
            if self.is_stale(generation) {
                return;
            }
            if matches!(action, PurchaseAction::Unavailable) {
                self.events.emit(PlayerEvent::Notice {
                    message: "Purchase options are not available for this track".to_string(),
                });
            }
            self.events.emit(PlayerEvent::PreviewExhausted {
                track_id: current.id.clone(),
                title: current.title.clone(),
                audio_url: current.audio_url.clone(),
                action,
            });
        }
    }

    /// Natural end of the current track.
    ///
    /// Does nothing if playback was explicitly stopped in the interim
    /// (current-track identity is the guard). Current-track identity is
    /// NOT cleared here - the UI keeps showing what just finished until
    /// continuation replaces it.
    pub async fn on_track_ended(&mut self) {
        let Some(current) = self.current.clone() else {
            return;
        };

        self.events.emit(PlayerEvent::TrackFinished {
            track_id: current.id.clone(),
        });

        if self.loop_enabled {
            self.engine.seek(Duration::ZERO);
            self.elapsed = Duration::ZERO;
            self.playing = self.engine.resume();
            self.events.emit(PlayerEvent::StateChanged {
                playing: self.playing,
            });
            return;
        }

        self.advance(PlayOrigin::AutomaticContinuation).await;
    }

    /// Mid-playback engine fault: report the broken track reference for
    /// server-side pruning (fire-and-forget) and fall back to paused.
    pub fn on_playback_error(&mut self) {
        let Some(current) = &self.current else {
            return;
        };
        self.playing = false;
        self.events
            .emit(PlayerEvent::StateChanged { playing: false });

        let catalog = Arc::clone(&self.catalog);
        let track_id = current.id.clone();
        tokio::spawn(async move {
            match catalog.report_invalid_track(&track_id).await {
                Ok(report) => info!(
                    track_id = %track_id,
                    removed = report.removed,
                    title = %report.track_title,
                    "reported broken track reference"
                ),
                Err(e) => warn!(track_id = %track_id, error = %e, "invalid-track report failed"),
            }
        });
    }

    // ===== Queue =====

    /// Append a track to the queue (idempotent by id). Returns whether
    /// it was added.
    pub fn queue_track(&mut self, track: Track) -> bool {
        if !track.is_playable() {
            warn!(track_id = %track.id, "refusing to queue track with no audio source");
            return false;
        }
        let added = self.queue.append(track);
        if added {
            self.emit_queue_changed();
        }
        added
    }

    /// Append many tracks (e.g. a whole album), skipping unplayable
    /// entries and ids already present. Returns how many were added.
    pub fn queue_tracks(&mut self, tracks: Vec<Track>) -> usize {
        let added = self
            .queue
            .append_many(tracks.into_iter().filter(Track::is_playable));
        if added > 0 {
            self.emit_queue_changed();
        }
        added
    }

    /// Remove a queued track by id.
    pub fn remove_from_queue(&mut self, track_id: &str) -> bool {
        let removed = self.queue.remove(track_id);
        if removed {
            self.emit_queue_changed();
        }
        removed
    }

    /// Clear the queue.
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
    }

    /// Drag-reorder a queue entry.
    pub fn move_queue_item(&mut self, from: usize, to: usize) -> Result<()> {
        self.queue.move_item(from, to)?;
        self.emit_queue_changed();
        Ok(())
    }

    /// Play a specific queued track immediately, removing it from the
    /// queue regardless of position. The active context is preserved
    /// rather than collapsing to Single.
    pub fn play_from_queue(&mut self, track_id: &str) {
        let Some(track) = self.queue.take(track_id) else {
            debug!(track_id = %track_id, "play_from_queue: track not in queue");
            return;
        };
        self.emit_queue_changed();
        self.start_track(track, PlayOrigin::UserInitiated);
    }

    /// Fetch recommendations seeded by the current track and append them
    /// to the queue, deduplicated against existing contents. Returns the
    /// number of tracks added, for UI feedback.
    pub async fn queue_recommended(&mut self) -> usize {
        let Some(current) = self.current.clone() else {
            self.events.emit(PlayerEvent::Notice {
                message: "Play something first to get recommendations".to_string(),
            });
            return 0;
        };

        let recommended = self
            .continuation
            .fetch(&current.id, self.recommendation_limit)
            .await;
        let added = self.queue.append_many(recommended);
        if added > 0 {
            self.emit_queue_changed();
        }
        added
    }

    // ===== Shuffle =====

    /// Fisher-Yates shuffle of the active sequence, remapping the
    /// current track's position. Sequences of one track or fewer emit
    /// [`PlayerEvent::ShuffleUnavailable`] instead.
    pub fn shuffle_context(&mut self) {
        if self.context.tracks().len() <= 1 {
            self.events.emit(PlayerEvent::ShuffleUnavailable);
            return;
        }

        let current_id = self
            .current
            .as_ref()
            .map(|t| t.id.clone())
            .unwrap_or_default();

        let track_count = match &mut self.context {
            PlaybackContext::Playlist {
                tracks, position, ..
            }
            | PlaybackContext::Album {
                tracks, position, ..
            } => {
                if let Some(new_index) = shuffle_tracks(tracks, &current_id) {
                    *position = new_index;
                }
                tracks.len()
            }
            PlaybackContext::Single => return,
        };

        self.events
            .emit(PlayerEvent::ContextShuffled { track_count });
    }

    // ===== Favorites & comments =====

    /// Toggle favorite membership for a track (optimistic local update,
    /// best-effort remote sync). Returns the new local membership.
    pub async fn toggle_favorite(&mut self, track_id: &str) -> bool {
        self.engagement.toggle_favorite(track_id).await
    }

    /// Seed the local favorites set after a backend load.
    pub fn set_favorites(&mut self, track_ids: impl IntoIterator<Item = String>) {
        self.engagement.set_favorites(track_ids);
    }

    /// Local favorite membership for a track.
    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.engagement.is_favorite(track_id)
    }

    /// The local favorites set, for list-view heart states.
    pub fn favorites(&self) -> &std::collections::HashSet<String> {
        self.engagement.favorites()
    }

    /// Fetch and thread a track's comments (empty on failure).
    pub async fn load_comments(&self, track_id: &str) -> Vec<CommentThread> {
        self.engagement.load_comments(track_id).await
    }

    /// Post a comment on a track.
    pub async fn post_comment(&self, track_id: &str, text: &str) -> Option<Comment> {
        self.engagement.post_comment(track_id, text).await
    }

    /// Post an `@username` reply on a track.
    pub async fn post_reply(&self, track_id: &str, username: &str, body: &str) -> Option<Comment> {
        self.engagement.post_reply(track_id, username, body).await
    }

    // ===== State for the presentation layer =====

    /// The current track, if any.
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Whether audio is playing.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Elapsed time in the current track.
    pub fn position(&self) -> Duration {
        self.elapsed
    }

    /// Duration of the current track.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current volume (0.0 - 1.0).
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Current playback rate.
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    /// Whether the per-track loop flag is set.
    pub fn loop_enabled(&self) -> bool {
        self.loop_enabled
    }

    /// Whether the player UI is minimized.
    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// The queued tracks, in play order.
    pub fn queue(&self) -> &[Track] {
        self.queue.tracks()
    }

    /// The active playback context.
    pub fn context(&self) -> &PlaybackContext {
        &self.context
    }

    /// Display name of the active context, if it has one.
    pub fn context_name(&self) -> Option<&str> {
        self.context.display_name()
    }

    /// Subscribe to player events. Dropping the receiver unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.events.subscribe()
    }

    // ===== Internals =====

    /// Load and start a track, updating session state.
    ///
    /// A user-initiated start expands the UI; automatic continuation
    /// leaves the minimized flag alone. Unplayable tracks and backend
    /// open failures degrade to a logged no-op / paused state.
    fn start_track(&mut self, track: Track, origin: PlayOrigin) {
        match self.engine.load(&track, self.volume, self.rate.as_f32()) {
            Ok(started) => {
                self.generation = self.generation.wrapping_add(1);
                self.preview.reset();
                self.elapsed = Duration::ZERO;
                self.duration = self
                    .engine
                    .duration()
                    .or_else(|| {
                        track
                            .duration_secs
                            .filter(|d| d.is_finite() && *d > 0.0)
                            .map(Duration::from_secs_f64)
                    })
                    .unwrap_or(Duration::ZERO);
                self.playing = started;
                if origin == PlayOrigin::UserInitiated {
                    self.minimized = false;
                }

                self.engagement.note_track_started(&track.id);
                self.events.emit(PlayerEvent::TrackStarted {
                    track_id: track.id.clone(),
                    origin,
                });
                self.events.emit(PlayerEvent::StateChanged { playing: started });
                self.current = Some(track);
            }
            Err(PlayerError::UnplayableTrack(id)) => {
                // Callers filter upstream; a slip-through is a no-op.
                warn!(track_id = %id, "start_track skipped unplayable track");
            }
            Err(e) => {
                warn!(track_id = %track.id, error = %e, "failed to open audio source, staying paused");
                self.generation = self.generation.wrapping_add(1);
                self.preview.reset();
                self.elapsed = Duration::ZERO;
                self.duration = Duration::ZERO;
                self.playing = false;
                self.current = Some(track);
                self.events
                    .emit(PlayerEvent::StateChanged { playing: false });
            }
        }
    }

    /// Whether an async result captured at `generation` is stale: the
    /// session was stopped or a newer track was loaded while the fetch
    /// was in flight.
    fn is_stale(&self, generation: u64) -> bool {
        self.generation != generation || self.current.is_none()
    }

    /// Filter unplayable tracks and clamp the start index.
    fn sanitize_sequence(tracks: Vec<Track>, start: usize) -> Option<(Vec<Track>, usize)> {
        let total = tracks.len();
        let playable: Vec<Track> = tracks.into_iter().filter(Track::is_playable).collect();
        if playable.len() != total {
            warn!(
                dropped = total - playable.len(),
                "dropped tracks with empty audio sources from sequence"
            );
        }
        if playable.is_empty() {
            warn!("refusing to play an empty sequence");
            return None;
        }
        let start = start.min(playable.len() - 1);
        Some((playable, start))
    }

    /// Resolve how a gated paid track can be purchased: the payment
    /// flow when a price is set, otherwise the creator's contact handle
    /// for an out-of-band conversation.
    async fn resolve_purchase_action(&self, track: &Track) -> PurchaseAction {
        if let Monetization::Paid { price: Some(price) } = &track.monetization {
            return PurchaseAction::Checkout {
                price: price.clone(),
            };
        }

        if let Some(handle) = &track.contact_handle {
            return PurchaseAction::ContactCreator {
                handle: handle.clone(),
            };
        }

        if let Some(creator_id) = &track.creator_id {
            match self.creators.creator_contact(creator_id).await {
                Ok(Some(handle)) => return PurchaseAction::ContactCreator { handle },
                Ok(None) => {}
                Err(e) => {
                    warn!(creator_id = %creator_id, error = %e, "creator contact lookup failed");
                }
            }
        }

        PurchaseAction::Unavailable
    }

    fn emit_queue_changed(&self) {
        self.events.emit(PlayerEvent::QueueChanged {
            length: self.queue.len(),
        });
    }
}
