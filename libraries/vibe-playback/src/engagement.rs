//! Favorites and listening-activity sync
//!
//! Fire-and-forget side effects keyed off play and favorite actions:
//! recently-played notifications on every start, play-count increments
//! deduplicated per track id per session, and optimistic favorite
//! toggles. Remote failures are logged and never interrupt playback or
//! roll back local state.

use crate::events::{EventBus, PlayerEvent};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, warn};
use vibe_core::{build_threads, reply_text, Comment, CommentThread, EngagementService};

/// Session-scoped engagement state and remote sync.
pub struct EngagementSync {
    service: Arc<dyn EngagementService>,
    favorites: HashSet<String>,
    counted: HashSet<String>,
    events: Arc<EventBus>,
}

impl EngagementSync {
    /// Create an empty session over an engagement service.
    pub fn new(service: Arc<dyn EngagementService>, events: Arc<EventBus>) -> Self {
        Self {
            service,
            favorites: HashSet::new(),
            counted: HashSet::new(),
            events,
        }
    }

    /// Record a successful track start: notify recently-played
    /// best-effort, and increment the play counter once per track id
    /// per session.
    pub fn note_track_started(&mut self, track_id: &str) {
        let service = Arc::clone(&self.service);
        let id = track_id.to_string();
        tokio::spawn(async move {
            if let Err(e) = service.add_recently_played(&id).await {
                warn!(track_id = %id, error = %e, "recently-played update failed");
            }
        });

        if self.counted.insert(track_id.to_string()) {
            let service = Arc::clone(&self.service);
            let id = track_id.to_string();
            tokio::spawn(async move {
                if let Err(e) = service.increment_play_count(&id).await {
                    warn!(track_id = %id, error = %e, "play-count increment failed");
                }
            });
        } else {
            debug!(track_id = %track_id, "play count already recorded this session");
        }
    }

    /// Toggle favorite membership: flip the local set immediately, then
    /// sync the backend. A remote failure keeps the optimistic local
    /// change. Returns the new local membership.
    pub async fn toggle_favorite(&mut self, track_id: &str) -> bool {
        let favorited = if self.favorites.remove(track_id) {
            false
        } else {
            self.favorites.insert(track_id.to_string());
            true
        };

        self.events.emit(PlayerEvent::FavoriteChanged {
            track_id: track_id.to_string(),
            favorited,
        });

        let result = if favorited {
            self.service.add_favorite(track_id).await
        } else {
            self.service.remove_favorite(track_id).await
        };
        if let Err(e) = result {
            // Local state intentionally stays optimistic.
            warn!(track_id = %track_id, favorited, error = %e, "favorite sync failed");
        }

        favorited
    }

    /// Seed the local favorites set after a backend load.
    pub fn set_favorites(&mut self, track_ids: impl IntoIterator<Item = String>) {
        self.favorites = track_ids.into_iter().collect();
    }

    /// Local favorite membership for a track.
    pub fn is_favorite(&self, track_id: &str) -> bool {
        self.favorites.contains(track_id)
    }

    /// The local favorites set.
    pub fn favorites(&self) -> &HashSet<String> {
        &self.favorites
    }

    /// Fetch a track's comments and rebuild the two-level threads.
    /// A fetch failure is logged and returned as an empty list.
    pub async fn load_comments(&self, track_id: &str) -> Vec<CommentThread> {
        match self.service.comments_for_track(track_id).await {
            Ok(comments) => build_threads(&comments),
            Err(e) => {
                warn!(track_id = %track_id, error = %e, "comment fetch failed");
                Vec::new()
            }
        }
    }

    /// Post a comment. Failure is logged and reported as `None`.
    pub async fn post_comment(&self, track_id: &str, text: &str) -> Option<Comment> {
        match self.service.add_comment(track_id, text).await {
            Ok(comment) => Some(comment),
            Err(e) => {
                warn!(track_id = %track_id, error = %e, "comment post failed");
                None
            }
        }
    }

    /// Post a reply using the `@username` convention.
    pub async fn post_reply(&self, track_id: &str, username: &str, body: &str) -> Option<Comment> {
        self.post_comment(track_id, &reply_text(username, body)).await
    }
}
