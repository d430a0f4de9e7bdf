//! Collaborator contracts consumed by the playback core
//!
//! These traits are the narrow seams to the out-of-scope backend
//! services. The host application provides the implementations; the
//! playback core treats every failure as a control-flow fallback, never
//! a user-facing error.

use crate::error::Result;
use crate::types::{Comment, Track};
use async_trait::async_trait;

/// Supplies recommended tracks for automatic continuation.
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Fetch up to `limit` recommended tracks seeded by a track id.
    ///
    /// Transport failure is treated by callers exactly like an empty
    /// result.
    async fn recommended_tracks(&self, seed_track_id: &str, limit: usize) -> Result<Vec<Track>>;
}

/// Listening-activity and social side effects.
///
/// All of these are best-effort from the playback core's point of view:
/// failures are logged and never interrupt playback.
#[async_trait]
pub trait EngagementService: Send + Sync {
    /// Record a track in the user's recently-played list.
    async fn add_recently_played(&self, track_id: &str) -> Result<()>;

    /// Increment the server-side play counter for a track.
    async fn increment_play_count(&self, track_id: &str) -> Result<()>;

    /// Add a track to the user's favorites. Returns the resulting
    /// membership as reported by the backend.
    async fn add_favorite(&self, track_id: &str) -> Result<bool>;

    /// Remove a track from the user's favorites.
    async fn remove_favorite(&self, track_id: &str) -> Result<bool>;

    /// Fetch the flat comment list for a track.
    async fn comments_for_track(&self, track_id: &str) -> Result<Vec<Comment>>;

    /// Post a comment (or an `@username`-prefixed reply) on a track.
    async fn add_comment(&self, track_id: &str, text: &str) -> Result<Comment>;
}

/// Outcome of reporting a broken track reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidTrackReport {
    /// Whether the backend removed the track
    pub removed: bool,

    /// Title of the reported track, for logging
    pub track_title: String,
}

/// Server-side cleanup of systemically broken media references.
#[async_trait]
pub trait CatalogMaintenance: Send + Sync {
    /// Report a track whose playback failed so the backend can prune it.
    async fn report_invalid_track(&self, track_id: &str) -> Result<InvalidTrackReport>;
}

/// Lookup of creator contact details for the out-of-band purchase flow.
#[async_trait]
pub trait CreatorDirectory: Send + Sync {
    /// Fetch the contact handle for a creator, if they published one.
    async fn creator_contact(&self, creator_id: &str) -> Result<Option<String>>;
}
