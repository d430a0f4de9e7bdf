//! Continuation strategy - recommendation fallback
//!
//! Wraps the external recommendation call so that transport failure is
//! indistinguishable from an empty result for control-flow purposes.
//! Each call site (album completion, single-context continuation,
//! playlist exhaustion, queue extension) applies its own post-processing.

use std::sync::Arc;
use tracing::{debug, warn};
use vibe_core::{RecommendationSource, Track};

/// Recommendation-fetch wrapper used by the player's continuation paths.
pub struct Continuation {
    source: Arc<dyn RecommendationSource>,
}

impl Continuation {
    /// Wrap a recommendation source.
    pub fn new(source: Arc<dyn RecommendationSource>) -> Self {
        Self { source }
    }

    /// Fetch up to `limit` recommended tracks seeded by a track id.
    ///
    /// Transport failure is logged and returned as an empty batch.
    /// Unplayable tracks are filtered out before they can reach the
    /// engine.
    pub async fn fetch(&self, seed_track_id: &str, limit: usize) -> Vec<Track> {
        let tracks = match self.source.recommended_tracks(seed_track_id, limit).await {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!(seed = %seed_track_id, error = %e, "recommendation fetch failed, treating as empty");
                return Vec::new();
            }
        };

        let total = tracks.len();
        let playable: Vec<Track> = tracks.into_iter().filter(Track::is_playable).collect();
        if playable.len() != total {
            debug!(
                seed = %seed_track_id,
                dropped = total - playable.len(),
                "dropped recommendations with empty audio sources"
            );
        }
        playable
    }
}
