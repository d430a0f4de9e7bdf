//! Playback context
//!
//! Describes how the currently playing track relates to its neighbors:
//! played in isolation, inside a named playlist, or inside an album.
//! Exactly one context is active at a time; switching contexts fully
//! replaces the prior positional index.

use serde::{Deserialize, Serialize};
use vibe_core::Track;

/// The enclosing sequence semantics governing next/previous resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackContext {
    /// The track was played in isolation (e.g. from search results);
    /// "next" is resolved by the continuation strategy, not by index.
    Single,

    /// An ordered sequence with a display name; next/previous are
    /// positional.
    Playlist {
        /// Display name shown by the UI
        name: String,
        /// The ordered sequence
        tracks: Vec<Track>,
        /// Index of the current track within `tracks`
        position: usize,
    },

    /// An ordered sequence tied to an album. Behaves like a playlist,
    /// but completion converts it (one way) into a playlist seeded with
    /// recommendations so continued playback does not re-trigger
    /// album-specific UI.
    Album {
        /// Album identifier
        id: String,
        /// Album display name
        name: String,
        /// The ordered sequence
        tracks: Vec<Track>,
        /// Index of the current track within `tracks`
        position: usize,
        /// Set once the last album track has finished
        complete: bool,
    },
}

impl Default for PlaybackContext {
    fn default() -> Self {
        PlaybackContext::Single
    }
}

impl PlaybackContext {
    /// Display name for the UI heading, if the context has one.
    pub fn display_name(&self) -> Option<&str> {
        match self {
            PlaybackContext::Single => None,
            PlaybackContext::Playlist { name, .. } | PlaybackContext::Album { name, .. } => {
                Some(name)
            }
        }
    }

    /// The active sequence. Empty for a single-track context.
    pub fn tracks(&self) -> &[Track] {
        match self {
            PlaybackContext::Single => &[],
            PlaybackContext::Playlist { tracks, .. } | PlaybackContext::Album { tracks, .. } => {
                tracks
            }
        }
    }

    /// Current positional index within the sequence.
    pub fn position(&self) -> Option<usize> {
        match self {
            PlaybackContext::Single => None,
            PlaybackContext::Playlist { position, .. }
            | PlaybackContext::Album { position, .. } => Some(*position),
        }
    }

    /// Update the positional index (no-op for single-track context).
    pub fn set_position(&mut self, new_position: usize) {
        match self {
            PlaybackContext::Single => {}
            PlaybackContext::Playlist { position, .. }
            | PlaybackContext::Album { position, .. } => *position = new_position,
        }
    }

    /// Index of the next track, if one exists after the current position.
    pub fn next_position(&self) -> Option<usize> {
        let position = self.position()?;
        let len = self.tracks().len();
        if position + 1 < len {
            Some(position + 1)
        } else {
            None
        }
    }

    /// Index of the previous track, wrapping to the end of the sequence.
    pub fn previous_position(&self) -> Option<usize> {
        let position = self.position()?;
        let len = self.tracks().len();
        if len == 0 {
            return None;
        }
        Some(if position == 0 { len - 1 } else { position - 1 })
    }

    /// Track at a given index, cloned for loading.
    pub fn track_at(&self, index: usize) -> Option<Track> {
        self.tracks().get(index).cloned()
    }

    /// Whether the current position is at (or past) the end of the
    /// sequence.
    pub fn is_exhausted(&self) -> bool {
        match self.position() {
            Some(position) => position + 1 >= self.tracks().len(),
            None => true,
        }
    }

    /// Append tracks to the active sequence, returning the index of the
    /// first appended track. No-op (returns `None`) for a single-track
    /// context or an empty batch.
    pub fn append_tracks(&mut self, extra: Vec<Track>) -> Option<usize> {
        if extra.is_empty() {
            return None;
        }
        match self {
            PlaybackContext::Single => None,
            PlaybackContext::Playlist { tracks, .. } | PlaybackContext::Album { tracks, .. } => {
                let first = tracks.len();
                tracks.extend(extra);
                Some(first)
            }
        }
    }

    /// Mark the album complete and convert this context into a playlist
    /// extended with the recommended tracks. Returns the index of the
    /// first appended track.
    ///
    /// This is the only transition out of Album, and it never reverses.
    /// Callers must only invoke it on an album context with at least one
    /// recommendation in hand.
    pub fn convert_album_to_playlist(&mut self, recommended: Vec<Track>) -> Option<usize> {
        let PlaybackContext::Album {
            name,
            tracks,
            position,
            ..
        } = self
        else {
            return None;
        };
        if recommended.is_empty() {
            return None;
        }

        let mut all = std::mem::take(tracks);
        let first = all.len();
        all.extend(recommended);

        *self = PlaybackContext::Playlist {
            name: std::mem::take(name),
            tracks: all,
            position: *position,
        };
        Some(first)
    }
}
