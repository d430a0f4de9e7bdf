//! Core domain types for Vibe Player

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A playable unit: a song, a beat, or a mix.
///
/// Tracks are created and owned by the backend; the playback core only
/// holds transient, session-scoped copies. Play/like counters are
/// display-only snapshots - authority lives server-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Stable track identifier from the backend
    pub id: String,

    /// Track title
    pub title: String,

    /// Display artist name
    pub artist: String,

    /// Cover image reference
    pub cover_url: String,

    /// Audio source reference. A track is playable only when this is a
    /// non-empty string; see [`Track::is_playable`].
    pub audio_url: String,

    /// Track duration in seconds, when the backend knows it
    pub duration_secs: Option<f64>,

    /// Owning creator identifier (optional)
    pub creator_id: Option<String>,

    /// Owning album identifier (optional)
    pub album_id: Option<String>,

    /// Display-only play counter
    pub play_count: u64,

    /// Display-only like counter
    pub like_count: u64,

    /// Media kind (song / beat / mix)
    pub kind: MediaKind,

    /// Monetization kind; paid tracks are subject to the preview gate
    pub monetization: Monetization,

    /// Creator contact handle, used only when a paid preview gate
    /// triggers an out-of-band purchase conversation
    pub contact_handle: Option<String>,
}

impl Track {
    /// Whether this track can be offered to the playback engine.
    ///
    /// Tracks with a missing or blank audio source must be filtered out
    /// before playback is attempted.
    pub fn is_playable(&self) -> bool {
        !self.audio_url.trim().is_empty()
    }

    /// Whether this track is paid content subject to the preview gate.
    pub fn is_paid(&self) -> bool {
        matches!(self.monetization, Monetization::Paid { .. })
    }
}

/// Media kind of a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// Regular track
    Song,

    /// Monetizable instrumental
    Beat,

    /// DJ mix / long-form set
    Mix,
}

/// Monetization kind of a track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Monetization {
    /// Free streaming, no preview limit
    Free,

    /// Paid content. Price information may be missing, in which case
    /// the purchase flow degrades to the creator's contact handle.
    Paid {
        /// Asking price, when the creator has set one
        price: Option<Price>,
    },
}

/// Price of a paid track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the given currency
    pub amount: f64,

    /// ISO currency code (e.g. "USD")
    pub currency: String,
}

/// A single comment on a track.
///
/// Replies are encoded as ordinary comments whose text begins with
/// `@<username>`; see [`crate::comments::build_threads`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment identifier from the backend
    pub id: String,

    /// Author username
    pub author: String,

    /// Comment body
    pub text: String,

    /// When the comment was posted
    pub posted_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(audio_url: &str) -> Track {
        Track {
            id: "t1".to_string(),
            title: "Test Track".to_string(),
            artist: "Test Artist".to_string(),
            cover_url: "https://cdn.example.com/cover.jpg".to_string(),
            audio_url: audio_url.to_string(),
            duration_secs: Some(180.0),
            creator_id: Some("c1".to_string()),
            album_id: None,
            play_count: 0,
            like_count: 0,
            kind: MediaKind::Song,
            monetization: Monetization::Free,
            contact_handle: None,
        }
    }

    #[test]
    fn playable_requires_non_empty_audio_url() {
        assert!(track("https://cdn.example.com/a.mp3").is_playable());
        assert!(!track("").is_playable());
        assert!(!track("   ").is_playable());
    }

    #[test]
    fn paid_detection() {
        let mut t = track("https://cdn.example.com/a.mp3");
        assert!(!t.is_paid());

        t.monetization = Monetization::Paid { price: None };
        assert!(t.is_paid());

        t.monetization = Monetization::Paid {
            price: Some(Price {
                amount: 19.99,
                currency: "USD".to_string(),
            }),
        };
        assert!(t.is_paid());
    }
}
