//! Shuffle for the active sequence

use rand::seq::SliceRandom;
use rand::thread_rng;
use vibe_core::Track;

/// Fisher-Yates shuffle of a track sequence.
///
/// Returns the new index of `current_track_id` so the caller can remap
/// the positional index after shuffling.
pub fn shuffle_tracks(tracks: &mut [Track], current_track_id: &str) -> Option<usize> {
    let mut rng = thread_rng();
    tracks.shuffle(&mut rng);
    tracks.iter().position(|t| t.id == current_track_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use vibe_core::{MediaKind, Monetization};

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            title: format!("Track {id}"),
            artist: "Artist".to_string(),
            cover_url: String::new(),
            audio_url: format!("https://cdn/{id}.mp3"),
            duration_secs: Some(180.0),
            creator_id: None,
            album_id: None,
            play_count: 0,
            like_count: 0,
            kind: MediaKind::Song,
            monetization: Monetization::Free,
            contact_handle: None,
        }
    }

    #[test]
    fn preserves_all_tracks_and_finds_current() {
        let mut tracks: Vec<Track> = (0..10).map(|i| track(&i.to_string())).collect();

        let new_index = shuffle_tracks(&mut tracks, "4").unwrap();
        assert_eq!(tracks[new_index].id, "4");

        let ids: HashSet<String> = tracks.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn missing_current_yields_none() {
        let mut tracks = vec![track("1"), track("2")];
        assert!(shuffle_tracks(&mut tracks, "zz").is_none());
        assert_eq!(tracks.len(), 2);
    }
}
