//! Property-based tests for queue and shuffle invariants
//!
//! Uses proptest to verify invariants across many random inputs.

use proptest::prelude::*;
use std::collections::HashSet;
use vibe_core::{MediaKind, Monetization, Track};
use vibe_playback::shuffle::shuffle_tracks;
use vibe_playback::PlayQueue;

// ===== Helpers =====

fn arbitrary_track() -> impl Strategy<Value = Track> {
    (
        "[a-z0-9]{1,10}",  // id
        "[A-Za-z ]{1,30}", // title
        "[A-Za-z ]{1,20}", // artist
        1.0f64..600.0,     // duration in seconds
    )
        .prop_map(|(id, title, artist, duration)| Track {
            audio_url: format!("https://cdn/{id}.mp3"),
            id,
            title,
            artist,
            cover_url: String::new(),
            duration_secs: Some(duration),
            creator_id: None,
            album_id: None,
            play_count: 0,
            like_count: 0,
            kind: MediaKind::Song,
            monetization: Monetization::Free,
            contact_handle: None,
        })
}

fn arbitrary_tracks() -> impl Strategy<Value = Vec<Track>> {
    prop::collection::vec(arbitrary_track(), 1..50)
}

// ===== Property Tests =====

proptest! {
    /// Shuffling preserves the multiset of tracks and remaps the
    /// current track's index to wherever it landed.
    #[test]
    fn shuffle_preserves_tracks_and_remaps_current(
        tracks in arbitrary_tracks(),
        current in 0usize..50,
    ) {
        let current = current % tracks.len();
        let current_id = tracks[current].id.clone();

        let mut shuffled = tracks.clone();
        let new_index = shuffle_tracks(&mut shuffled, &current_id);

        let mut before: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        let mut after: Vec<&str> = shuffled.iter().map(|t| t.id.as_str()).collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after, "shuffle changed the track multiset");

        let new_index = new_index.expect("current track id was present");
        prop_assert!(new_index < shuffled.len());
        prop_assert_eq!(&shuffled[new_index].id, &current_id);
    }

    /// Shuffling with an id that is not in the sequence still keeps the
    /// contents and reports no position.
    #[test]
    fn shuffle_with_unknown_current_returns_none(tracks in arbitrary_tracks()) {
        let mut shuffled = tracks.clone();
        let new_index = shuffle_tracks(&mut shuffled, "definitely-not-a-track-id");

        prop_assert!(new_index.is_none());
        prop_assert_eq!(tracks.len(), shuffled.len());
    }

    /// Queue length stays consistent under random edit sequences, and
    /// ids stay unique throughout.
    #[test]
    fn queue_length_and_uniqueness_under_random_edits(
        tracks in arbitrary_tracks(),
        operations in prop::collection::vec((0u8..4, 0usize..50), 1..30),
    ) {
        let mut queue = PlayQueue::new();

        for (op, index) in operations {
            let len_before = queue.len();
            match op {
                0 => {
                    let track = tracks[index % tracks.len()].clone();
                    let was_queued = queue.contains(&track.id);
                    let added = queue.append(track);
                    prop_assert_eq!(added, !was_queued);
                    prop_assert_eq!(queue.len(), len_before + usize::from(added));
                }
                1 => {
                    let popped = queue.dequeue();
                    prop_assert_eq!(popped.is_some(), len_before > 0);
                    prop_assert_eq!(queue.len(), len_before.saturating_sub(1));
                }
                2 => {
                    let id = tracks[index % tracks.len()].id.clone();
                    let was_queued = queue.contains(&id);
                    prop_assert_eq!(queue.remove(&id), was_queued);
                    prop_assert_eq!(queue.len(), len_before - usize::from(was_queued));
                }
                _ => {
                    if len_before > 1 {
                        queue.move_item(index % len_before, (index + 1) % len_before).unwrap();
                        prop_assert_eq!(queue.len(), len_before);
                    }
                }
            }

            let ids: HashSet<&str> = queue.tracks().iter().map(|t| t.id.as_str()).collect();
            prop_assert_eq!(ids.len(), queue.len(), "queue ids must stay unique");
        }
    }

    /// Dequeue drains the queue in append order, skipping duplicates.
    #[test]
    fn dequeue_respects_append_order(tracks in arbitrary_tracks()) {
        let mut queue = PlayQueue::new();
        queue.append_many(tracks.clone());

        let mut seen = HashSet::new();
        let mut expected: Vec<&str> = Vec::new();
        for track in &tracks {
            if seen.insert(track.id.as_str()) {
                expected.push(track.id.as_str());
            }
        }

        let mut drained = Vec::new();
        while let Some(track) = queue.dequeue() {
            drained.push(track.id);
        }
        let drained: Vec<&str> = drained.iter().map(String::as_str).collect();
        prop_assert_eq!(drained, expected);
    }
}
