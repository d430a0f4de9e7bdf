//! Play queue
//!
//! An explicit, user-visible, user-editable FIFO of upcoming tracks,
//! independent of the playback context. When non-empty it takes priority
//! over context-derived continuation (subject to the resolution order in
//! [`crate::Player`]).

use vibe_core::Track;

/// User-ordered list of upcoming tracks.
///
/// Entries are unique by track id; appends of already-queued tracks are
/// ignored.
#[derive(Debug, Clone, Default)]
pub struct PlayQueue {
    items: Vec<Track>,
}

impl PlayQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a track. No-op if a track with the same id is already
    /// queued. Returns whether the track was added.
    pub fn append(&mut self, track: Track) -> bool {
        if self.contains(&track.id) {
            return false;
        }
        self.items.push(track);
        true
    }

    /// Append many tracks, skipping any already present by id.
    /// Returns how many were added.
    pub fn append_many(&mut self, tracks: impl IntoIterator<Item = Track>) -> usize {
        tracks.into_iter().filter(|t| self.append(t.clone())).count()
    }

    /// Remove a track by id. Returns whether it was present.
    pub fn remove(&mut self, track_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != track_id);
        self.items.len() != before
    }

    /// Clear the queue.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Move an entry from one index to another (drag-reorder semantics:
    /// remove from the source index, insert at the destination index).
    pub fn move_item(&mut self, from: usize, to: usize) -> crate::Result<()> {
        if from >= self.items.len() {
            return Err(crate::PlayerError::IndexOutOfBounds(from));
        }
        if to >= self.items.len() {
            return Err(crate::PlayerError::IndexOutOfBounds(to));
        }
        let track = self.items.remove(from);
        self.items.insert(to, track);
        Ok(())
    }

    /// Dequeue the head of the queue.
    pub fn dequeue(&mut self) -> Option<Track> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    /// Remove and return a specific entry by id, regardless of position.
    pub fn take(&mut self, track_id: &str) -> Option<Track> {
        let index = self.items.iter().position(|t| t.id == track_id)?;
        Some(self.items.remove(index))
    }

    /// Whether a track id is queued.
    pub fn contains(&self, track_id: &str) -> bool {
        self.items.iter().any(|t| t.id == track_id)
    }

    /// The queued tracks, in play order.
    pub fn tracks(&self) -> &[Track] {
        &self.items
    }

    /// Number of queued tracks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn ids(queue: &PlayQueue) -> Vec<&str> {
        queue.tracks().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn append_is_idempotent_by_id() {
        let mut queue = PlayQueue::new();
        assert!(queue.append(track("1")));
        assert!(queue.append(track("2")));
        assert!(!queue.append(track("1")));

        assert_eq!(ids(&queue), vec!["1", "2"]);
    }

    #[test]
    fn append_many_skips_existing() {
        let mut queue = PlayQueue::new();
        queue.append(track("1"));

        let added = queue.append_many(vec![track("1"), track("2"), track("3"), track("2")]);
        assert_eq!(added, 2);
        assert_eq!(ids(&queue), vec!["1", "2", "3"]);
    }

    #[test]
    fn remove_by_id() {
        let mut queue = PlayQueue::new();
        queue.append_many(vec![track("1"), track("2"), track("3")]);

        assert!(queue.remove("2"));
        assert!(!queue.remove("2"));
        assert_eq!(ids(&queue), vec!["1", "3"]);
    }

    #[test]
    fn move_item_reorders() {
        let mut queue = PlayQueue::new();
        queue.append_many(vec![track("1"), track("2"), track("3")]);

        queue.move_item(0, 2).unwrap();
        assert_eq!(ids(&queue), vec!["2", "3", "1"]);

        queue.move_item(2, 0).unwrap();
        assert_eq!(ids(&queue), vec!["1", "2", "3"]);
    }

    #[test]
    fn move_item_out_of_bounds() {
        let mut queue = PlayQueue::new();
        queue.append(track("1"));

        assert!(queue.move_item(0, 1).is_err());
        assert!(queue.move_item(3, 0).is_err());
    }

    #[test]
    fn dequeue_is_fifo() {
        let mut queue = PlayQueue::new();
        queue.append_many(vec![track("1"), track("2")]);

        assert_eq!(queue.dequeue().unwrap().id, "1");
        assert_eq!(queue.dequeue().unwrap().id, "2");
        assert!(queue.dequeue().is_none());
    }

    #[test]
    fn take_removes_from_any_position() {
        let mut queue = PlayQueue::new();
        queue.append_many(vec![track("1"), track("2"), track("3")]);

        let taken = queue.take("2").unwrap();
        assert_eq!(taken.id, "2");
        assert_eq!(ids(&queue), vec!["1", "3"]);
        assert!(queue.take("2").is_none());
    }
}
