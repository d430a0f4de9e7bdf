//! Player events
//!
//! Typed event stream for UI synchronization, broadcast over a
//! `tokio::sync::broadcast` channel. Subscribers receive every event
//! emitted while their receiver is alive; dropping the receiver
//! unsubscribes. This replaces ad hoc global UI events with typed
//! payloads owned by the player.

use crate::types::{PlayOrigin, PlaybackRate};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use vibe_core::Price;

/// Default broadcast buffer size.
const EVENT_BUFFER: usize = 64;

/// Events emitted by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// A track began playing
    TrackStarted {
        /// Id of the started track
        track_id: String,
        /// Whether the user asked for it or the player continued on its
        /// own; the UI only auto-expands for user-initiated starts
        origin: PlayOrigin,
    },

    /// Play/pause state changed
    StateChanged {
        /// Whether audio is now playing
        playing: bool,
    },

    /// A track finished playing naturally
    TrackFinished {
        /// Id of the finished track
        track_id: String,
    },

    /// Playback was explicitly stopped (or all continuation fallbacks
    /// were exhausted); current-track identity is now cleared
    Stopped,

    /// Queue contents changed (append/remove/reorder/dequeue)
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// The last track of an album finished
    AlbumCompleted {
        /// Id of the completed album
        album_id: String,
    },

    /// The active context changed (new play request or album-to-playlist
    /// conversion)
    ContextChanged {
        /// Display name for the UI heading, if any
        display_name: Option<String>,
    },

    /// A paid track hit the free-preview limit and playback was paused
    PreviewExhausted {
        /// Id of the gated track
        track_id: String,
        /// Title for the purchase dialog
        title: String,
        /// Audio source reference, for the payment UI's preview player
        audio_url: String,
        /// How the purchase can proceed
        action: PurchaseAction,
    },

    /// Favorite membership toggled (optimistic local state)
    FavoriteChanged {
        /// Affected track id
        track_id: String,
        /// New membership
        favorited: bool,
    },

    /// The active sequence was shuffled
    ContextShuffled {
        /// Number of tracks in the shuffled sequence
        track_count: usize,
    },

    /// Shuffle was requested but the sequence has one track or fewer
    ShuffleUnavailable,

    /// Volume changed
    VolumeChanged {
        /// New volume (0.0 - 1.0)
        volume: f32,
    },

    /// Playback rate changed
    RateChanged {
        /// New rate
        rate: PlaybackRate,
    },

    /// Per-track loop flag toggled
    LoopChanged {
        /// Whether looping is enabled
        enabled: bool,
    },

    /// Alert-style notice for degraded paths (e.g. purchase flow
    /// unavailable)
    Notice {
        /// Human-readable message
        message: String,
    },
}

/// How a gated paid track can be purchased.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PurchaseAction {
    /// The track has a price; hand off to the payment flow
    Checkout {
        /// Asking price
        price: Price,
    },

    /// No price is set; surface the creator's contact handle for an
    /// out-of-band purchase conversation
    ContactCreator {
        /// Contact handle from the creator directory
        handle: String,
    },

    /// Neither price nor contact is available
    Unavailable,
}

/// Broadcast bus for [`PlayerEvent`]s.
pub struct EventBus {
    sender: broadcast::Sender<PlayerEvent>,
}

impl EventBus {
    /// Create a bus with the default buffer size.
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Self { sender }
    }

    /// Subscribe to all future events. Dropping the receiver
    /// unsubscribes.
    pub fn subscribe(&self) -> broadcast::Receiver<PlayerEvent> {
        self.sender.subscribe()
    }

    /// Emit an event. A send with no live subscribers is not an error.
    pub fn emit(&self, event: PlayerEvent) {
        let _ = self.sender.send(event);
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.emit(PlayerEvent::Stopped);
    }

    #[test]
    fn subscribers_receive_events() {
        let bus = EventBus::new();
        let mut rx = bus.subscribe();

        bus.emit(PlayerEvent::QueueChanged { length: 3 });
        bus.emit(PlayerEvent::Stopped);

        assert!(matches!(
            rx.try_recv().unwrap(),
            PlayerEvent::QueueChanged { length: 3 }
        ));
        assert!(matches!(rx.try_recv().unwrap(), PlayerEvent::Stopped));
    }

    #[test]
    fn dropped_receiver_unsubscribes() {
        let bus = EventBus::new();
        let rx = bus.subscribe();
        drop(rx);
        bus.emit(PlayerEvent::Stopped);
    }
}
