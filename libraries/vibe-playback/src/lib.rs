//! Vibe Player - Playback Orchestration
//!
//! Platform-agnostic playback orchestration for Vibe Player.
//!
//! This crate provides:
//! - Playback lifecycle (play/pause/resume/stop, seek, volume, rate, loop)
//! - Playback contexts (single track, playlist, album) with positional
//!   advancement and wraparound previous
//! - A user-editable play queue that takes priority over context
//!   continuation
//! - Recommendation-driven continuation when a sequence runs out
//! - A 40-second preview gate for paid tracks with purchase resolution
//! - Optimistic favorites, recently-played and play-count sync, and
//!   `@username` comment threading
//! - A typed event stream for UI synchronization
//!
//! # Architecture
//!
//! `vibe-playback` is completely platform-agnostic. The actual audio
//! element and the backend services are provided via traits:
//! [`AudioBackend`] opens per-track [`AudioOutput`] handles, and the
//! collaborator traits in `vibe-core` (recommendations, engagement,
//! catalog maintenance, creator directory) supply the remote side. The
//! platform drives time by calling [`Player::on_progress_tick`],
//! [`Player::on_track_ended`] and [`Player::on_playback_error`].
//!
//! # Example
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use vibe_playback::{Player, PlayerConfig};
//! # fn collaborators() -> (
//! #     Box<dyn vibe_playback::AudioBackend>,
//! #     Arc<dyn vibe_core::RecommendationSource>,
//! #     Arc<dyn vibe_core::EngagementService>,
//! #     Arc<dyn vibe_core::CatalogMaintenance>,
//! #     Arc<dyn vibe_core::CreatorDirectory>,
//! # ) { unimplemented!() }
//! # async fn demo(tracks: Vec<vibe_core::Track>) {
//! let (backend, recommendations, engagement, catalog, creators) = collaborators();
//! let mut player = Player::new(
//!     backend,
//!     recommendations,
//!     engagement,
//!     catalog,
//!     creators,
//!     PlayerConfig::default(),
//! );
//!
//! let _events = player.subscribe();
//! player.play_playlist(tracks, "Morning Mix", 0);
//!
//! // The platform's timer and media callbacks drive the rest:
//! player.on_progress_tick().await;
//! player.on_track_ended().await;
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod context;
pub mod continuation;
pub mod controller;
pub mod engagement;
pub mod engine;
pub mod error;
pub mod events;
pub mod output;
pub mod preview;
pub mod queue;
pub mod shuffle;
pub mod types;

pub use context::PlaybackContext;
pub use controller::Player;
pub use error::{PlayerError, Result};
pub use events::{EventBus, PlayerEvent, PurchaseAction};
pub use output::{AudioBackend, AudioOutput};
pub use queue::PlayQueue;
pub use types::{PlayOrigin, PlaybackRate, PlayerConfig, PREVIEW_LIMIT};
