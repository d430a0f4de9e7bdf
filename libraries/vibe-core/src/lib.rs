//! Vibe Player Core
//!
//! Domain types, collaborator contracts, and error handling shared by the
//! Vibe Player playback stack.
//!
//! This crate defines:
//! - **Domain Types**: [`Track`], [`Comment`], monetization metadata
//! - **Collaborator Traits**: the narrow contracts the playback core
//!   consumes from backend services ([`RecommendationSource`],
//!   [`EngagementService`], [`CatalogMaintenance`], [`CreatorDirectory`])
//! - **Error Handling**: unified [`VibeError`] and [`Result`] types
//! - **Comment threading**: reconstruction of two-level comment threads
//!   from the `@username` reply convention
//!
//! The playback orchestrator itself lives in `vibe-playback`; backend
//! implementations of the collaborator traits live with the host
//! application and are out of scope here.

#![forbid(unsafe_code)]

pub mod comments;
pub mod error;
pub mod traits;
pub mod types;

pub use comments::{build_threads, reply_text, CommentThread};
pub use error::{Result, VibeError};
pub use traits::{
    CatalogMaintenance, CreatorDirectory, EngagementService, InvalidTrackReport,
    RecommendationSource,
};
pub use types::{Comment, MediaKind, Monetization, Price, Track};
