//! ClipSync - Range-Bounded Clip Playback Core
//!
//! The shared core behind VOD clipping surfaces: a range-bounded playback
//! controller that keeps a user-selected `[start, end]` window and a live
//! media position in agreement, a time-format codec for `HH:MM:SS` and
//! Twitch-style duration strings, and a validated export request builder
//! toward an external clip extraction service.
//!
//! The controller emits intents rather than driving a media element
//! directly; [`sync::MediaSession`] applies them to anything implementing
//! [`ports::MediaHandle`], which keeps the boundary-enforcement logic
//! testable without a playback backend.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod controller;
pub mod domain;
pub mod export;
pub mod ports;
pub mod sync;
pub mod timefmt;

// Re-export commonly used types
pub use app::ClipInteractor;
pub use config::SessionConfig;
pub use controller::{ControllerState, MediaIntent, RangeController};
pub use domain::errors::{DomainError, DomainResult};
pub use domain::model::{
    ClipStatus, ExportRequest, InitialRange, MediaIdentity, RangeState, SavedClipRecord,
};
pub use export::ExportRequestBuilder;
pub use ports::{ExportOutcome, ExportPort, MediaEvent, MediaHandle, StorePort, UserPort};
pub use sync::MediaSession;
