// Ports - Interface seams toward the media element and the external
// collaborators (clip extraction service, persistence, user context)

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::model::{ExportRequest, SavedClipRecord};

/// A playable media resource: duration, current position, and transport
/// control. The three signals it emits arrive as [`MediaEvent`] values pushed
/// into the owning session by the embedding.
pub trait MediaHandle {
    /// Total media length in seconds, 0.0 while unknown
    fn duration(&self) -> f64;

    /// Current playback position in seconds
    fn position(&self) -> f64;

    fn play(&mut self);

    fn pause(&mut self);

    fn seek(&mut self, position: f64);
}

/// Signals delivered by a media source
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata is available; duration is now known
    MetadataLoaded { duration: f64 },
    /// Periodic position advance
    TimeUpdate { position: f64 },
    /// Natural playback end
    Ended,
}

/// Outcome of handing an export request to the extraction service
#[derive(Debug, Clone, PartialEq)]
pub enum ExportOutcome {
    /// Synchronous clip download: the binary media payload
    Payload(Vec<u8>),
    /// Asynchronous project creation: a queued job reference
    Queued { project_id: String },
}

/// Port for the remote clip extraction service
#[async_trait]
pub trait ExportPort: Send + Sync {
    /// Hand off a validated export request. Network failure is a recoverable
    /// condition; retry policy belongs to the caller.
    async fn export_clip(&self, request: &ExportRequest) -> Result<ExportOutcome, DomainError>;
}

/// Port for the clip persistence collaborator
#[async_trait]
pub trait StorePort: Send + Sync {
    /// Persist a fully-built clip record
    async fn persist_clip(&self, record: &SavedClipRecord) -> Result<(), DomainError>;

    /// Load a previously committed record by clip filename
    async fn load_clip(&self, clip_filename: &str)
        -> Result<Option<SavedClipRecord>, DomainError>;
}

/// Capability interface over the ambient user/session context
pub trait UserPort: Send + Sync {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<String>;
}
