// Clip interactor - orchestrates the export and library-save use cases
// shared by the clipping surfaces

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::SessionConfig;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::model::{InitialRange, MediaIdentity, RangeState, SavedClipRecord};
use crate::domain::rules;
use crate::export::ExportRequestBuilder;
use crate::ports::{ExportOutcome, ExportPort, StorePort, UserPort};

/// Interactor over the injected collaborators: the clip extraction service,
/// the persistence store, and the ambient user context. One instance serves
/// every view embedding a range controller.
pub struct ClipInteractor {
    export_port: Arc<dyn ExportPort>,
    store_port: Arc<dyn StorePort>,
    user_port: Arc<dyn UserPort>,
    config: SessionConfig,
}

impl ClipInteractor {
    /// Create a new clip interactor with injected ports
    pub fn new(
        export_port: Arc<dyn ExportPort>,
        store_port: Arc<dyn StorePort>,
        user_port: Arc<dyn UserPort>,
        config: SessionConfig,
    ) -> Self {
        Self {
            export_port,
            store_port,
            user_port,
            config,
        }
    }

    /// Export the selected range of the given source. Builds and validates
    /// the request, then hands it to the extraction service. Failures are
    /// recoverable; no retry is attempted here.
    pub async fn download_clip(
        &self,
        range: &RangeState,
        identity: &MediaIdentity,
    ) -> DomainResult<ExportOutcome> {
        let request = ExportRequestBuilder::build(range, identity)?;
        info!(
            source = %request.source,
            start = %request.start_time,
            end = %request.end_time,
            "dispatching clip export"
        );

        match self.export_port.export_clip(&request).await {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                warn!(error = %e, "clip export failed");
                Err(e)
            }
        }
    }

    /// Save a fixed-length window starting at the selected start to the
    /// user's library. Requires a signed-in user.
    pub async fn save_to_library(
        &self,
        range: &RangeState,
        identity: &MediaIdentity,
    ) -> DomainResult<SavedClipRecord> {
        let user_id = self
            .user_port
            .current_user()
            .ok_or(DomainError::SignInRequired)?;
        if identity.source.trim().is_empty() {
            return Err(DomainError::MissingIdentity);
        }

        let (save_start, save_end) = rules::quick_save_window(
            range.start,
            range.duration,
            self.config.quick_save_window_secs,
        );
        let record = SavedClipRecord::completed(
            &identity.source,
            identity.title.as_deref(),
            user_id,
            save_start,
            save_end,
        );

        self.store_port.persist_clip(&record).await?;
        info!(
            filename = %record.clip_filename,
            start = %record.start_time,
            end = %record.end_time,
            "clip saved to library"
        );
        Ok(record)
    }

    /// Load a previously saved clip and derive the segment-local range for
    /// re-editing. None if no such record exists.
    pub async fn reopen_clip(&self, clip_filename: &str) -> DomainResult<Option<InitialRange>> {
        match self.store_port.load_clip(clip_filename).await? {
            Some(record) => Ok(Some(rules::rebase_saved_range(&record)?)),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests;
