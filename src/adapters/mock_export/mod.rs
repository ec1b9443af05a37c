// Mock export adapter - queues export requests locally instead of calling
// the remote extraction service

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::ExportRequest;
use crate::ports::{ExportOutcome, ExportPort};

/// [`ExportPort`] implementation that accepts every request and returns a
/// locally generated project reference. Used by the CLI dry-run path and by
/// tests; a real deployment substitutes the HTTP client here.
#[derive(Default)]
pub struct MockExportAdapter {
    next_id: AtomicU64,
    requests: Mutex<Vec<ExportRequest>>,
}

impl MockExportAdapter {
    /// Create a new mock export adapter
    pub fn new() -> Self {
        Self::default()
    }

    /// Every request received so far, in order
    pub async fn requests(&self) -> Vec<ExportRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ExportPort for MockExportAdapter {
    async fn export_clip(&self, request: &ExportRequest) -> Result<ExportOutcome, DomainError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let project_id = format!("project-{}", id);
        info!(
            source = %request.source,
            start = %request.start_time,
            end = %request.end_time,
            %project_id,
            "export request queued"
        );
        self.requests.lock().await.push(request.clone());
        Ok(ExportOutcome::Queued { project_id })
    }
}

/// [`ExportPort`] implementation that always fails, for exercising the
/// recoverable-failure path.
pub struct FailingExportAdapter;

#[async_trait]
impl ExportPort for FailingExportAdapter {
    async fn export_clip(&self, _request: &ExportRequest) -> Result<ExportOutcome, DomainError> {
        Err(DomainError::ExportFailed {
            message: "service unreachable".to_string(),
        })
    }
}
