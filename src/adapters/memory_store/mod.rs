// Memory store adapter - in-memory clip persistence keyed by filename

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::errors::DomainError;
use crate::domain::model::SavedClipRecord;
use crate::ports::StorePort;

/// In-memory [`StorePort`] implementation. Used by the CLI and tests; a real
/// deployment substitutes the remote database collaborator here.
#[derive(Default)]
pub struct MemoryStoreAdapter {
    records: RwLock<HashMap<String, SavedClipRecord>>,
}

impl MemoryStoreAdapter {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with records
    pub fn with_records(records: impl IntoIterator<Item = SavedClipRecord>) -> Self {
        let map = records
            .into_iter()
            .map(|r| (r.clip_filename.clone(), r))
            .collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl StorePort for MemoryStoreAdapter {
    async fn persist_clip(&self, record: &SavedClipRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        info!(filename = %record.clip_filename, "persisting clip record");
        records.insert(record.clip_filename.clone(), record.clone());
        Ok(())
    }

    async fn load_clip(
        &self,
        clip_filename: &str,
    ) -> Result<Option<SavedClipRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(clip_filename).cloned())
    }
}
