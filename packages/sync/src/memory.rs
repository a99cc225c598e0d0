//! In-memory gateway
//!
//! Keeps records in a `HashMap` behind a tokio `RwLock`. Used by tests and
//! by short-lived sessions that do not need a store on disk.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::trace;

use crate::gateway::{sort_newest_first, SyncGateway};
use crate::record::{EssayRecord, RecordPatch, WriteOutcome};
use crate::SyncError;

#[derive(Debug, Default)]
pub struct MemoryGateway {
    records: RwLock<HashMap<String, EssayRecord>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SyncGateway for MemoryGateway {
    async fn create(&self, record: EssayRecord) -> Result<EssayRecord, SyncError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(SyncError::AlreadyExists(record.id));
        }
        trace!(id = %record.id, "creating record");
        records.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, patch: RecordPatch) -> Result<WriteOutcome, SyncError> {
        let mut records = self.records.write().await;
        let record = records
            .get_mut(id)
            .ok_or_else(|| SyncError::NotFound(id.to_string()))?;

        let outcome = record.apply_patch(patch);
        trace!(id, ?outcome, "updated record");
        Ok(outcome)
    }

    async fn read(&self, id: &str) -> Result<EssayRecord, SyncError> {
        self.records
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| SyncError::NotFound(id.to_string()))
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<EssayRecord>, SyncError> {
        let mut records: Vec<EssayRecord> = self
            .records
            .read()
            .await
            .values()
            .filter(|r| r.owner_id == owner_id)
            .cloned()
            .collect();
        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        self.records
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| SyncError::NotFound(id.to_string()))
    }
}
