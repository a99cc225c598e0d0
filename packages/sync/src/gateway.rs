//! Storage backend contract

use async_trait::async_trait;

use crate::record::{EssayRecord, RecordPatch, WriteOutcome};
use crate::SyncError;

/// Persistence backend for essay records
///
/// Updates are revision-gated: a patch whose revision is not newer than the
/// stored one is dropped and reported as [`WriteOutcome::Superseded`], so
/// writes that finish out of order can never roll a record back.
#[async_trait]
pub trait SyncGateway: Send + Sync {
    /// Store a new record
    async fn create(&self, record: EssayRecord) -> Result<EssayRecord, SyncError>;

    /// Apply a full-state update to an existing record
    async fn update(&self, id: &str, patch: RecordPatch) -> Result<WriteOutcome, SyncError>;

    async fn read(&self, id: &str) -> Result<EssayRecord, SyncError>;

    /// All records of an owner, newest first
    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<EssayRecord>, SyncError>;

    async fn delete(&self, id: &str) -> Result<(), SyncError>;
}

/// Newest first by creation time
pub(crate) fn sort_newest_first(records: &mut [EssayRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}
