//! Write-through persistence
//!
//! Every applied mutation is pushed to the gateway as a full-state upsert on
//! a spawned tokio task. Local editing never waits on storage:
//!
//! ```text
//! EditSession::apply ──▶ WriteThrough::push ──▶ tokio task ──▶ SyncGateway::update
//!         │                                                        │
//!         ▼                                                        ▼
//!   next mutation                                   failure ─▶ warn!, dropped
//! ```
//!
//! Writes carry the session version as their revision and the gateway drops
//! anything older than what it holds, so completion order does not matter.
//! Failed writes are logged and never retried.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use essay_editor::{EditSession, Effect, MutationResult};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::gateway::SyncGateway;
use crate::record::{RecordPatch, StructureSnapshot, WriteOutcome};

/// Fire-and-forget writer for one record
pub struct WriteThrough {
    gateway: Arc<dyn SyncGateway>,
    record_id: String,
    tasks: JoinSet<()>,
    failures: Arc<AtomicUsize>,
}

impl WriteThrough {
    pub fn new(gateway: Arc<dyn SyncGateway>, record_id: impl Into<String>) -> Self {
        Self {
            gateway,
            record_id: record_id.into(),
            tasks: JoinSet::new(),
            failures: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn record_id(&self) -> &str {
        &self.record_id
    }

    /// Build the upsert for a mutation, or `None` for a noop
    pub fn patch_for(session: &EditSession, result: &MutationResult) -> Option<RecordPatch> {
        if result.change.is_noop() {
            return None;
        }

        let title = result.effects.iter().rev().find_map(|effect| match effect {
            Effect::Retitle(title) => Some(title.clone()),
        });

        Some(RecordPatch {
            title,
            structure_snapshot: StructureSnapshot::of(session.document()),
            revision: result.version,
        })
    }

    /// Schedule a write for the mutation that produced `result`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn push(&mut self, session: &EditSession, result: &MutationResult) {
        let Some(patch) = Self::patch_for(session, result) else {
            return;
        };

        let gateway = Arc::clone(&self.gateway);
        let failures = Arc::clone(&self.failures);
        let id = self.record_id.clone();

        self.tasks.spawn(async move {
            let revision = patch.revision;
            match gateway.update(&id, patch).await {
                Ok(WriteOutcome::Written) => debug!(id = %id, revision, "persisted"),
                Ok(WriteOutcome::Superseded { stored }) => {
                    debug!(id = %id, revision, stored, "write superseded by newer revision")
                }
                Err(e) => {
                    failures.fetch_add(1, Ordering::SeqCst);
                    warn!(id = %id, revision, error = %e, "failed to persist document");
                }
            }
        });
    }

    /// Writes scheduled but not yet finished
    pub fn in_flight(&self) -> usize {
        self.tasks.len()
    }

    /// Failed writes so far
    pub fn failures(&self) -> usize {
        self.failures.load(Ordering::SeqCst)
    }

    /// Wait for every scheduled write to finish. Failures are not retried.
    pub async fn flush(&mut self) {
        while let Some(joined) = self.tasks.join_next().await {
            if let Err(e) = joined {
                self.failures.fetch_add(1, Ordering::SeqCst);
                warn!(id = %self.record_id, error = %e, "write task aborted");
            }
        }
    }
}

impl std::fmt::Debug for WriteThrough {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteThrough")
            .field("record_id", &self.record_id)
            .field("in_flight", &self.tasks.len())
            .field("failures", &self.failures())
            .finish()
    }
}
