//! JSON file gateway
//!
//! Stores one pretty-printed JSON file per record under a directory:
//!
//! ```text
//! <store_dir>/<record id>.json
//! ```
//!
//! Writes go to a temporary file first and are renamed into place. A single
//! lock serializes read-modify-write cycles so concurrent updates from the
//! write-through dispatcher cannot interleave.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{trace, warn};

use crate::gateway::{sort_newest_first, SyncGateway};
use crate::record::{EssayRecord, RecordPatch, WriteOutcome};
use crate::SyncError;

#[derive(Debug)]
pub struct JsonFileGateway {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileGateway {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, id: &str) -> Result<PathBuf, SyncError> {
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SyncError::InvalidId(id.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", id)))
    }

    async fn load(&self, path: &Path, id: &str) -> Result<EssayRecord, SyncError> {
        let raw = match fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SyncError::NotFound(id.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    async fn store(&self, path: &Path, record: &EssayRecord) -> Result<(), SyncError> {
        fs::create_dir_all(&self.dir).await?;
        let json = serde_json::to_string_pretty(record)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }
}

#[async_trait]
impl SyncGateway for JsonFileGateway {
    async fn create(&self, record: EssayRecord) -> Result<EssayRecord, SyncError> {
        let path = self.path_for(&record.id)?;
        let _guard = self.write_lock.lock().await;

        if fs::try_exists(&path).await? {
            return Err(SyncError::AlreadyExists(record.id));
        }
        self.store(&path, &record).await?;
        trace!(id = %record.id, path = %path.display(), "created record file");
        Ok(record)
    }

    async fn update(&self, id: &str, patch: RecordPatch) -> Result<WriteOutcome, SyncError> {
        let path = self.path_for(id)?;
        let _guard = self.write_lock.lock().await;

        let mut record = self.load(&path, id).await?;
        let outcome = record.apply_patch(patch);
        if outcome == WriteOutcome::Written {
            self.store(&path, &record).await?;
        }
        trace!(id, ?outcome, "updated record file");
        Ok(outcome)
    }

    async fn read(&self, id: &str) -> Result<EssayRecord, SyncError> {
        let path = self.path_for(id)?;
        self.load(&path, id).await
    }

    async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<EssayRecord>, SyncError> {
        let mut entries = match fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            let raw = fs::read_to_string(&path).await?;
            match serde_json::from_str::<EssayRecord>(&raw) {
                Ok(record) if record.owner_id == owner_id => records.push(record),
                Ok(_) => {}
                Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable record"),
            }
        }

        sort_newest_first(&mut records);
        Ok(records)
    }

    async fn delete(&self, id: &str) -> Result<(), SyncError> {
        let path = self.path_for(id)?;
        let _guard = self.write_lock.lock().await;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(SyncError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
