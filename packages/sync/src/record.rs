//! Persisted record shape
//!
//! One [`EssayRecord`] per essay. The live document is stored as a
//! [`StructureSnapshot`]: the group layout, the content map, the topic and
//! the key counter. Records written before layouts were persisted carry no
//! `groups`; the loader regenerates them from the document type.

use chrono::{DateTime, Utc};
use essay_editor::{ContentMap, Document, GroupInstance, KeyGenerator, TopicMode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Title given to new records until a hook or thesis is written
pub const DEFAULT_TITLE: &str = "Untitled Essay";

/// Serialized document state
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructureSnapshot {
    /// Live layout; absent on legacy records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<GroupInstance>>,

    #[serde(default)]
    pub content: ContentMap,

    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub topic_mode: TopicMode,

    /// Ordinal of the next group key to issue
    #[serde(default)]
    pub next_key: u64,
}

impl StructureSnapshot {
    pub fn of(document: &Document) -> Self {
        Self {
            groups: Some(document.groups.clone()),
            content: document.content.clone(),
            topic: document.topic.clone(),
            topic_mode: document.topic_mode,
            next_key: document.keys().issued() + 1,
        }
    }

    /// Key generator that continues after every key already in use.
    ///
    /// Falls back to scanning the stored keys when `next_key` is missing or
    /// behind, so a resumed document never reissues a key.
    pub fn key_generator(&self, seed: &str) -> KeyGenerator {
        let recorded = self.next_key.saturating_sub(1);
        let highest = self
            .groups
            .iter()
            .flatten()
            .filter_map(|g| key_ordinal(&g.key, seed))
            .max()
            .unwrap_or(0);

        KeyGenerator::resume(seed, recorded.max(highest))
    }
}

fn key_ordinal(key: &str, seed: &str) -> Option<u64> {
    key.strip_prefix(seed)?.strip_prefix('-')?.parse().ok()
}

/// One stored essay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EssayRecord {
    pub id: String,
    pub owner_id: String,
    pub title: String,
    pub document_type_id: String,
    pub structure_snapshot: StructureSnapshot,

    /// Session version of the last accepted write
    #[serde(default)]
    pub revision: u64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EssayRecord {
    /// Fresh record for a new document, with a random id
    pub fn new(owner_id: impl Into<String>, document: &Document) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.into(),
            title: DEFAULT_TITLE.to_string(),
            document_type_id: document.document_type_id.clone(),
            structure_snapshot: StructureSnapshot::of(document),
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply an update unless a newer revision is already stored
    pub fn apply_patch(&mut self, patch: RecordPatch) -> WriteOutcome {
        if patch.revision <= self.revision {
            return WriteOutcome::Superseded {
                stored: self.revision,
            };
        }

        if let Some(title) = patch.title {
            self.title = title;
        }
        self.structure_snapshot = patch.structure_snapshot;
        self.revision = patch.revision;
        self.updated_at = Utc::now();

        WriteOutcome::Written
    }
}

/// Full-state upsert sent after a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordPatch {
    /// New title, when the mutation derived one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    pub structure_snapshot: StructureSnapshot,

    pub revision: u64,
}

/// What a gateway did with an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,

    /// A write with an equal or newer revision was already stored
    Superseded { stored: u64 },
}
