//! # Document Aggregate
//!
//! A Document is one essay being composed: the selected type, the topic,
//! the live group layout, and the flat content map.
//!
//! ## Invariants
//!
//! - Every section id referenced by a group appears at most once across the
//!   whole document
//! - Every section id referenced by a group has an entry in `content`
//! - Group keys come from the document's own [`KeyGenerator`] and are never
//!   reused
//!
//! ## Lifecycle
//!
//! ```text
//! Select type → Instantiate → Edit / Add / Remove → Snapshot
//!      ↓             ↓               ↓                 ↓
//!  Registry       builder        mutations          sync
//! ```

use std::collections::{BTreeMap, HashSet};

use essay_registry::DocumentType;
use serde::{Deserialize, Serialize};

use crate::builder::{build_empty_content, instantiate_groups};
use crate::key_generator::KeyGenerator;
use crate::MutationError;

/// Section id → current text
pub type ContentMap = BTreeMap<String, String>;

/// How the topic text was supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicMode {
    /// A short topic typed by the user
    #[default]
    Topic,
    /// A pasted assignment prompt
    Prompt,
}

/// A live, fully-qualified content slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionInstance {
    pub id: String,
    pub label: String,
    pub placeholder: String,
}

/// A live group of sections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInstance {
    /// Stable key, unique for the document's lifetime
    pub key: String,
    pub label: String,
    pub addable: bool,

    /// True when the user added this group
    #[serde(default)]
    pub is_dynamic: bool,

    pub sections: Vec<SectionInstance>,
}

impl GroupInstance {
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    pub fn has_section(&self, section_id: &str) -> bool {
        self.sections.iter().any(|s| s.id == section_id)
    }
}

/// Editable essay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub document_type_id: String,

    #[serde(default)]
    pub topic: String,

    #[serde(default)]
    pub topic_mode: TopicMode,

    pub groups: Vec<GroupInstance>,

    #[serde(default)]
    pub content: ContentMap,

    keys: KeyGenerator,
}

impl Document {
    /// Create a fresh document from a type's canonical structure
    pub fn new(doc_type: &DocumentType) -> Self {
        let mut keys = KeyGenerator::new(doc_type.id);
        let groups = instantiate_groups(doc_type, &mut keys);
        let content = build_empty_content(&groups, &ContentMap::new());

        tracing::debug!(
            document_type = doc_type.id,
            groups = groups.len(),
            "instantiated document"
        );

        Self {
            document_type_id: doc_type.id.to_string(),
            topic: String::new(),
            topic_mode: TopicMode::Topic,
            groups,
            content,
            keys,
        }
    }

    /// Set the topic while building a new document
    pub fn with_topic(mut self, topic: impl Into<String>, mode: TopicMode) -> Self {
        self.topic = topic.into().trim().to_string();
        self.topic_mode = mode;
        self
    }

    /// Reassemble a document from persisted parts.
    ///
    /// Missing content entries are filled in; existing text is kept.
    pub fn from_parts(
        document_type_id: impl Into<String>,
        topic: impl Into<String>,
        topic_mode: TopicMode,
        groups: Vec<GroupInstance>,
        content: ContentMap,
        keys: KeyGenerator,
    ) -> Self {
        let content = build_empty_content(&groups, &content);
        Self {
            document_type_id: document_type_id.into(),
            topic: topic.into(),
            topic_mode,
            groups,
            content,
            keys,
        }
    }

    pub fn keys(&self) -> &KeyGenerator {
        &self.keys
    }

    pub(crate) fn keys_mut(&mut self) -> &mut KeyGenerator {
        &mut self.keys
    }

    pub fn find_group(&self, key: &str) -> Option<&GroupInstance> {
        self.groups.iter().find(|g| g.key == key)
    }

    pub fn group_index(&self, key: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.key == key)
    }

    /// Locate a section together with its owning group
    pub fn find_section(&self, section_id: &str) -> Option<(&GroupInstance, &SectionInstance)> {
        self.groups.iter().find_map(|g| {
            g.sections
                .iter()
                .find(|s| s.id == section_id)
                .map(|s| (g, s))
        })
    }

    /// Current text of a section (empty if never written)
    pub fn text(&self, section_id: &str) -> &str {
        self.content.get(section_id).map(String::as_str).unwrap_or("")
    }

    /// All section ids in document order
    pub fn section_ids(&self) -> Vec<&str> {
        self.groups.iter().flat_map(|g| g.section_ids()).collect()
    }

    /// Content of the sections that are currently laid out, in document
    /// order, skipping blank entries
    pub fn filled_sections(&self) -> Vec<(&str, &str)> {
        self.section_ids()
            .into_iter()
            .filter_map(|id| {
                let text = self.text(id);
                (!text.trim().is_empty()).then_some((id, text))
            })
            .collect()
    }

    /// Whether an id is used by any group or already present in content
    pub fn is_id_taken(&self, section_id: &str) -> bool {
        self.content.contains_key(section_id)
            || self.groups.iter().any(|g| g.has_section(section_id))
    }

    pub fn addable_count(&self) -> usize {
        self.groups.iter().filter(|g| g.addable).count()
    }

    /// Check the structural invariants
    pub fn validate(&self) -> Result<(), MutationError> {
        let mut seen = HashSet::new();
        for id in self.section_ids() {
            if !seen.insert(id) {
                return Err(MutationError::DuplicateSectionId(id.to_string()));
            }
            if !self.content.contains_key(id) {
                return Err(MutationError::MissingContent(id.to_string()));
            }
        }

        let mut keys = HashSet::new();
        for group in &self.groups {
            if !keys.insert(group.key.as_str()) {
                return Err(MutationError::DuplicateGroupKey(group.key.clone()));
            }
        }

        Ok(())
    }
}
