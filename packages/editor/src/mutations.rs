//! # Document Mutations
//!
//! High-level semantic operations on essays.
//!
//! ## Design Principles
//!
//! 1. **Pure**: every operation takes a document and returns a new one
//! 2. **Type-agnostic**: shape comes from the [`DocumentType`], never from
//!    its id
//! 3. **Quiet no-ops**: removing an unknown or template group leaves the
//!    document untouched and reports why
//!
//! ## Mutation Semantics
//!
//! ### UpdateSection
//! - Atomic replacement of one section's text
//! - Unknown section ids are accepted and stored
//!
//! ### AddRepeatableGroup
//! - Mints a group from the type's body template
//! - Inserted right before the trailing group
//! - Section ids are prefixed `body_N_` with the first free `N`
//!
//! ### RemoveGroup
//! - Only user-added groups can be removed
//! - Remaining user-added groups are relabeled by position; ids and content
//!   stay put
//! - Content of the removed sections is purged

use essay_registry::DocumentType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builder::fill_empty_content;
use crate::document::{Document, GroupInstance, SectionInstance, TopicMode};

/// Semantic mutations (intent-preserving operations)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Mutation {
    /// Replace the text of one section
    UpdateSection { section_id: String, content: String },

    /// Replace the topic
    SetTopic { topic: String, mode: TopicMode },

    /// Append another repeatable group
    AddRepeatableGroup,

    /// Remove a user-added group
    RemoveGroup { group_key: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Document type {0} does not support repeatable groups")]
    RepeatableGroupsUnsupported(String),

    #[error("Document type mismatch: document is {document}, template is {template}")]
    TypeMismatch { document: String, template: String },

    #[error("Group not found: {0}")]
    GroupNotFound(String),

    #[error("Group {0} belongs to the template and cannot be removed")]
    GroupNotRemovable(String),

    #[error("Duplicate section id: {0}")]
    DuplicateSectionId(String),

    #[error("Section {0} has no content entry")]
    MissingContent(String),

    #[error("Duplicate group key: {0}")]
    DuplicateGroupKey(String),
}

/// What a mutation did to the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    SectionUpdated { section_id: String },
    TopicChanged,
    GroupAdded { key: String, index: usize },
    GroupRemoved { key: String, purged: Vec<String> },
    /// Nothing changed; the reason is kept for the caller
    Noop { reason: String },
}

impl Change {
    pub fn is_noop(&self) -> bool {
        matches!(self, Change::Noop { .. })
    }
}

/// A new document plus a description of the change
#[derive(Debug, Clone)]
pub struct Applied {
    pub document: Document,
    pub change: Change,
}

/// A freshly added group and where it landed.
///
/// The number in the label and the `body_N_` id prefix can differ once a
/// middle group has been removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddedGroup {
    pub group: GroupInstance,
    pub index: usize,
}

impl Mutation {
    /// Apply mutation to a document, returning the new document
    pub fn apply(&self, doc: &Document, doc_type: &DocumentType) -> Result<Applied, MutationError> {
        if doc.document_type_id != doc_type.id {
            return Err(MutationError::TypeMismatch {
                document: doc.document_type_id.clone(),
                template: doc_type.id.to_string(),
            });
        }

        match self {
            Mutation::UpdateSection { section_id, content } => {
                if doc.content.get(section_id) == Some(content) {
                    return Ok(noop(doc, "content unchanged"));
                }
                Ok(Applied {
                    document: update_section(doc, section_id, content),
                    change: Change::SectionUpdated {
                        section_id: section_id.clone(),
                    },
                })
            }

            Mutation::SetTopic { topic, mode } => {
                let document = set_topic(doc, topic, *mode);
                if document.topic == doc.topic && document.topic_mode == doc.topic_mode {
                    return Ok(noop(doc, "topic unchanged"));
                }
                Ok(Applied {
                    document,
                    change: Change::TopicChanged,
                })
            }

            Mutation::AddRepeatableGroup => {
                let (document, added) = add_repeatable_group(doc, doc_type)?;
                Ok(Applied {
                    document,
                    change: Change::GroupAdded {
                        key: added.group.key,
                        index: added.index,
                    },
                })
            }

            Mutation::RemoveGroup { group_key } => match remove_group(doc, group_key) {
                Ok((document, purged)) => Ok(Applied {
                    document,
                    change: Change::GroupRemoved {
                        key: group_key.clone(),
                        purged,
                    },
                }),
                Err(e @ (MutationError::GroupNotFound(_) | MutationError::GroupNotRemovable(_))) => {
                    tracing::debug!(group_key = %group_key, reason = %e, "remove ignored");
                    Ok(noop(doc, &e.to_string()))
                }
                Err(e) => Err(e),
            },
        }
    }
}

fn noop(doc: &Document, reason: &str) -> Applied {
    Applied {
        document: doc.clone(),
        change: Change::Noop {
            reason: reason.to_string(),
        },
    }
}

/// Set one section's text. Total: the id does not need to exist yet.
pub fn update_section(doc: &Document, section_id: &str, text: &str) -> Document {
    let mut next = doc.clone();
    next.content.insert(section_id.to_string(), text.to_string());
    next
}

pub fn set_topic(doc: &Document, topic: &str, mode: TopicMode) -> Document {
    let mut next = doc.clone();
    next.topic = topic.trim().to_string();
    next.topic_mode = mode;
    next
}

/// Mint a new repeatable group from the type's body template and insert it
/// before the trailing group.
pub fn add_repeatable_group(
    doc: &Document,
    doc_type: &DocumentType,
) -> Result<(Document, AddedGroup), MutationError> {
    let body = doc_type
        .body_template
        .ok_or_else(|| MutationError::RepeatableGroupsUnsupported(doc_type.id.to_string()))?;

    let ordinal = doc.addable_count() + 1;

    // The ordinal can already be in use when a middle group was removed, so
    // look for the first prefix whose ids are all free.
    let mut prefix_ordinal = ordinal;
    let namespace = loop {
        let candidate = format!("body_{}", prefix_ordinal);
        let free = body
            .sections
            .iter()
            .all(|s| !doc.is_id_taken(&format!("{}_{}", candidate, s.id)));
        if free {
            break candidate;
        }
        prefix_ordinal += 1;
    };

    let mut next = doc.clone();
    let group = GroupInstance {
        key: next.keys_mut().new_key(),
        label: format!("{} {}", body.label, ordinal),
        addable: true,
        is_dynamic: true,
        sections: body
            .sections
            .iter()
            .map(|s| SectionInstance {
                id: format!("{}_{}", namespace, s.id),
                label: s.label.to_string(),
                placeholder: s.placeholder.to_string(),
            })
            .collect(),
    };

    let index = next.groups.len().saturating_sub(1);
    next.groups.insert(index, group.clone());
    fill_empty_content(&next.groups, &mut next.content);

    tracing::debug!(key = %group.key, label = %group.label, index, "added repeatable group");

    Ok((next, AddedGroup { group, index }))
}

/// Remove a user-added group, relabel the remaining user-added groups, and
/// purge the removed sections' content. Returns the purged ids.
pub fn remove_group(doc: &Document, group_key: &str) -> Result<(Document, Vec<String>), MutationError> {
    let index = doc
        .group_index(group_key)
        .ok_or_else(|| MutationError::GroupNotFound(group_key.to_string()))?;

    if !doc.groups[index].is_dynamic {
        return Err(MutationError::GroupNotRemovable(group_key.to_string()));
    }

    let mut next = doc.clone();
    let removed = next.groups.remove(index);
    renumber_addable(&mut next.groups);

    let purged: Vec<String> = removed
        .sections
        .iter()
        .filter(|s| next.content.remove(&s.id).is_some())
        .map(|s| s.id.clone())
        .collect();

    tracing::debug!(key = %group_key, purged = purged.len(), "removed group");

    Ok((next, purged))
}

/// Relabel user-added groups `{base} n`, where `n` is the group's position
/// among all addable groups. Template groups keep their labels.
pub fn renumber_addable(groups: &mut [GroupInstance]) {
    for (i, group) in groups.iter_mut().filter(|g| g.addable).enumerate() {
        if !group.is_dynamic {
            continue;
        }
        let base = strip_ordinal(&group.label).to_string();
        group.label = format!("{} {}", base, i + 1);
    }
}

/// Drop a trailing number (and the whitespace before it) from a label
pub fn strip_ordinal(label: &str) -> &str {
    let trimmed = label.trim_end();
    let base = trimmed
        .trim_end_matches(|c: char| c.is_ascii_digit())
        .trim_end();
    if base.is_empty() {
        trimmed
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use essay_registry::Registry;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateSection {
            section_id: "thesis".to_string(),
            content: "Homework should be optional.".to_string(),
        };

        let json = serde_json::to_string(&mutation).unwrap();
        let deserialized: Mutation = serde_json::from_str(&json).unwrap();

        assert_eq!(mutation, deserialized);
    }

    #[test]
    fn test_strip_ordinal() {
        assert_eq!(strip_ordinal("Body Paragraph 12"), "Body Paragraph");
        assert_eq!(strip_ordinal("Step 1"), "Step");
        assert_eq!(strip_ordinal("Rising Action"), "Rising Action");
        assert_eq!(strip_ordinal("Cause 3 "), "Cause");
        assert_eq!(strip_ordinal("2024"), "2024");
    }

    #[test]
    fn test_renumber_leaves_template_labels_alone() {
        let registry = Registry::builtin();
        let doc = Document::new(registry.require("narrative").unwrap());
        let mut groups = doc.groups.clone();

        renumber_addable(&mut groups);

        assert_eq!(groups, doc.groups);
    }

    #[test]
    fn test_renumber_counts_template_groups() {
        let registry = Registry::builtin();
        let doc_type = registry.require("narrative").unwrap();
        let (doc, _) = add_repeatable_group(&Document::new(doc_type), doc_type).unwrap();
        let (doc, _) = add_repeatable_group(&doc, doc_type).unwrap();
        let mut groups = doc.groups.clone();
        assert_eq!(groups[2].label, "Climax");
        groups[3].label = "Rising Action 9".to_string();
        groups[4].label = "Rising Action".to_string();

        renumber_addable(&mut groups);

        let labels: Vec<&str> = groups.iter().filter(|g| g.addable).map(|g| g.label.as_str()).collect();
        assert_eq!(labels, ["Rising Action", "Rising Action 2", "Rising Action 3"]);
    }

    #[test]
    fn test_type_mismatch_is_rejected() {
        let registry = Registry::builtin();
        let doc = Document::new(registry.require("narrative").unwrap());

        let result = Mutation::AddRepeatableGroup.apply(&doc, registry.require("research").unwrap());
        assert!(matches!(result, Err(MutationError::TypeMismatch { .. })));
    }

    #[test]
    fn test_same_text_is_a_noop() {
        let registry = Registry::builtin();
        let doc_type = registry.require("process").unwrap();
        let doc = Document::new(doc_type);

        let applied = Mutation::UpdateSection {
            section_id: "hook".to_string(),
            content: String::new(),
        }
        .apply(&doc, doc_type)
        .unwrap();

        assert!(applied.change.is_noop());
        assert_eq!(applied.document, doc);
    }
}
