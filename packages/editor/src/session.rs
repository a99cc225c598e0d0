//! # Edit Session Management
//!
//! An EditSession is the single owner of one document while it is being
//! edited. It applies mutations, runs post-effects, counts versions, and
//! guards asynchronous content generation against clobbering newer edits.
//!
//! ## Stale generation results
//!
//! Every section carries a revision that increments on each applied edit,
//! and whenever its id is removed with a group or minted by a new one.
//! [`EditSession::begin_generation`] records the revision in a ticket, and
//! [`EditSession::complete_generation`] only writes the result when the
//! revision is still the same (compare-and-swap). A user edit made while the
//! request was in flight therefore wins.

use std::collections::HashMap;

use essay_registry::DocumentType;

use crate::document::{Document, TopicMode};
use crate::mutations::{Change, Mutation, MutationError};
use crate::post_effects::{Effect, PostEffectEngine};
use crate::EditorError;

/// Result of applying a mutation through a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResult {
    /// Session version after the mutation
    pub version: u64,

    pub change: Change,

    /// Side effects the caller should carry out (e.g. retitling the record)
    pub effects: Vec<Effect>,
}

/// Handle for one in-flight generation request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub id: String,
    pub section_id: String,

    /// Section revision when the request was issued
    pub revision: u64,
}

/// How a generation result was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Applied(MutationResult),

    /// The section changed (or disappeared) since the request was issued;
    /// the result was dropped
    Stale {
        section_id: String,
        expected: u64,
        current: u64,
    },
}

/// Single edit session over one document
#[derive(Debug)]
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    doc_type: DocumentType,
    document: Document,

    /// Increments on every applied (non-noop) mutation
    version: u64,

    revisions: HashMap<String, u64>,
    pending: Vec<GenerationTicket>,
    next_ticket: u64,
    effects: PostEffectEngine,

    /// Latest title derived by post-effects
    title: Option<String>,
}

impl EditSession {
    /// Wrap an existing document. The document must belong to `doc_type`
    /// and satisfy its invariants.
    pub fn new(id: impl Into<String>, doc_type: DocumentType, document: Document) -> Result<Self, EditorError> {
        if document.document_type_id != doc_type.id {
            return Err(MutationError::TypeMismatch {
                document: document.document_type_id.clone(),
                template: doc_type.id.to_string(),
            }
            .into());
        }
        document.validate()?;

        Ok(Self {
            id: id.into(),
            doc_type,
            document,
            version: 0,
            revisions: HashMap::new(),
            pending: Vec::new(),
            next_ticket: 0,
            effects: PostEffectEngine::new(),
            title: None,
        })
    }

    /// Start a session on a brand new document
    pub fn start(id: impl Into<String>, doc_type: DocumentType, topic: &str, mode: TopicMode) -> Self {
        let document = Document::new(&doc_type).with_topic(topic, mode);
        Self {
            id: id.into(),
            doc_type,
            document,
            version: 0,
            revisions: HashMap::new(),
            pending: Vec::new(),
            next_ticket: 0,
            effects: PostEffectEngine::new(),
            title: None,
        }
    }

    /// Continue numbering from a previously persisted version
    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    pub fn with_effects(mut self, effects: PostEffectEngine) -> Self {
        self.effects = effects;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn doc_type(&self) -> &DocumentType {
        &self.doc_type
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Current revision of a section (0 if untouched in this session)
    pub fn revision(&self, section_id: &str) -> u64 {
        self.revisions.get(section_id).copied().unwrap_or(0)
    }

    /// Apply a mutation to the owned document
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let applied = mutation.apply(&self.document, &self.doc_type)?;

        if applied.change.is_noop() {
            return Ok(MutationResult {
                version: self.version,
                change: applied.change,
                effects: vec![],
            });
        }

        self.version += 1;
        match &applied.change {
            Change::SectionUpdated { section_id } => self.bump(section_id),
            // Ids of a removed group can be handed to the next added one
            Change::GroupRemoved { purged, .. } => purged.iter().for_each(|id| self.bump(id)),
            Change::GroupAdded { key, .. } => {
                let minted: Vec<String> = applied
                    .document
                    .find_group(key)
                    .map(|g| g.section_ids().map(str::to_string).collect())
                    .unwrap_or_default();
                minted.iter().for_each(|id| self.bump(id));
            }
            Change::TopicChanged | Change::Noop { .. } => {}
        }

        let effects = self.effects.analyze(&mutation, &applied.document);
        for effect in &effects {
            match effect {
                Effect::Retitle(title) => self.title = Some(title.clone()),
            }
        }

        self.document = applied.document;

        tracing::debug!(session = %self.id, version = self.version, change = ?applied.change, "applied mutation");

        Ok(MutationResult {
            version: self.version,
            change: applied.change,
            effects,
        })
    }

    pub fn update_section(&mut self, section_id: &str, text: &str) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateSection {
            section_id: section_id.to_string(),
            content: text.to_string(),
        })
    }

    pub fn set_topic(&mut self, topic: &str, mode: TopicMode) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::SetTopic {
            topic: topic.to_string(),
            mode,
        })
    }

    pub fn add_group(&mut self) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::AddRepeatableGroup)
    }

    pub fn remove_group(&mut self, group_key: &str) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::RemoveGroup {
            group_key: group_key.to_string(),
        })
    }

    /// Register an in-flight generation request for a laid-out section
    pub fn begin_generation(&mut self, section_id: &str) -> Result<GenerationTicket, EditorError> {
        if self.document.find_section(section_id).is_none() {
            return Err(EditorError::UnknownSection(section_id.to_string()));
        }

        self.next_ticket += 1;
        let ticket = GenerationTicket {
            id: format!("{}-gen-{}", self.id, self.next_ticket),
            section_id: section_id.to_string(),
            revision: self.revision(section_id),
        };
        self.pending.push(ticket.clone());

        Ok(ticket)
    }

    /// Apply a generation result unless the section moved on meanwhile
    pub fn complete_generation(
        &mut self,
        ticket: &GenerationTicket,
        text: &str,
    ) -> Result<GenerationOutcome, EditorError> {
        self.take_pending(ticket)?;

        let current = self.revision(&ticket.section_id);
        let still_laid_out = self.document.find_section(&ticket.section_id).is_some();

        if current != ticket.revision || !still_laid_out {
            tracing::debug!(
                ticket = %ticket.id,
                section = %ticket.section_id,
                expected = ticket.revision,
                current,
                "dropping stale generation result"
            );
            return Ok(GenerationOutcome::Stale {
                section_id: ticket.section_id.clone(),
                expected: ticket.revision,
                current,
            });
        }

        let result = self.update_section(&ticket.section_id, text)?;
        Ok(GenerationOutcome::Applied(result))
    }

    /// Forget a failed generation request. Content is left as it was.
    pub fn fail_generation(&mut self, ticket: &GenerationTicket) -> Result<(), EditorError> {
        self.take_pending(ticket)
    }

    /// Get number of pending generation requests
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn bump(&mut self, section_id: &str) {
        *self.revisions.entry(section_id.to_string()).or_insert(0) += 1;
    }

    fn take_pending(&mut self, ticket: &GenerationTicket) -> Result<(), EditorError> {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != ticket.id);
        if self.pending.len() == before {
            return Err(EditorError::UnknownTicket(ticket.id.clone()));
        }
        Ok(())
    }
}
