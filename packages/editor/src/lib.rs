//! # Essay Editor
//!
//! Core document-structure engine for the essay composer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ registry: essay types → group templates     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document lifecycle + mutations      │
//! │  - Instantiate groups from a template       │
//! │  - Add / remove repeatable groups           │
//! │  - Update sections, derive the title        │
//! │  - Guard async generation results           │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ sync: snapshot → storage (write-through)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Local state is the source of truth** while a session is open
//! 2. **Pure mutations**: every operation returns a new document
//! 3. **Stable identities**: group keys are never reused, section ids are
//!    unique across the document, and renumbering only touches labels
//! 4. **Newest edit wins**: late generation results never overwrite newer text
//!
//! ## Usage
//!
//! ```rust,ignore
//! use essay_editor::{EditSession, TopicMode};
//! use essay_registry::Registry;
//!
//! let registry = Registry::builtin();
//! let doc_type = *registry.require("argumentative")?;
//! let mut session = EditSession::start("local", doc_type, "School uniforms", TopicMode::Topic);
//!
//! session.update_section("thesis", "Uniforms should be optional.")?;
//! let added = session.add_group()?;
//! ```

mod builder;
mod document;
mod errors;
mod key_generator;
mod mutations;
mod post_effects;
mod session;

pub use builder::{build_empty_content, fill_empty_content, instantiate_group, instantiate_groups};
pub use document::{ContentMap, Document, GroupInstance, SectionInstance, TopicMode};
pub use errors::EditorError;
pub use key_generator::KeyGenerator;
pub use mutations::{
    add_repeatable_group, remove_group, renumber_addable, set_topic, strip_ordinal, update_section,
    AddedGroup, Applied, Change, Mutation, MutationError,
};
pub use post_effects::{
    derive_title, DeriveTitle, Effect, PostEffect, PostEffectEngine, TITLE_SECTION_IDS,
};
pub use session::{EditSession, GenerationOutcome, GenerationTicket, MutationResult};

// Re-export registry types for convenience
pub use essay_registry::{DocumentType, GroupTemplate, Registry, RegistryError, SectionTemplate};
