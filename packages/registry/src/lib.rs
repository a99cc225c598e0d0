//! # Essay Registry
//!
//! Static catalog of essay types.
//!
//! Each [`DocumentType`] describes the canonical shape of one kind of essay:
//! its ordered groups of sections and, optionally, the body template used to
//! mint extra repeatable groups. All type-specific shape lives here; the
//! editor never branches on a type id.
//!
//! ```rust,ignore
//! use essay_registry::Registry;
//!
//! let registry = Registry::builtin();
//! let argumentative = registry.require("argumentative")?;
//! assert!(argumentative.supports_repeatable_groups());
//! ```

mod catalog;
mod types;

pub use catalog::CATALOG;
pub use types::{DocumentType, GroupTemplate, SectionTemplate};

use thiserror::Error;

/// Color token used for records whose type is not in the catalog
pub const FALLBACK_COLOR: &str = "--color-text-secondary";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Unknown document type: {0}")]
    UnknownDocumentType(String),
}

/// Lookup table over a fixed set of document types
#[derive(Debug, Clone)]
pub struct Registry {
    types: Vec<DocumentType>,
}

impl Registry {
    /// Registry over the built-in catalog
    pub fn builtin() -> Self {
        Self::with_types(CATALOG.to_vec())
    }

    /// Registry over an explicit set of types (order is preserved)
    pub fn with_types(types: Vec<DocumentType>) -> Self {
        Self { types }
    }

    pub fn get(&self, id: &str) -> Option<&DocumentType> {
        self.types.iter().find(|t| t.id == id)
    }

    /// Like [`Registry::get`], but unknown ids are an error
    pub fn require(&self, id: &str) -> Result<&DocumentType, RegistryError> {
        self.get(id)
            .ok_or_else(|| RegistryError::UnknownDocumentType(id.to_string()))
    }

    /// All types in catalog order
    pub fn all(&self) -> &[DocumentType] {
        &self.types
    }

    /// Catalog position of a type, used to order listings
    pub fn position(&self, id: &str) -> Option<usize> {
        self.types.iter().position(|t| t.id == id)
    }

    pub fn color_of(&self, id: &str) -> &'static str {
        self.get(id).map(|t| t.color).unwrap_or(FALLBACK_COLOR)
    }

    pub fn title_of<'a>(&self, id: &'a str) -> &'a str {
        match self.get(id) {
            Some(t) => t.title,
            None => id,
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
