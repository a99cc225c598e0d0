//! Error types for the editor

use essay_registry::RegistryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Section is not part of the document layout: {0}")]
    UnknownSection(String),

    #[error("No pending generation with ticket {0}")]
    UnknownTicket(String),
}
