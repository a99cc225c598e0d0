//! Error types for persistence

use essay_editor::EditorError;
use essay_registry::RegistryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Invalid record id: {0}")]
    InvalidId(String),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
