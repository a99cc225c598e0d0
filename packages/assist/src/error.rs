//! Error types for content assist

use essay_editor::EditorError;
use thiserror::Error;

/// Failure to produce text for one section
///
/// Every variant is recoverable: the section keeps whatever it held before.
#[derive(Error, Debug)]
pub enum AssistError {
    #[error("API key not configured. Set the {0} environment variable.")]
    MissingCredentials(String),

    #[error("Unknown assist provider: {0}")]
    UnsupportedProvider(String),

    #[error("Section is not part of the document layout: {0}")]
    UnknownSection(String),

    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("No content returned from the model")]
    EmptyResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}
