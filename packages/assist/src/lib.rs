//! # Essay Assist
//!
//! Drafts the text of a single section with a language model.
//!
//! A [`ContentAssist`] producer takes an [`AssistRequest`] (type, topic, the
//! target section and what is already written) and returns plain text. Two
//! producers ship with the crate:
//!
//! - [`GeminiClient`]: Gemini `generateContent` over HTTPS
//! - [`PlaceholderAssist`]: offline stand-in text
//!
//! [`prepare_generation`] and [`finish_generation`] wire a producer to an
//! [`EditSession`](essay_editor::EditSession) without holding it during the
//! request, so late results never overwrite newer edits.
//! [`generate_section`] runs both steps against a shared session.

mod assist;
mod error;
mod gemini;
mod generate;
mod placeholder;
mod prompt;
mod request;

pub use assist::{build_assist, AssistSettings, ContentAssist};
pub use error::AssistError;
pub use gemini::GeminiClient;
pub use generate::{finish_generation, generate_section, prepare_generation, PendingGeneration};
pub use placeholder::PlaceholderAssist;
pub use prompt::build_prompt;
pub use request::AssistRequest;
