//! Drafting a section through an edit session
//!
//! Generation is split so the session is never held across the request:
//!
//! ```text
//! prepare_generation ──▶ ContentAssist::generate ──▶ finish_generation
//!   (&mut session)          (no session borrow)        (&mut session)
//! ```
//!
//! Edits made between the two session steps win: the ticket records the
//! section's revision and [`finish_generation`] drops the text if it moved.

use essay_editor::{EditSession, GenerationOutcome, GenerationTicket};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::{AssistError, AssistRequest, ContentAssist};

/// A registered generation request, ready to send to a producer
#[derive(Debug, Clone)]
pub struct PendingGeneration {
    pub request: AssistRequest,
    pub ticket: GenerationTicket,
}

/// Build the request for `section_id` and register a ticket for it
pub fn prepare_generation(session: &mut EditSession, section_id: &str) -> Result<PendingGeneration, AssistError> {
    let request = AssistRequest::for_section(session.document(), session.doc_type(), section_id)?;
    let ticket = session.begin_generation(section_id)?;
    debug!(ticket = %ticket.id, section = section_id, "generation started");

    Ok(PendingGeneration { request, ticket })
}

/// Apply what the producer returned.
///
/// Text is written unless the section was edited or removed since
/// [`prepare_generation`], in which case [`GenerationOutcome::Stale`] is
/// returned. On a producer error the ticket is released, the section keeps
/// its previous text and the error is passed through.
pub fn finish_generation(
    session: &mut EditSession,
    ticket: &GenerationTicket,
    produced: Result<String, AssistError>,
) -> Result<GenerationOutcome, AssistError> {
    match produced {
        Ok(text) => Ok(session.complete_generation(ticket, &text)?),
        Err(e) => {
            warn!(section = %ticket.section_id, error = %e, "generation failed");
            session.fail_generation(ticket)?;
            Err(e)
        }
    }
}

/// Generate text for one section of a shared session.
///
/// The lock is only taken to prepare and to finish, so other tasks can keep
/// editing while the producer runs.
pub async fn generate_section(
    assist: &dyn ContentAssist,
    session: &Mutex<EditSession>,
    section_id: &str,
) -> Result<GenerationOutcome, AssistError> {
    let pending = prepare_generation(&mut *session.lock().await, section_id)?;
    debug!(provider = assist.name(), ticket = %pending.ticket.id, "requesting text");

    let produced = assist.generate(&pending.request).await;

    finish_generation(&mut *session.lock().await, &pending.ticket, produced)
}
