//! Creating and reopening documents
//!
//! A record id addresses one essay. Creating a document persists an empty
//! record immediately; loading turns a stored record back into an
//! [`EditSession`].

use essay_editor::{instantiate_groups, Document, DocumentType, EditSession, KeyGenerator, TopicMode};
use essay_registry::Registry;
use tracing::info;

use crate::gateway::SyncGateway;
use crate::record::{EssayRecord, StructureSnapshot};
use crate::SyncError;

/// An open document together with the record it came from
#[derive(Debug)]
pub struct OpenDocument {
    pub record: EssayRecord,
    pub session: EditSession,
}

/// Start a new document and persist its empty record
pub async fn create_document(
    gateway: &dyn SyncGateway,
    registry: &Registry,
    owner_id: &str,
    document_type_id: &str,
    topic: &str,
    mode: TopicMode,
) -> Result<OpenDocument, SyncError> {
    let doc_type = *registry.require(document_type_id)?;
    let document = Document::new(&doc_type).with_topic(topic, mode);
    let record = gateway.create(EssayRecord::new(owner_id, &document)).await?;

    info!(id = %record.id, document_type = doc_type.id, "created document");

    let session = EditSession::new(record.id.clone(), doc_type, document)?;
    Ok(OpenDocument { record, session })
}

/// Reopen a stored document
///
/// An unknown document type is an error. The session continues numbering
/// from the stored revision so later writes are accepted.
pub async fn load_document(
    gateway: &dyn SyncGateway,
    registry: &Registry,
    id: &str,
) -> Result<OpenDocument, SyncError> {
    let record = gateway.read(id).await?;
    let doc_type = *registry.require(&record.document_type_id)?;
    let document = document_from_snapshot(&record.structure_snapshot, &doc_type);

    info!(
        id = %record.id,
        document_type = doc_type.id,
        revision = record.revision,
        "loaded document"
    );

    let session = EditSession::new(record.id.clone(), doc_type, document)?.with_version(record.revision);
    Ok(OpenDocument { record, session })
}

/// Rebuild a document from its snapshot
///
/// A snapshot without a stored layout gets the type's default groups, and
/// its content is merged in.
pub fn document_from_snapshot(snapshot: &StructureSnapshot, doc_type: &DocumentType) -> Document {
    let (groups, keys) = match &snapshot.groups {
        Some(groups) => (groups.clone(), snapshot.key_generator(doc_type.id)),
        None => {
            info!(document_type = doc_type.id, "regenerating layout for legacy snapshot");
            let mut keys = KeyGenerator::new(doc_type.id);
            (instantiate_groups(doc_type, &mut keys), keys)
        }
    };

    Document::from_parts(
        doc_type.id,
        snapshot.topic.clone(),
        snapshot.topic_mode,
        groups,
        snapshot.content.clone(),
        keys,
    )
}

/// Snapshot of a session's current document
pub fn snapshot_of(session: &EditSession) -> StructureSnapshot {
    StructureSnapshot::of(session.document())
}
