//! Library listing
//!
//! An owner's records, newest first, bucketed by document type in catalog
//! order. Records whose type is not in the catalog are listed last under
//! their raw type id.

use essay_registry::Registry;

use crate::gateway::SyncGateway;
use crate::record::EssayRecord;
use crate::SyncError;

/// All records of one document type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryShelf {
    pub document_type_id: String,
    pub title: String,
    pub color: &'static str,
    pub records: Vec<EssayRecord>,
}

pub async fn list_library(
    gateway: &dyn SyncGateway,
    registry: &Registry,
    owner_id: &str,
) -> Result<Vec<LibraryShelf>, SyncError> {
    let records = gateway.list_by_owner(owner_id).await?;
    Ok(shelve(records, registry))
}

/// Group records by type, keeping their incoming order within each shelf
pub fn shelve(records: Vec<EssayRecord>, registry: &Registry) -> Vec<LibraryShelf> {
    let mut shelves: Vec<LibraryShelf> = Vec::new();

    for record in records {
        match shelves
            .iter_mut()
            .find(|s| s.document_type_id == record.document_type_id)
        {
            Some(shelf) => shelf.records.push(record),
            None => shelves.push(LibraryShelf {
                title: registry.title_of(&record.document_type_id).to_string(),
                color: registry.color_of(&record.document_type_id),
                document_type_id: record.document_type_id.clone(),
                records: vec![record],
            }),
        }
    }

    // Unknown types sort after every catalog position; the sort is stable
    shelves.sort_by_key(|s| registry.position(&s.document_type_id).unwrap_or(usize::MAX));
    shelves
}
