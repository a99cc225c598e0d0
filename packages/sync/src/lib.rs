//! # Essay Sync
//!
//! Persistence for essay documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   push    ┌──────────────┐  update   ┌──────────────────┐
//! │ EditSession  │ ────────▶ │ WriteThrough │ ────────▶ │ dyn SyncGateway  │
//! └──────────────┘           └──────────────┘           │  - memory        │
//!        ▲                                              │  - JSON files    │
//!        └──────────────── load_document ◀───────────── └──────────────────┘
//! ```
//!
//! The in-memory session is the source of truth while editing. Writes are
//! fire-and-forget and revision-gated; reads happen once, when a document is
//! opened.

mod error;
mod file;
mod gateway;
mod library;
mod loader;
mod memory;
mod record;
mod writer;

pub use error::SyncError;
pub use file::JsonFileGateway;
pub use gateway::SyncGateway;
pub use library::{list_library, shelve, LibraryShelf};
pub use loader::{create_document, document_from_snapshot, load_document, snapshot_of, OpenDocument};
pub use memory::MemoryGateway;
pub use record::{EssayRecord, RecordPatch, StructureSnapshot, WriteOutcome, DEFAULT_TITLE};
pub use writer::WriteThrough;
