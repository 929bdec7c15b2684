//! Document store - whole-document load/save with optimistic versioning.
//!
//! The document is the unit of isolation: every mutation below it is
//! persisted by writing the whole document back. `update` takes the version
//! observed at load time and fails with [`EngineError::Conflict`] when the
//! stored version has moved, which is what closes the lost-update hazard of
//! the read-modify-write cycle. A store is free to normalize internally as
//! long as it preserves these load/save semantics.

mod in_memory;

use crate::document::Document;
use crate::error::EngineError;

pub use in_memory::InMemoryDocumentStore;

/// A document plus the storage version it was loaded at. The version goes
/// back to `update` as the optimistic write guard.
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub data: T,
    pub version: u64,
}

/// Filter for document listings. The default hides soft-deleted documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListFilter {
    pub include_deleted: bool,
}

/// Abstract whole-document storage.
pub trait DocumentStore: Send + Sync {
    /// Load a document by id. `Ok(None)` when it does not exist; deleted
    /// documents are returned like any other.
    fn get(&self, id: &str) -> Result<Option<Versioned<Document>>, EngineError>;

    /// Insert a new document. Fails with `Conflict` if the id already
    /// exists.
    fn insert(&self, document: &Document) -> Result<Versioned<Document>, EngineError>;

    /// Write a document back at `expected_version`. Fails with `Conflict`
    /// when the stored version differs and with `NotFound` when the
    /// document was never inserted.
    fn update(
        &self,
        document: &Document,
        expected_version: u64,
    ) -> Result<Versioned<Document>, EngineError>;

    /// Find documents matching a predicate.
    fn find(
        &self,
        predicate: &dyn Fn(&Document) -> bool,
    ) -> Result<Vec<Versioned<Document>>, EngineError>;

    /// Enumerate documents, hiding soft-deleted ones unless asked not to.
    fn list(&self, filter: ListFilter) -> Result<Vec<Versioned<Document>>, EngineError> {
        use crate::document::DocumentStatus;
        self.find(&|doc| filter.include_deleted || doc.status() != DocumentStatus::Deleted)
    }
}
