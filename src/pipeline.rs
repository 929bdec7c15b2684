use log::debug;

use crate::catalog;
use crate::document::{Document, NewDocument};
use crate::engine::Engine;
use crate::error::EngineError;
use crate::store::DocumentStore;

/// Content-type hint handed to the transport layer alongside an export.
pub const EXPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Suggested download filename for an exported catalog.
pub const EXPORT_FILENAME: &str = "translation.po";

/// Result of ingesting a catalog. A count of zero is a valid receipt; whether
/// an empty upload is a user-facing failure is the caller layer's call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportReceipt {
    pub document_id: String,
    pub message_count: usize,
}

/// A rendered catalog plus the transport hints the request layer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogExport {
    pub body: String,
    pub filename: String,
    pub content_type: &'static str,
}

impl<S: DocumentStore> Engine<S> {
    /// Ingest raw catalog text into a new document: decode, create, append
    /// one message per decodable pair, persist once.
    pub fn import_catalog(
        &self,
        raw_text: &str,
        fields: NewDocument,
        author_id: &str,
    ) -> Result<ImportReceipt, EngineError> {
        let mut document = Document::create(fields, author_id)?;

        let mut message_count = 0;
        for pair in catalog::decode(raw_text) {
            document.append_message(pair.source, Some(pair.target.to_string()));
            message_count += 1;
        }

        self.store().insert(&document)?;
        debug!(
            "imported document {} with {} messages",
            document.id(),
            message_count
        );

        Ok(ImportReceipt {
            document_id: document.id().to_string(),
            message_count,
        })
    }

    /// Render a document's current state as catalog text. Deleted documents
    /// remain exportable.
    pub fn export_catalog(&self, doc_id: &str) -> Result<CatalogExport, EngineError> {
        let versioned = self.store().get(doc_id)?.ok_or_else(|| EngineError::NotFound {
            entity: "document",
            id: doc_id.to_string(),
        })?;

        Ok(CatalogExport {
            body: catalog::encode(versioned.data.messages()),
            filename: EXPORT_FILENAME.to_string(),
            content_type: EXPORT_CONTENT_TYPE,
        })
    }
}
