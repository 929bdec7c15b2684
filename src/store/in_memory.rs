use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{DocumentStore, Versioned};
use crate::document::Document;
use crate::error::EngineError;

/// Internal stored representation of a document.
struct StoredDocument {
    bytes: Vec<u8>,
    version: u64,
}

/// In-memory document store backed by a HashMap.
///
/// Documents are kept as serialized bytes, so every load is a real
/// deserialize and id-based child references are the only ones that survive.
/// Clone-friendly via Arc; clones share the same storage.
#[derive(Clone)]
pub struct InMemoryDocumentStore {
    storage: Arc<RwLock<HashMap<String, StoredDocument>>>,
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Drop every stored document. Test isolation helper.
    pub fn clear(&self) -> Result<(), EngineError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| EngineError::Storage("lock poisoned".into()))?;
        storage.clear();
        Ok(())
    }

    fn encode(document: &Document) -> Result<Vec<u8>, EngineError> {
        serde_json::to_vec(document).map_err(|e| EngineError::Serde(e.to_string()))
    }

    fn decode(bytes: &[u8]) -> Result<Document, EngineError> {
        serde_json::from_slice(bytes).map_err(|e| EngineError::Serde(e.to_string()))
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn get(&self, id: &str) -> Result<Option<Versioned<Document>>, EngineError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| EngineError::Storage("lock poisoned".into()))?;

        match storage.get(id) {
            Some(stored) => Ok(Some(Versioned {
                data: Self::decode(&stored.bytes)?,
                version: stored.version,
            })),
            None => Ok(None),
        }
    }

    fn insert(&self, document: &Document) -> Result<Versioned<Document>, EngineError> {
        let bytes = Self::encode(document)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| EngineError::Storage("lock poisoned".into()))?;

        if let Some(existing) = storage.get(document.id()) {
            return Err(EngineError::Conflict {
                id: document.id().to_string(),
                expected: 0,
                actual: existing.version,
            });
        }

        storage.insert(
            document.id().to_string(),
            StoredDocument { bytes, version: 1 },
        );
        log::debug!("inserted document {}", document.id());

        Ok(Versioned {
            data: document.clone(),
            version: 1,
        })
    }

    fn update(
        &self,
        document: &Document,
        expected_version: u64,
    ) -> Result<Versioned<Document>, EngineError> {
        let bytes = Self::encode(document)?;

        let mut storage = self
            .storage
            .write()
            .map_err(|_| EngineError::Storage("lock poisoned".into()))?;

        let actual_version = storage
            .get(document.id())
            .map(|s| s.version)
            .ok_or_else(|| EngineError::NotFound {
                entity: "document",
                id: document.id().to_string(),
            })?;

        if actual_version != expected_version {
            return Err(EngineError::Conflict {
                id: document.id().to_string(),
                expected: expected_version,
                actual: actual_version,
            });
        }

        let new_version = actual_version + 1;
        storage.insert(
            document.id().to_string(),
            StoredDocument {
                bytes,
                version: new_version,
            },
        );

        Ok(Versioned {
            data: document.clone(),
            version: new_version,
        })
    }

    fn find(
        &self,
        predicate: &dyn Fn(&Document) -> bool,
    ) -> Result<Vec<Versioned<Document>>, EngineError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| EngineError::Storage("lock poisoned".into()))?;

        let mut results = Vec::new();
        for stored in storage.values() {
            let document = Self::decode(&stored.bytes)?;
            if predicate(&document) {
                results.push(Versioned {
                    data: document,
                    version: stored.version,
                });
            }
        }

        Ok(results)
    }
}
