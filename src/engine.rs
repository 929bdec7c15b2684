use log::warn;

use crate::document::{CollaborationOutcome, CollaborationStatus, Document, VoteOutcome};
use crate::error::EngineError;
use crate::store::{DocumentStore, ListFilter, Versioned};

/// How many times a stale write is retried before the conflict surfaces.
const MAX_COMMIT_ATTEMPTS: usize = 5;

/// What a mutation closure decided: persist the document, or return the
/// value without writing (duplicate guards take the second path, so a no-op
/// never bumps the version or the updated stamp).
enum Applied<T> {
    Write(T),
    Skip(T),
}

/// The engine's entry point: an explicitly constructed store handle plus the
/// persisted operations over it.
///
/// Every mutation is load -> apply -> version-checked write. A write that
/// loses the race is retried by reloading and reapplying; the duplicate
/// guards re-run on each attempt, so retries cannot double-insert votes or
/// collaborations.
pub struct Engine<S> {
    store: S,
}

impl<S: DocumentStore> Engine<S> {
    pub fn new(store: S) -> Self {
        Engine { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch one document by id, deleted or not.
    pub fn document(&self, doc_id: &str) -> Result<Option<Versioned<Document>>, EngineError> {
        self.store.get(doc_id)
    }

    /// Enumerate documents; soft-deleted ones are hidden unless the filter
    /// asks for them.
    pub fn list_documents(&self, filter: ListFilter) -> Result<Vec<Versioned<Document>>, EngineError> {
        self.store.list(filter)
    }

    /// Append a candidate translation to a message. Returns the new
    /// proposal's id.
    pub fn add_proposal(
        &self,
        doc_id: &str,
        message_id: &str,
        text: &str,
        author_id: &str,
    ) -> Result<String, EngineError> {
        self.mutate(doc_id, |doc| {
            let id = doc.append_proposal(message_id, text, author_id)?.id().to_string();
            Ok(Applied::Write(id))
        })
    }

    /// Cast one author's vote on a proposal. At most one vote per author
    /// holds across concurrent callers: the version-checked write makes the
    /// scan-then-append atomic per document.
    pub fn cast_vote(
        &self,
        doc_id: &str,
        message_id: &str,
        proposal_id: &str,
        author_id: &str,
    ) -> Result<VoteOutcome, EngineError> {
        self.mutate(doc_id, |doc| {
            match doc.cast_vote(message_id, proposal_id, author_id)? {
                VoteOutcome::AlreadyVoted => Ok(Applied::Skip(VoteOutcome::AlreadyVoted)),
                VoteOutcome::Recorded => Ok(Applied::Write(VoteOutcome::Recorded)),
            }
        })
    }

    /// Ask to collaborate on a document.
    pub fn request_collaboration(
        &self,
        doc_id: &str,
        author_id: &str,
    ) -> Result<CollaborationOutcome, EngineError> {
        self.mutate(doc_id, |doc| match doc.request_collaboration(author_id) {
            CollaborationOutcome::AlreadyCollaborator => {
                Ok(Applied::Skip(CollaborationOutcome::AlreadyCollaborator))
            }
            CollaborationOutcome::Requested => Ok(Applied::Write(CollaborationOutcome::Requested)),
        })
    }

    /// Overwrite a collaborator's membership status.
    pub fn set_collaborator_status(
        &self,
        doc_id: &str,
        author_id: &str,
        status: CollaborationStatus,
    ) -> Result<(), EngineError> {
        self.mutate(doc_id, |doc| {
            doc.set_collaborator_status(author_id, status)?;
            Ok(Applied::Write(()))
        })
    }

    /// Soft-delete a document.
    pub fn mark_deleted(&self, doc_id: &str) -> Result<(), EngineError> {
        self.mutate(doc_id, |doc| {
            doc.mark_deleted();
            Ok(Applied::Write(()))
        })
    }

    /// The shared load-mutate-commit cycle with bounded conflict retry.
    fn mutate<T, F>(&self, doc_id: &str, mut apply: F) -> Result<T, EngineError>
    where
        F: FnMut(&mut Document) -> Result<Applied<T>, EngineError>,
    {
        let mut last_conflict = None;
        for attempt in 0..MAX_COMMIT_ATTEMPTS {
            let versioned = self.store.get(doc_id)?.ok_or_else(|| EngineError::NotFound {
                entity: "document",
                id: doc_id.to_string(),
            })?;
            let mut doc = versioned.data;

            match apply(&mut doc)? {
                Applied::Skip(value) => return Ok(value),
                Applied::Write(value) => {
                    doc.touch();
                    match self.store.update(&doc, versioned.version) {
                        Ok(_) => return Ok(value),
                        Err(err @ EngineError::Conflict { .. }) => {
                            warn!(
                                "concurrent write on document {} (attempt {}), retrying",
                                doc_id,
                                attempt + 1
                            );
                            last_conflict = Some(err);
                        }
                        Err(err) => return Err(err),
                    }
                }
            }
        }

        // Only reachable after MAX_COMMIT_ATTEMPTS straight conflicts.
        Err(last_conflict
            .unwrap_or_else(|| EngineError::Storage("commit retries exhausted".into())))
    }
}
