//! Engine for collaboratively translating PO-style message catalogs.
//!
//! A [`Document`] owns an ordered list of [`Message`]s; each message holds the
//! competing translation [`Proposal`]s collaborators submit, and each proposal
//! tallies at most one [`Vote`] per author. Membership is tracked through
//! [`Collaboration`] records on the document. The [`catalog`] module parses
//! and renders the external text format, the store persists whole documents
//! behind an optimistic version check, and [`Engine`] ties the two together
//! with load-mutate-commit operations.
//!
//! Routing, authentication and rendering live outside this crate; everything
//! here is a bounded, synchronous transform of one document plus a single
//! store call.

pub mod catalog;
mod document;
mod engine;
mod error;
mod pipeline;
mod store;

pub use document::{
    Collaboration, CollaborationOutcome, CollaborationStatus, Document, DocumentStatus, Message,
    NewDocument, Proposal, Visibility, Vote, VoteOutcome,
};
pub use engine::Engine;
pub use error::EngineError;
pub use pipeline::{CatalogExport, ImportReceipt, EXPORT_CONTENT_TYPE, EXPORT_FILENAME};
pub use store::{DocumentStore, InMemoryDocumentStore, ListFilter, Versioned};
