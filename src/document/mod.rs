//! The document aggregate: a translation project and everything it owns.
//!
//! `Document` is the unit of consistency. It owns an ordered list of
//! `Message`s (each owning its competing `Proposal`s, each owning its
//! `Vote`s) and an unordered set of `Collaboration` records. Children are
//! value structs addressed by generated string ids, so references held by
//! callers survive the store's serialize/deserialize round trip. Nothing
//! below the document has an independent lifecycle; every mutation is
//! persisted by saving the whole document.

mod collaboration;
mod document;
mod message;

pub use collaboration::{Collaboration, CollaborationOutcome, CollaborationStatus};
pub use document::{Document, DocumentStatus, NewDocument, Visibility};
pub use message::{Message, Proposal, Vote, VoteOutcome};
