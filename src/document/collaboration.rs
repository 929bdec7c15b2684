use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Membership status of one author on one document.
///
/// The usual path is `Pending -> Accepted` (or `Pending -> Blocked`), with
/// `Accepted <-> Admin` promotions and any state movable to `Blocked`. No
/// state is terminal; the engine performs the literal write and leaves
/// transition policy to the access-control layer above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollaborationStatus {
    Pending,
    Accepted,
    Admin,
    Blocked,
}

impl CollaborationStatus {
    /// Parse the caller-supplied status literal.
    pub fn from_field(value: &str) -> Option<CollaborationStatus> {
        match value {
            "pending" => Some(CollaborationStatus::Pending),
            "accepted" => Some(CollaborationStatus::Accepted),
            "admin" => Some(CollaborationStatus::Admin),
            "blocked" => Some(CollaborationStatus::Blocked),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CollaborationStatus::Pending => "pending",
            CollaborationStatus::Accepted => "accepted",
            CollaborationStatus::Admin => "admin",
            CollaborationStatus::Blocked => "blocked",
        }
    }
}

impl fmt::Display for CollaborationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of requesting collaboration. An author with an existing record
/// (the owner included) is rejected, not errored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollaborationOutcome {
    Requested,
    AlreadyCollaborator,
}

/// Membership record granting an author a role on a document. At most one
/// per author per document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collaboration {
    author_id: String,
    status: CollaborationStatus,
    created_at: SystemTime,
    updated_at: SystemTime,
}

impl Collaboration {
    pub(crate) fn new(author_id: impl Into<String>) -> Self {
        let now = SystemTime::now();
        Collaboration {
            author_id: author_id.into(),
            status: CollaborationStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn status(&self) -> CollaborationStatus {
        self.status
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    /// Overwrite the status in place. Last write wins; no history is kept.
    pub(crate) fn set_status(&mut self, status: CollaborationStatus) {
        self.status = status;
        self.updated_at = SystemTime::now();
    }
}
