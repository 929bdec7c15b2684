use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::collaboration::{Collaboration, CollaborationOutcome, CollaborationStatus};
use super::message::{Message, Proposal, VoteOutcome};
use crate::error::EngineError;

/// Who can see a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
}

impl Visibility {
    /// Explicit mapping from the caller-supplied form literal: `"private"`
    /// selects a private document, anything else is public.
    pub fn from_field(value: &str) -> Visibility {
        match value {
            "private" => Visibility::Private,
            _ => Visibility::Public,
        }
    }

    pub fn is_private(self) -> bool {
        matches!(self, Visibility::Private)
    }
}

/// Lifecycle status. Documents are never physically removed; deletion only
/// flips this flag and hides the document from default listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Deleted,
}

impl DocumentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentStatus::Pending => "pending",
            DocumentStatus::Deleted => "deleted",
        }
    }
}

/// Caller-supplied fields for document creation. `visibility` is the raw
/// form literal; it is mapped once, at the validation boundary.
#[derive(Debug, Clone, Default)]
pub struct NewDocument {
    pub name: String,
    pub language_from: String,
    pub language_to: String,
    pub variation: Option<String>,
    pub description: Option<String>,
    pub visibility: String,
    pub original_filename: Option<String>,
}

/// A translation project: the aggregate root and unit of consistency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    id: String,
    name: String,
    language_from: String,
    language_to: String,
    variation: Option<String>,
    description: Option<String>,
    author_id: String,
    visibility: Visibility,
    status: DocumentStatus,
    original_filename: Option<String>,
    created_at: SystemTime,
    updated_at: SystemTime,
    messages: Vec<Message>,
    collaborations: Vec<Collaboration>,
}

impl Document {
    /// Construct a pending document from caller-supplied fields.
    ///
    /// Every violated required field is collected before failing, so the
    /// caller can report them all at once.
    pub fn create(fields: NewDocument, author_id: &str) -> Result<Document, EngineError> {
        let mut missing = Vec::new();
        if fields.name.is_empty() {
            missing.push("name".to_string());
        }
        if fields.language_from.is_empty() {
            missing.push("language_from".to_string());
        }
        if fields.language_to.is_empty() {
            missing.push("language_to".to_string());
        }
        if author_id.is_empty() {
            missing.push("author_id".to_string());
        }
        if !missing.is_empty() {
            return Err(EngineError::Validation { fields: missing });
        }

        let now = SystemTime::now();
        Ok(Document {
            id: Uuid::new_v4().to_string(),
            name: fields.name,
            language_from: fields.language_from,
            language_to: fields.language_to,
            variation: fields.variation,
            description: fields.description,
            author_id: author_id.to_string(),
            visibility: Visibility::from_field(&fields.visibility),
            status: DocumentStatus::Pending,
            original_filename: fields.original_filename,
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
            collaborations: Vec::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language_from(&self) -> &str {
        &self.language_from
    }

    pub fn language_to(&self) -> &str {
        &self.language_to
    }

    pub fn variation(&self) -> Option<&str> {
        self.variation.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn original_filename(&self) -> Option<&str> {
        self.original_filename.as_deref()
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn message(&self, message_id: &str) -> Option<&Message> {
        self.messages.iter().find(|m| m.id() == message_id)
    }

    pub fn collaborations(&self) -> &[Collaboration] {
        &self.collaborations
    }

    pub fn collaboration(&self, author_id: &str) -> Option<&Collaboration> {
        self.collaborations
            .iter()
            .find(|c| c.author_id() == author_id)
    }

    /// Append a message to the ordered sequence. Does not persist.
    pub fn append_message(
        &mut self,
        source_text: impl Into<String>,
        target_text: Option<String>,
    ) -> &Message {
        self.messages.push(Message::new(source_text, target_text));
        &self.messages[self.messages.len() - 1]
    }

    /// Append a candidate translation to the addressed message.
    pub fn append_proposal(
        &mut self,
        message_id: &str,
        text: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Result<&Proposal, EngineError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id() == message_id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "message",
                id: message_id.to_string(),
            })?;
        Ok(message.append_proposal(text, author_id))
    }

    /// Cast one author's vote on the addressed proposal. A duplicate vote is
    /// reported as an outcome and leaves the document untouched.
    pub fn cast_vote(
        &mut self,
        message_id: &str,
        proposal_id: &str,
        author_id: &str,
    ) -> Result<VoteOutcome, EngineError> {
        let message = self
            .messages
            .iter_mut()
            .find(|m| m.id() == message_id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "message",
                id: message_id.to_string(),
            })?;
        let proposal =
            message
                .proposal_mut(proposal_id)
                .ok_or_else(|| EngineError::NotFound {
                    entity: "proposal",
                    id: proposal_id.to_string(),
                })?;
        Ok(proposal.cast_vote(author_id))
    }

    /// Ask to join the project. The owner and any author with an existing
    /// record are rejected; otherwise a pending record is appended.
    pub fn request_collaboration(&mut self, author_id: &str) -> CollaborationOutcome {
        if author_id == self.author_id || self.collaboration(author_id).is_some() {
            return CollaborationOutcome::AlreadyCollaborator;
        }
        self.collaborations.push(Collaboration::new(author_id));
        CollaborationOutcome::Requested
    }

    /// Overwrite a collaborator's status in place.
    pub fn set_collaborator_status(
        &mut self,
        author_id: &str,
        status: CollaborationStatus,
    ) -> Result<(), EngineError> {
        let collab = self
            .collaborations
            .iter_mut()
            .find(|c| c.author_id() == author_id)
            .ok_or_else(|| EngineError::NotFound {
                entity: "collaboration",
                id: author_id.to_string(),
            })?;
        collab.set_status(status);
        Ok(())
    }

    /// Soft-delete: the document stays fetchable by id but drops out of
    /// default listings.
    pub fn mark_deleted(&mut self) {
        self.status = DocumentStatus::Deleted;
    }

    pub(crate) fn touch(&mut self) {
        self.updated_at = SystemTime::now();
    }
}
