use std::time::SystemTime;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of casting a vote. A duplicate is a normal result of competition,
/// not an error; callers must not retry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteOutcome {
    Recorded,
    AlreadyVoted,
}

/// One collaborator's endorsement of a proposal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    author_id: String,
    cast_at: SystemTime,
}

impl Vote {
    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn cast_at(&self) -> SystemTime {
        self.cast_at
    }
}

/// A candidate translation for a message, authored by one collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proposal {
    id: String,
    text: String,
    author_id: String,
    created_at: SystemTime,
    updated_at: SystemTime,
    votes: Vec<Vote>,
}

impl Proposal {
    pub(crate) fn new(text: impl Into<String>, author_id: impl Into<String>) -> Self {
        let now = SystemTime::now();
        Proposal {
            id: Uuid::new_v4().to_string(),
            text: text.into(),
            author_id: author_id.into(),
            created_at: now,
            updated_at: now,
            votes: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }

    pub fn created_at(&self) -> SystemTime {
        self.created_at
    }

    pub fn updated_at(&self) -> SystemTime {
        self.updated_at
    }

    pub fn votes(&self) -> &[Vote] {
        &self.votes
    }

    pub fn vote_count(&self) -> usize {
        self.votes.len()
    }

    /// Scan-then-append vote insertion. At most one vote per author; a
    /// duplicate leaves the tally untouched.
    pub(crate) fn cast_vote(&mut self, author_id: &str) -> VoteOutcome {
        if self.votes.iter().any(|vote| vote.author_id == author_id) {
            return VoteOutcome::AlreadyVoted;
        }
        self.votes.push(Vote {
            author_id: author_id.to_string(),
            cast_at: SystemTime::now(),
        });
        VoteOutcome::Recorded
    }
}

/// One source string within a document, the unit proposals compete over.
///
/// `target_text` is the single-value translation captured at import time. It
/// is superseded by proposals but kept as the fallback when a message has
/// none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    id: String,
    source_text: String,
    target_text: Option<String>,
    proposals: Vec<Proposal>,
}

impl Message {
    pub(crate) fn new(source_text: impl Into<String>, target_text: Option<String>) -> Self {
        Message {
            id: Uuid::new_v4().to_string(),
            source_text: source_text.into(),
            target_text,
            proposals: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn target_text(&self) -> Option<&str> {
        self.target_text.as_deref()
    }

    pub fn proposals(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn proposal(&self, proposal_id: &str) -> Option<&Proposal> {
        self.proposals.iter().find(|p| p.id == proposal_id)
    }

    pub(crate) fn proposal_mut(&mut self, proposal_id: &str) -> Option<&mut Proposal> {
        self.proposals.iter_mut().find(|p| p.id == proposal_id)
    }

    pub(crate) fn append_proposal(
        &mut self,
        text: impl Into<String>,
        author_id: impl Into<String>,
    ) -> &Proposal {
        self.proposals.push(Proposal::new(text, author_id));
        &self.proposals[self.proposals.len() - 1]
    }

    /// The proposal export uses as the message's value source: highest vote
    /// count, ties broken by earliest creation (and by insertion order when
    /// stamps are equal).
    pub fn winning_proposal(&self) -> Option<&Proposal> {
        let mut winner: Option<&Proposal> = None;
        for proposal in &self.proposals {
            let takes_lead = match winner {
                None => true,
                Some(current) => {
                    proposal.vote_count() > current.vote_count()
                        || (proposal.vote_count() == current.vote_count()
                            && proposal.created_at < current.created_at)
                }
            };
            if takes_lead {
                winner = Some(proposal);
            }
        }
        winner
    }

    /// The winning proposal's text, falling back to the legacy single-value
    /// translation when no proposal exists. `None` when both are absent.
    pub fn winning_text(&self) -> Option<&str> {
        match self.winning_proposal() {
            Some(proposal) => Some(proposal.text()),
            None => self.target_text.as_deref(),
        }
    }
}
