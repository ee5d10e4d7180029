// Commitment is the tracked action item: who owes what, from which meeting, by when.
//
// Purpose
// - Give the internal schema explicit field types. The remote schema never leaks past the mapper.
//
// Responsibilities
// - Commitment: a confirmed record, with the server assigned `id` and `created_at`.
//   Every other column is nullable remotely, so a confirmed record keeps nulls as `None`.
// - CommitmentDraft: the editable fields a user submits to create a record.
// - CommitmentPatch: a partial set of editable fields for an update.
// - Reject priorities outside 1..=5, and empty patches, before anything reaches the remote service.
//
// Boundaries
// - No input or output. Framework free apart from serde derives.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const MOST_URGENT_PRIORITY: u8 = 1;
pub const LEAST_URGENT_PRIORITY: u8 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("priority must be between 1 and 5, got {0}")]
    PriorityOutOfRange(u8),

    #[error("patch changes no field")]
    EmptyPatch,
}

fn check_priority(priority: u8) -> Result<(), DraftError> {
    if (MOST_URGENT_PRIORITY..=LEAST_URGENT_PRIORITY).contains(&priority) {
        Ok(())
    } else {
        Err(DraftError::PriorityOutOfRange(priority))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commitment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub priority: Option<u8>,
    pub category: Option<String>,
    pub meeting_name: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub theme: Option<String>,
    pub action: Option<String>,
    pub responsible: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentDraft {
    pub priority: u8,
    pub category: String,
    pub meeting_name: String,
    pub registration_date: NaiveDate,
    pub due_date: NaiveDate,
    pub theme: String,
    pub action: String,
    pub responsible: String,
}

impl CommitmentDraft {
    pub fn validate(&self) -> Result<(), DraftError> {
        check_priority(self.priority)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentPatch {
    pub priority: Option<u8>,
    pub category: Option<String>,
    pub meeting_name: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub theme: Option<String>,
    pub action: Option<String>,
    pub responsible: Option<String>,
}

impl CommitmentPatch {
    pub fn validate(&self) -> Result<(), DraftError> {
        if self.is_empty() {
            return Err(DraftError::EmptyPatch);
        }
        self.priority.map_or(Ok(()), check_priority)
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<CommitmentDraft> for CommitmentPatch {
    fn from(draft: CommitmentDraft) -> Self {
        Self {
            priority: Some(draft.priority),
            category: Some(draft.category),
            meeting_name: Some(draft.meeting_name),
            registration_date: Some(draft.registration_date),
            due_date: Some(draft.due_date),
            theme: Some(draft.theme),
            action: Some(draft.action),
            responsible: Some(draft.responsible),
        }
    }
}
