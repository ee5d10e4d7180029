// Record mapper: translation between the remote commitment columns and the internal Commitment.
//
// Purpose
// - Keep the remote naming convention (`nome_reuniao`, `data_prazo`, ...) out of the rest of the crate.
//
// Responsibilities
// - One remote column per internal field and vice versa. No validation, no coercion.
// - Nullable columns stay `None` in both directions, so a null survives a round trip.
// - Decode JSON rows from the remote client into typed rows, and encode drafts and patches back.
//
// Mapping
//   id            <-> id
//   created_at    <-> createdAt
//   prioridade    <-> priority
//   categoria     <-> category
//   nome_reuniao  <-> meetingName
//   data_registro <-> registrationDate
//   data_prazo    <-> dueDate
//   tema          <-> theme
//   acao          <-> action
//   responsavel   <-> responsible

use crate::modules::commitments::core::commitment::{Commitment, CommitmentDraft, CommitmentPatch};
use crate::shared::core::primitives::deserialize_id;
use crate::shared::infrastructure::remote_client::{RemoteError, Row};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub const CREATED_AT_COLUMN: &str = "created_at";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentRow {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub prioridade: Option<u8>,
    pub categoria: Option<String>,
    pub nome_reuniao: Option<String>,
    pub data_registro: Option<NaiveDate>,
    pub data_prazo: Option<NaiveDate>,
    pub tema: Option<String>,
    pub acao: Option<String>,
    pub responsavel: Option<String>,
}

/// Insert payload. `id` and `created_at` are assigned by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewCommitmentRow {
    pub prioridade: u8,
    pub categoria: String,
    pub nome_reuniao: String,
    pub data_registro: NaiveDate,
    pub data_prazo: NaiveDate,
    pub tema: String,
    pub acao: String,
    pub responsavel: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitmentPatchRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prioridade: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_reuniao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_registro: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_prazo: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsavel: Option<String>,
}

impl From<CommitmentRow> for Commitment {
    fn from(row: CommitmentRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            priority: row.prioridade,
            category: row.categoria,
            meeting_name: row.nome_reuniao,
            registration_date: row.data_registro,
            due_date: row.data_prazo,
            theme: row.tema,
            action: row.acao,
            responsible: row.responsavel,
        }
    }
}

impl From<&Commitment> for CommitmentRow {
    fn from(commitment: &Commitment) -> Self {
        Self {
            id: commitment.id.clone(),
            created_at: commitment.created_at,
            prioridade: commitment.priority,
            categoria: commitment.category.clone(),
            nome_reuniao: commitment.meeting_name.clone(),
            data_registro: commitment.registration_date,
            data_prazo: commitment.due_date,
            tema: commitment.theme.clone(),
            acao: commitment.action.clone(),
            responsavel: commitment.responsible.clone(),
        }
    }
}

impl From<&CommitmentDraft> for NewCommitmentRow {
    fn from(draft: &CommitmentDraft) -> Self {
        Self {
            prioridade: draft.priority,
            categoria: draft.category.clone(),
            nome_reuniao: draft.meeting_name.clone(),
            data_registro: draft.registration_date,
            data_prazo: draft.due_date,
            tema: draft.theme.clone(),
            acao: draft.action.clone(),
            responsavel: draft.responsible.clone(),
        }
    }
}

impl From<&CommitmentPatch> for CommitmentPatchRow {
    fn from(patch: &CommitmentPatch) -> Self {
        Self {
            prioridade: patch.priority,
            categoria: patch.category.clone(),
            nome_reuniao: patch.meeting_name.clone(),
            data_registro: patch.registration_date,
            data_prazo: patch.due_date,
            tema: patch.theme.clone(),
            acao: patch.action.clone(),
            responsavel: patch.responsible.clone(),
        }
    }
}

pub fn to_internal(row: Option<CommitmentRow>) -> Option<Commitment> {
    row.map(Commitment::from)
}

pub fn to_external(commitment: Option<&Commitment>) -> Option<CommitmentRow> {
    commitment.map(CommitmentRow::from)
}

pub fn decode_commitment(row: Row) -> Result<Commitment, RemoteError> {
    serde_json::from_value::<CommitmentRow>(row)
        .map(Commitment::from)
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

pub fn encode_draft(draft: &CommitmentDraft) -> Result<Row, RemoteError> {
    serde_json::to_value(NewCommitmentRow::from(draft)).map_err(|e| RemoteError::Decode(e.to_string()))
}

pub fn encode_patch(patch: &CommitmentPatch) -> Result<Row, RemoteError> {
    serde_json::to_value(CommitmentPatchRow::from(patch)).map_err(|e| RemoteError::Decode(e.to_string()))
}
