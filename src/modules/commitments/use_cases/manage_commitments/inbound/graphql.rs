use async_graphql::{Context, ID, InputObject, Object, Result as GqlResult};
use chrono::NaiveDate;

use crate::modules::commitments::core::commitment::{CommitmentDraft, CommitmentPatch};
use crate::modules::commitments::use_cases::list_commitments::inbound::graphql::GqlCommitment;
use crate::shell::state::AppState;

#[derive(InputObject)]
pub struct CommitmentInput {
    pub priority: u8,
    pub category: String,
    pub meeting_name: String,
    pub registration_date: NaiveDate,
    pub due_date: NaiveDate,
    pub theme: String,
    pub action: String,
    pub responsible: String,
}

impl From<CommitmentInput> for CommitmentDraft {
    fn from(i: CommitmentInput) -> Self {
        Self {
            priority: i.priority,
            category: i.category,
            meeting_name: i.meeting_name,
            registration_date: i.registration_date,
            due_date: i.due_date,
            theme: i.theme,
            action: i.action,
            responsible: i.responsible,
        }
    }
}

#[derive(InputObject, Default)]
pub struct CommitmentPatchInput {
    pub priority: Option<u8>,
    pub category: Option<String>,
    pub meeting_name: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub theme: Option<String>,
    pub action: Option<String>,
    pub responsible: Option<String>,
}

impl From<CommitmentPatchInput> for CommitmentPatch {
    fn from(i: CommitmentPatchInput) -> Self {
        Self {
            priority: i.priority,
            category: i.category,
            meeting_name: i.meeting_name,
            registration_date: i.registration_date,
            due_date: i.due_date,
            theme: i.theme,
            action: i.action,
            responsible: i.responsible,
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_commitment(
        &self,
        context: &Context<'_>,
        input: CommitmentInput,
    ) -> GqlResult<GqlCommitment> {
        let state = context.data_unchecked::<AppState>();
        let created = state
            .store
            .insert(input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(created.into())
    }

    async fn update_commitment(
        &self,
        context: &Context<'_>,
        id: ID,
        input: CommitmentPatchInput,
    ) -> GqlResult<GqlCommitment> {
        let state = context.data_unchecked::<AppState>();
        let updated = state
            .store
            .update(&id, input.into())
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(updated.into())
    }

    async fn delete_commitment(
        &self,
        context: &Context<'_>,
        id: ID,
        password: String,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        if !state.admin_gate.allows(Some(&password)) {
            return Err(async_graphql::Error::new("admin password required"));
        }
        state
            .store
            .remove(&id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(true)
    }
}
