use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::{DateTime, NaiveDate, Utc};

use crate::modules::commitments::core::commitment::Commitment;
use crate::modules::commitments::core::deadline::DeadlineStatus;
use crate::modules::commitments::core::reference::{Area, Meeting, Responsible};
use crate::modules::commitments::use_cases::list_commitments::query_view::{self, CategoryFilter};
use crate::shell::state::AppState;

#[derive(async_graphql::Enum, Clone, Copy, PartialEq, Eq)]
pub enum GqlDeadlineStatus {
    Overdue,
    DueSoon,
    OnTrack,
}

impl From<DeadlineStatus> for GqlDeadlineStatus {
    fn from(status: DeadlineStatus) -> Self {
        match status {
            DeadlineStatus::Overdue => Self::Overdue,
            DeadlineStatus::DueSoon => Self::DueSoon,
            DeadlineStatus::OnTrack => Self::OnTrack,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCommitment {
    pub id: ID,
    pub created_at: DateTime<Utc>,
    pub priority: Option<u8>,
    pub category: Option<String>,
    pub meeting_name: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    pub theme: Option<String>,
    pub action: Option<String>,
    pub responsible: Option<String>,
    pub deadline_status: Option<GqlDeadlineStatus>,
}

impl From<Commitment> for GqlCommitment {
    fn from(c: Commitment) -> Self {
        let today = Utc::now().date_naive();
        Self {
            deadline_status: c
                .due_date
                .map(|due_date| DeadlineStatus::for_due_date(due_date, today).into()),
            id: ID(c.id),
            created_at: c.created_at,
            priority: c.priority,
            category: c.category,
            meeting_name: c.meeting_name,
            registration_date: c.registration_date,
            due_date: c.due_date,
            theme: c.theme,
            action: c.action,
            responsible: c.responsible,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlArea {
    pub id: ID,
    pub name: String,
    pub icon: Option<String>,
}

impl From<Area> for GqlArea {
    fn from(a: Area) -> Self {
        Self { id: ID(a.id), name: a.name, icon: a.icon }
    }
}

/// Meetings and responsibles share this shape.
#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlNamedEntry {
    pub id: ID,
    pub name: String,
}

impl From<Meeting> for GqlNamedEntry {
    fn from(m: Meeting) -> Self {
        Self { id: ID(m.id), name: m.name }
    }
}

impl From<Responsible> for GqlNamedEntry {
    fn from(r: Responsible) -> Self {
        Self { id: ID(r.id), name: r.name }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn commitments(
        &self,
        context: &Context<'_>,
        category: Option<String>,
        search: Option<String>,
    ) -> GqlResult<Vec<GqlCommitment>> {
        let state = context.data_unchecked::<AppState>();
        let commitments = state.store.list().await;
        let filter = CategoryFilter::from(category.as_deref());
        let view = query_view::apply(&commitments, &filter, search.as_deref().unwrap_or(""));
        Ok(view.into_iter().map(Into::into).collect())
    }

    async fn areas(&self, context: &Context<'_>) -> GqlResult<Vec<GqlArea>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.areas().await.into_iter().map(Into::into).collect())
    }

    async fn meetings(&self, context: &Context<'_>) -> GqlResult<Vec<GqlNamedEntry>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.meetings().await.into_iter().map(Into::into).collect())
    }

    async fn responsibles(&self, context: &Context<'_>) -> GqlResult<Vec<GqlNamedEntry>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.store.responsibles().await.into_iter().map(Into::into).collect())
    }
}
