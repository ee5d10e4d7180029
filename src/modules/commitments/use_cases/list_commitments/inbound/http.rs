use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::commitments::core::commitment::Commitment;
use crate::modules::commitments::core::deadline::DeadlineStatus;
use crate::modules::commitments::use_cases::list_commitments::query_view::{self, CategoryFilter};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListCommitmentsParams {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitmentItem {
    #[serde(flatten)]
    pub commitment: Commitment,
    /// Null when the commitment has no due date.
    pub deadline_status: Option<DeadlineStatus>,
}

impl CommitmentItem {
    pub fn new(commitment: Commitment, today: NaiveDate) -> Self {
        let deadline_status = commitment
            .due_date
            .map(|due_date| DeadlineStatus::for_due_date(due_date, today));
        Self { commitment, deadline_status }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub complete: bool,
    pub failed_tables: Vec<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListCommitmentsParams>,
) -> impl IntoResponse {
    let commitments = state.store.list().await;
    let filter = CategoryFilter::from(params.category.as_deref());
    let today = Utc::now().date_naive();

    let items: Vec<CommitmentItem> =
        query_view::apply(&commitments, &filter, params.search.as_deref().unwrap_or(""))
            .into_iter()
            .map(|commitment| CommitmentItem::new(commitment, today))
            .collect();
    Json(items)
}

pub async fn list_areas(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.areas().await)
}

pub async fn list_meetings(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.meetings().await)
}

pub async fn list_responsibles(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.responsibles().await)
}

/// Refetches every collection. A partial failure answers 502 and lists the stale tables.
pub async fn reload(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.store.load().await;
    let body = ReloadResponse {
        complete: report.is_complete(),
        failed_tables: report
            .failed_tables()
            .into_iter()
            .map(|table| table.to_string())
            .collect(),
    };
    let status = if body.complete { StatusCode::OK } else { StatusCode::BAD_GATEWAY };
    (status, Json(body)).into_response()
}
