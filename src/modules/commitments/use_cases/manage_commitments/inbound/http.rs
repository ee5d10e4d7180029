use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::modules::commitments::application::errors::StoreError;
use crate::modules::commitments::core::commitment::{CommitmentDraft, CommitmentPatch};
use crate::modules::commitments::use_cases::manage_commitments::admin_gate::ADMIN_PASSWORD_HEADER;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: message.into() })).into_response()
}

fn store_error_response(error: StoreError) -> Response {
    let status = match &error {
        StoreError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::RemoteFailure { .. } | StoreError::Unreadable { .. } => StatusCode::BAD_GATEWAY,
        StoreError::Encode { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };
    error_response(status, error.to_string())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CommitmentDraft>, JsonRejection>,
) -> impl IntoResponse {
    let Json(draft) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    match state.store.insert(draft).await {
        Ok(commitment) => (StatusCode::CREATED, Json(commitment)).into_response(),
        Err(e) => store_error_response(e),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CommitmentPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return error_response(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()),
    };

    match state.store.update(&id, patch).await {
        Ok(commitment) => Json(commitment).into_response(),
        Err(e) => store_error_response(e),
    }
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let candidate = headers
        .get(ADMIN_PASSWORD_HEADER)
        .and_then(|value| value.to_str().ok());
    if !state.admin_gate.allows(candidate) {
        return error_response(StatusCode::FORBIDDEN, "admin password required");
    }

    match state.store.remove(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => store_error_response(e),
    }
}
