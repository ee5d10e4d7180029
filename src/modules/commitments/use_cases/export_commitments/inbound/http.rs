use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

use crate::modules::commitments::use_cases::export_commitments::csv::{EXPORT_FILE_NAME, export_csv};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let commitments = state.store.list().await;
    tracing::debug!(rows = commitments.len(), "exporting commitments as csv");
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        export_csv(&commitments),
    )
}
