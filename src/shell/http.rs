use axum::{
    Extension, Router,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::commitments::use_cases::export_commitments::inbound::http as export_http;
use crate::modules::commitments::use_cases::list_commitments::inbound::http as list_http;
use crate::modules::commitments::use_cases::manage_commitments::inbound::http as manage_http;
use crate::shell::graphql::{build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/commitments", get(list_http::handle).post(manage_http::create))
        .route("/commitments/export.csv", get(export_http::handle))
        .route(
            "/commitments/{id}",
            patch(manage_http::update).delete(manage_http::remove),
        )
        .route("/areas", get(list_http::list_areas))
        .route("/meetings", get(list_http::list_meetings))
        .route("/responsibles", get(list_http::list_responsibles))
        .route("/reload", post(list_http::reload))
        .route("/gql", get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
