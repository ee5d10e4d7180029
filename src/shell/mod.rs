// Composition root for the commitments service.
//
// Responsibilities
// - Hold the shared AppState handed to every inbound adapter.
// - Assemble the axum router and the GraphQL schema.
// - The binary entry point reads settings, picks the remote client and serves.

pub mod graphql;
pub mod http;
pub mod state;
