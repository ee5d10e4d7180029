use std::sync::Arc;

use commitments::config::load_settings;
use commitments::modules::commitments::application::commitment_store::CommitmentStore;
use commitments::modules::commitments::use_cases::manage_commitments::admin_gate::AdminGate;
use commitments::shared::infrastructure::remote_client::RemoteClient;
use commitments::shared::infrastructure::remote_client::in_memory::InMemoryRemoteClient;
use commitments::shared::infrastructure::remote_client::postgrest::PostgrestRemoteClient;
use commitments::shell::http::router;
use commitments::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = load_settings();
    let addr = settings.socket_addr()?;

    let remote: Arc<dyn RemoteClient> = match &settings.remote_url {
        Some(url) if !settings.use_in_memory_remote => {
            tracing::info!(%url, "using remote backend");
            Arc::new(PostgrestRemoteClient::new(url.clone(), settings.remote_api_key.clone()))
        }
        _ => {
            tracing::warn!("no remote URL configured, using the in-memory remote");
            Arc::new(InMemoryRemoteClient::new())
        }
    };
    if settings.admin_password.is_empty() {
        tracing::warn!("no admin password configured, deletions are disabled");
    }

    let store = Arc::new(CommitmentStore::new(remote));
    let report = store.load().await;
    if !report.is_complete() {
        tracing::warn!(failed = ?report.failed_tables(), "starting with a partially loaded cache");
    }

    let state = AppState {
        store,
        admin_gate: AdminGate::new(settings.admin_password.clone()),
    };
    let app = router(state);

    tracing::info!("HTTP endpoint: http://{}/commitments", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
