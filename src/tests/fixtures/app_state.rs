// AppState wired to an in-memory remote, for inbound adapter tests.

use crate::modules::commitments::application::commitment_store::CommitmentStore;
use crate::modules::commitments::use_cases::manage_commitments::admin_gate::AdminGate;
use crate::shared::infrastructure::remote_client::Table;
use crate::shared::infrastructure::remote_client::in_memory::InMemoryRemoteClient;
use crate::shell::state::AppState;
use crate::tests::fixtures::commitments::commitment_row;
use serde_json::json;
use std::sync::Arc;

pub const TEST_ADMIN_PASSWORD: &str = "789512";

/// Two commitments (FIN "Budget Review" newest, HR "Hiring Plan") plus one row per reference table.
pub async fn seeded_remote() -> Arc<InMemoryRemoteClient> {
    let remote = Arc::new(InMemoryRemoteClient::new());
    remote
        .seed(
            Table::Commitments,
            vec![
                commitment_row("c-2", "2024-01-01T00:00:00Z", "HR", "Hiring Plan"),
                commitment_row("c-1", "2024-02-01T00:00:00Z", "FIN", "Budget Review"),
            ],
        )
        .await;
    remote.seed(Table::Areas, vec![json!({ "id": 1, "name": "FIN", "icon": "coins" })]).await;
    remote.seed(Table::Meetings, vec![json!({ "id": 1, "name": "Budget Review" })]).await;
    remote.seed(Table::Responsibles, vec![json!({ "id": 1, "name": "Ana" })]).await;
    remote
}

pub async fn make_test_state(remote: Arc<InMemoryRemoteClient>) -> AppState {
    let store = Arc::new(CommitmentStore::new(remote));
    store.load().await;
    AppState {
        store,
        admin_gate: AdminGate::new(TEST_ADMIN_PASSWORD),
    }
}
