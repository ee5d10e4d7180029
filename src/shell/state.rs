use crate::modules::commitments::application::commitment_store::CommitmentStore;
use crate::modules::commitments::use_cases::manage_commitments::admin_gate::AdminGate;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<CommitmentStore>,
    pub admin_gate: AdminGate,
}
