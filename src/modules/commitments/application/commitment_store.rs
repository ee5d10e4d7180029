// Commitment store: the local mirror of the remote commitment tables.
//
// Purpose
// - Serve commitments and reference lists from memory, so views never query the remote service per keystroke.
//
// Responsibilities
// - Load all four collections from the remote client and replace the cache wholesale.
// - Insert, update and remove through the remote client, and touch the cache only after the remote confirms.
// - Keep each operation atomic with respect to the cache: old state or new state, never a mix.
// - Log every remote failure before returning it. Nothing is retried.
// - A payload that fails to encode never reaches the remote. A confirmed row that fails to decode
//   is reported as Unreadable and the cache is left as it was until the next load.
//
// Ordering contract
// - After load, commitments are ordered by created_at descending, as returned by the remote.
// - A newly inserted commitment is placed at the front regardless of its created_at. No re-sort.
//
// Cache drift
// - If the remote confirms an update or delete for an id the cache does not hold, the cache is left
//   untouched and the call fails with StoreError::NotFound. Callers recover with `load`.

use crate::modules::commitments::adapters::mappers::record_mapper::{
    CREATED_AT_COLUMN, decode_commitment, encode_draft, encode_patch,
};
use crate::modules::commitments::application::errors::{LoadFailure, LoadReport, StoreError};
use crate::modules::commitments::core::commitment::{Commitment, CommitmentDraft, CommitmentPatch};
use crate::modules::commitments::core::reference::{Area, Meeting, Responsible};
use crate::shared::infrastructure::remote_client::{
    Order, Query, RemoteClient, RemoteError, Table, id_of,
};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

const NAME_COLUMN: &str = "name";

#[derive(Debug, Default)]
struct Cache {
    commitments: Vec<Commitment>,
    areas: Vec<Area>,
    meetings: Vec<Meeting>,
    responsibles: Vec<Responsible>,
}

pub struct CommitmentStore {
    remote: Arc<dyn RemoteClient>,
    cache: RwLock<Cache>,
}

fn remote_failure(table: Table) -> impl FnOnce(RemoteError) -> StoreError {
    move |source| {
        error!(%table, error = %source, "remote call failed");
        StoreError::RemoteFailure { table, source }
    }
}

fn encode_failure(table: Table) -> impl FnOnce(RemoteError) -> StoreError {
    move |source| {
        error!(%table, error = %source, "failed to encode payload; no remote call made");
        StoreError::Encode { table, source }
    }
}

fn unreadable(table: Table, id: &str, source: RemoteError) -> StoreError {
    error!(%table, id, error = %source, "remote confirmed the write but the returned row could not be decoded; reload to resync");
    StoreError::Unreadable { table, id: id.to_string(), source }
}

fn cache_drift(operation: &str, id: &str) -> StoreError {
    warn!(operation, id, "remote confirmed a change for an id missing from the cache; reload to resync");
    StoreError::NotFound { id: id.to_string() }
}

impl CommitmentStore {
    pub fn new(remote: Arc<dyn RemoteClient>) -> Self {
        Self {
            remote,
            cache: RwLock::new(Cache::default()),
        }
    }

    pub async fn load(&self) -> LoadReport {
        let (commitments, areas, meetings, responsibles) = tokio::join!(
            self.fetch_commitments(),
            self.fetch_reference::<Area>(Table::Areas),
            self.fetch_reference::<Meeting>(Table::Meetings),
            self.fetch_reference::<Responsible>(Table::Responsibles),
        );

        let mut report = LoadReport::default();
        let mut cache = self.cache.write().await;
        match commitments {
            Ok(rows) => cache.commitments = rows,
            Err(error) => report.failures.push(LoadFailure { table: Table::Commitments, error }),
        }
        match areas {
            Ok(rows) => cache.areas = rows,
            Err(error) => report.failures.push(LoadFailure { table: Table::Areas, error }),
        }
        match meetings {
            Ok(rows) => cache.meetings = rows,
            Err(error) => report.failures.push(LoadFailure { table: Table::Meetings, error }),
        }
        match responsibles {
            Ok(rows) => cache.responsibles = rows,
            Err(error) => report.failures.push(LoadFailure { table: Table::Responsibles, error }),
        }

        for failure in &report.failures {
            error!(table = %failure.table, error = %failure.error, "failed to load collection");
        }
        info!(
            commitments = cache.commitments.len(),
            areas = cache.areas.len(),
            meetings = cache.meetings.len(),
            responsibles = cache.responsibles.len(),
            failed = report.failures.len(),
            "store loaded"
        );
        report
    }

    async fn fetch_commitments(&self) -> Result<Vec<Commitment>, RemoteError> {
        self.remote
            .select(Table::Commitments, Query::ordered(Order::desc(CREATED_AT_COLUMN)))
            .await?
            .into_iter()
            .map(decode_commitment)
            .collect()
    }

    async fn fetch_reference<T: DeserializeOwned>(&self, table: Table) -> Result<Vec<T>, RemoteError> {
        self.remote
            .select(table, Query::ordered(Order::asc(NAME_COLUMN)))
            .await?
            .into_iter()
            .map(|row| serde_json::from_value(row).map_err(|e| RemoteError::Decode(e.to_string())))
            .collect()
    }

    pub async fn list(&self) -> Vec<Commitment> {
        self.cache.read().await.commitments.clone()
    }

    pub async fn get(&self, id: &str) -> Option<Commitment> {
        self.cache
            .read()
            .await
            .commitments
            .iter()
            .find(|commitment| commitment.id == id)
            .cloned()
    }

    pub async fn areas(&self) -> Vec<Area> {
        self.cache.read().await.areas.clone()
    }

    pub async fn meetings(&self) -> Vec<Meeting> {
        self.cache.read().await.meetings.clone()
    }

    pub async fn responsibles(&self) -> Vec<Responsible> {
        self.cache.read().await.responsibles.clone()
    }

    pub async fn meeting_names(&self) -> Vec<String> {
        self.cache.read().await.meetings.iter().map(|m| m.name.clone()).collect()
    }

    pub async fn responsible_names(&self) -> Vec<String> {
        self.cache.read().await.responsibles.iter().map(|r| r.name.clone()).collect()
    }

    pub async fn insert(&self, draft: CommitmentDraft) -> Result<Commitment, StoreError> {
        draft.validate()?;
        let row = encode_draft(&draft).map_err(encode_failure(Table::Commitments))?;
        let stored = self
            .remote
            .insert(Table::Commitments, row)
            .await
            .map_err(remote_failure(Table::Commitments))?;
        let id = id_of(&stored).unwrap_or_else(|| "?".to_string());
        let commitment = decode_commitment(stored)
            .map_err(|source| unreadable(Table::Commitments, &id, source))?;

        self.cache.write().await.commitments.insert(0, commitment.clone());
        debug!(id = %commitment.id, "commitment inserted");
        Ok(commitment)
    }

    pub async fn update(&self, id: &str, patch: CommitmentPatch) -> Result<Commitment, StoreError> {
        patch.validate()?;
        let changes = encode_patch(&patch).map_err(encode_failure(Table::Commitments))?;
        let stored = self
            .remote
            .update(Table::Commitments, id, changes)
            .await
            .map_err(remote_failure(Table::Commitments))?;
        let commitment = decode_commitment(stored)
            .map_err(|source| unreadable(Table::Commitments, id, source))?;

        let mut cache = self.cache.write().await;
        let Some(slot) = cache.commitments.iter_mut().find(|c| c.id == id) else {
            return Err(cache_drift("update", id));
        };
        *slot = commitment.clone();
        debug!(id, "commitment updated");
        Ok(commitment)
    }

    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.remote
            .delete(Table::Commitments, id)
            .await
            .map_err(remote_failure(Table::Commitments))?;

        let mut cache = self.cache.write().await;
        let Some(index) = cache.commitments.iter().position(|c| c.id == id) else {
            return Err(cache_drift("remove", id));
        };
        cache.commitments.remove(index);
        debug!(id, "commitment removed");
        Ok(())
    }
}
