use crate::modules::commitments::core::commitment::DraftError;
use crate::shared::infrastructure::remote_client::{RemoteError, Table};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("remote failure on {table}: {source}")]
    RemoteFailure {
        table: Table,
        #[source]
        source: RemoteError,
    },

    #[error("could not encode the {table} payload: {source}")]
    Encode {
        table: Table,
        #[source]
        source: RemoteError,
    },

    #[error("{table} row {id} was written remotely but could not be read back: {source}")]
    Unreadable {
        table: Table,
        id: String,
        #[source]
        source: RemoteError,
    },

    #[error("commitment {id} is not in the local cache")]
    NotFound { id: String },

    #[error(transparent)]
    Invalid(#[from] DraftError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub table: Table,
    pub error: RemoteError,
}

/// Outcome of a store load. Each collection loads independently; failed ones keep their previous contents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub failures: Vec<LoadFailure>,
}

impl LoadReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_tables(&self) -> Vec<Table> {
        self.failures.iter().map(|failure| failure.table).collect()
    }
}
