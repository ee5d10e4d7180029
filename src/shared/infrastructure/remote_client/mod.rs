// Remote client port: table-oriented relational CRUD the commitment store depends on.
//
// Purpose
// - Describe the capability the store needs from the persistence service, without implementing it.
//
// Responsibilities
// - Name the four tables the store reads and writes.
// - Carry rows as JSON objects using the remote schema's own column names.
// - Report every failure as a RemoteError. Adapters never swallow errors.
//
// Boundaries
// - No field translation here. The record mapper owns the remote <-> internal naming.
//
// Testing guidance
// - Use the in memory adapter. It can go offline, fail one table, or delay calls.

pub mod in_memory;
pub mod postgrest;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

pub type Row = Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Commitments,
    Areas,
    Meetings,
    Responsibles,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Commitments => "commitments",
            Table::Areas => "areas",
            Table::Meetings => "meetings",
            Table::Responsibles => "responsibles",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    Eq { column: String, value: Value },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(column: impl Into<String>) -> Self {
        Self { column: column.into(), ascending: true }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self { column: column.into(), ascending: false }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filter: Option<Filter>,
    pub order: Option<Order>,
}

impl Query {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn ordered(order: Order) -> Self {
        Self { filter: None, order: Some(order) }
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("remote rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("row {id} not found in {table}")]
    RowNotFound { table: Table, id: String },

    #[error("invalid row payload: {0}")]
    Decode(String),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait RemoteClient: Send + Sync {
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Row>, RemoteError>;
    async fn insert(&self, table: Table, row: Row) -> Result<Row, RemoteError>;
    async fn update(&self, table: Table, id: &str, patch: Row) -> Result<Row, RemoteError>;
    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteError>;
}

/// Renders a row id for comparison. Remote ids may arrive as numbers or strings.
pub fn id_of(row: &Row) -> Option<String> {
    match row.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
