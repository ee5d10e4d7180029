// In memory implementation of the RemoteClient port.
//
// Purpose
// - Support store tests and local development without a network or database.
//
// Responsibilities
// - Keep rows per table as JSON objects, keyed by their `id` column.
// - Assign `id` and `created_at` on insert the way the remote service does.
// - Merge patches into the stored row on update and return the full row.
// - Simulate failures: the whole client offline, a single table failing, or slow calls.

use super::{Filter, Query, RemoteClient, RemoteError, Row, Table, id_of};
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering as AtomicOrdering};
use std::time::Duration;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct InMemoryRemoteClient {
    tables: RwLock<HashMap<Table, Vec<Row>>>,
    is_offline: AtomicBool,
    failing_tables: HashSet<Table>,
    delay_ms: AtomicU64,
}

impl InMemoryRemoteClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, AtomicOrdering::SeqCst);
    }

    pub fn fail_table(&mut self, table: Table) {
        self.failing_tables.insert(table);
    }

    pub fn set_delay_ms(&self, ms: u64) {
        self.delay_ms.store(ms, AtomicOrdering::SeqCst);
    }

    pub async fn seed(&self, table: Table, rows: Vec<Row>) {
        self.tables.write().await.entry(table).or_default().extend(rows);
    }

    pub async fn rows(&self, table: Table) -> Vec<Row> {
        self.tables.read().await.get(&table).cloned().unwrap_or_default()
    }

    fn check_available(&self, table: Table) -> Result<(), RemoteError> {
        if self.is_offline.load(AtomicOrdering::SeqCst) {
            return Err(RemoteError::Backend("Remote client offline".into()));
        }
        if self.failing_tables.contains(&table) {
            return Err(RemoteError::Backend(format!("Table {table} unavailable")));
        }
        Ok(())
    }

    async fn pause(&self) {
        let ms = self.delay_ms.load(AtomicOrdering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

fn matches_filter(row: &Row, filter: &Option<Filter>) -> bool {
    match filter {
        None => true,
        Some(Filter::Eq { column, value }) => row.get(column) == Some(value),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(a)), Some(Value::String(b))) => {
            match (DateTime::parse_from_rfc3339(a), DateTime::parse_from_rfc3339(b)) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            }
        }
        (Some(Value::Number(a)), Some(Value::Number(b))) => a
            .as_f64()
            .zip(b.as_f64())
            .and_then(|(a, b)| a.partial_cmp(&b))
            .unwrap_or(Ordering::Equal),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

#[async_trait::async_trait]
impl RemoteClient for InMemoryRemoteClient {
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Row>, RemoteError> {
        self.check_available(table)?;
        self.pause().await;

        let guard = self.tables.read().await;
        let mut rows: Vec<Row> = guard
            .get(&table)
            .map(|rows| {
                rows.iter()
                    .filter(|row| matches_filter(row, &query.filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &query.order {
            rows.sort_by(|a, b| {
                let ordering = compare_values(a.get(&order.column), b.get(&order.column));
                if order.ascending { ordering } else { ordering.reverse() }
            });
        }
        Ok(rows)
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row, RemoteError> {
        self.check_available(table)?;
        self.pause().await;

        let Value::Object(mut fields) = row else {
            return Err(RemoteError::Decode("insert payload must be an object".into()));
        };
        fields
            .entry("id")
            .or_insert_with(|| Value::String(Uuid::now_v7().to_string()));
        fields.entry("created_at").or_insert_with(|| {
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
        });

        let stored = Value::Object(fields);
        self.tables
            .write()
            .await
            .entry(table)
            .or_default()
            .push(stored.clone());
        Ok(stored)
    }

    async fn update(&self, table: Table, id: &str, patch: Row) -> Result<Row, RemoteError> {
        self.check_available(table)?;
        self.pause().await;

        let Value::Object(changes) = patch else {
            return Err(RemoteError::Decode("update payload must be an object".into()));
        };

        let mut guard = self.tables.write().await;
        let target = guard
            .get_mut(&table)
            .and_then(|rows| rows.iter_mut().find(|row| id_of(row).as_deref() == Some(id)));
        match target {
            Some(Value::Object(fields)) => {
                for (column, value) in changes {
                    if column != "id" && column != "created_at" {
                        fields.insert(column, value);
                    }
                }
                Ok(Value::Object(fields.clone()))
            }
            _ => Err(RemoteError::RowNotFound { table, id: id.to_string() }),
        }
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteError> {
        self.check_available(table)?;
        self.pause().await;

        if let Some(rows) = self.tables.write().await.get_mut(&table) {
            rows.retain(|row| id_of(row).as_deref() != Some(id));
        }
        Ok(())
    }
}
