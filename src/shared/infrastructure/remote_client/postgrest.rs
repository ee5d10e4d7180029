// PostgREST implementation of the RemoteClient port (Supabase `/rest/v1` surface).
//
// Purpose
// - Talk to the hosted relational backend over HTTP.
//
// Responsibilities
// - Translate select/insert/update/delete into PostgREST requests.
// - Ask for the written row back (`Prefer: return=representation`) so the store can mirror it.
// - Turn transport errors, non-success statuses and undecodable bodies into RemoteError.

use super::{Filter, Query, RemoteClient, RemoteError, Row, Table};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde_json::Value;

const RETURN_REPRESENTATION: (&str, &str) = ("Prefer", "return=representation");

#[derive(Debug, Clone)]
pub struct PostgrestRemoteClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl PostgrestRemoteClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    fn table_url(&self, table: Table) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table.name())
    }

    fn request(&self, method: Method, table: Table) -> RequestBuilder {
        self.http
            .request(method, self.table_url(table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

fn filter_operand(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn query_params(query: &Query) -> Vec<(String, String)> {
    let mut params = vec![("select".to_string(), "*".to_string())];
    if let Some(Filter::Eq { column, value }) = &query.filter {
        params.push((column.clone(), format!("eq.{}", filter_operand(value))));
    }
    if let Some(order) = &query.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        params.push(("order".to_string(), format!("{}.{direction}", order.column)));
    }
    params
}

fn transport(err: reqwest::Error) -> RemoteError {
    RemoteError::Transport(err.to_string())
}

async fn ensure_success(response: Response) -> Result<Response, RemoteError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(RemoteError::Rejected { status: status.as_u16(), message })
}

async fn read_rows(response: Response) -> Result<Vec<Row>, RemoteError> {
    ensure_success(response)
        .await?
        .json::<Vec<Row>>()
        .await
        .map_err(|e| RemoteError::Decode(e.to_string()))
}

#[async_trait::async_trait]
impl RemoteClient for PostgrestRemoteClient {
    async fn select(&self, table: Table, query: Query) -> Result<Vec<Row>, RemoteError> {
        let response = self
            .request(Method::GET, table)
            .query(&query_params(&query))
            .send()
            .await
            .map_err(transport)?;
        read_rows(response).await
    }

    async fn insert(&self, table: Table, row: Row) -> Result<Row, RemoteError> {
        let response = self
            .request(Method::POST, table)
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .json(&[row])
            .send()
            .await
            .map_err(transport)?;
        read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::Decode("insert returned no row".into()))
    }

    async fn update(&self, table: Table, id: &str, patch: Row) -> Result<Row, RemoteError> {
        let response = self
            .request(Method::PATCH, table)
            .header(RETURN_REPRESENTATION.0, RETURN_REPRESENTATION.1)
            .query(&[("id", format!("eq.{id}"))])
            .json(&patch)
            .send()
            .await
            .map_err(transport)?;
        read_rows(response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| RemoteError::RowNotFound { table, id: id.to_string() })
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), RemoteError> {
        let response = self
            .request(Method::DELETE, table)
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await
            .map_err(transport)?;
        ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod postgrest_remote_client_tests {
    use super::*;
    use crate::shared::infrastructure::remote_client::Order;
    use axum::{
        Json, Router,
        extract::{Path, Query as QueryParams},
        http::{HeaderMap, StatusCode},
        response::{IntoResponse, Response as AxumResponse},
        routing::get,
    };
    use rstest::rstest;
    use serde_json::json;
    use std::collections::HashMap;
    use tokio::net::TcpListener;

    const API_KEY: &str = "anon-key";

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("apikey").and_then(|v| v.to_str().ok()) == Some(API_KEY)
            && headers.get("authorization").and_then(|v| v.to_str().ok())
                == Some(&format!("Bearer {API_KEY}")[..])
    }

    async fn select_rows(
        Path(table): Path<String>,
        QueryParams(params): QueryParams<HashMap<String, String>>,
        headers: HeaderMap,
    ) -> AxumResponse {
        if !authorized(&headers) {
            return StatusCode::UNAUTHORIZED.into_response();
        }
        if table == "areas" {
            return (StatusCode::INTERNAL_SERVER_ERROR, "relation unavailable").into_response();
        }
        Json(json!([{ "id": 1, "table": table, "params": params }])).into_response()
    }

    async fn insert_rows(Path(_table): Path<String>, headers: HeaderMap, Json(body): Json<Value>) -> AxumResponse {
        if headers.get("prefer").and_then(|v| v.to_str().ok()) != Some("return=representation") {
            return Json(json!([])).into_response();
        }
        let mut row = body[0].clone();
        row["id"] = json!("generated-1");
        row["created_at"] = json!("2024-05-01T12:00:00Z");
        (StatusCode::CREATED, Json(json!([row]))).into_response()
    }

    async fn update_rows(
        QueryParams(params): QueryParams<HashMap<String, String>>,
        Json(body): Json<Value>,
    ) -> AxumResponse {
        match params.get("id").map(String::as_str) {
            Some("eq.missing") => Json(json!([])).into_response(),
            Some(filter) => {
                let mut row = body.clone();
                row["id"] = json!(filter.trim_start_matches("eq."));
                Json(json!([row])).into_response()
            }
            None => StatusCode::BAD_REQUEST.into_response(),
        }
    }

    async fn delete_rows(QueryParams(params): QueryParams<HashMap<String, String>>) -> AxumResponse {
        match params.get("id").map(String::as_str) {
            Some("eq.locked") => (StatusCode::CONFLICT, "row is referenced").into_response(),
            Some(_) => StatusCode::NO_CONTENT.into_response(),
            None => StatusCode::BAD_REQUEST.into_response(),
        }
    }

    async fn spawn_mock_postgrest() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
        let addr = listener.local_addr().expect("local addr");
        let app = Router::new().route(
            "/rest/v1/{table}",
            get(select_rows).post(insert_rows).patch(update_rows).delete(delete_rows),
        );
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        format!("http://{addr}/")
    }

    #[rstest]
    fn it_should_build_select_params_with_filter_and_order() {
        let query = Query::ordered(Order::asc("name"))
            .with_filter(Filter::Eq { column: "icon".into(), value: json!("📋") });
        assert_eq!(
            query_params(&query),
            vec![
                ("select".to_string(), "*".to_string()),
                ("icon".to_string(), "eq.📋".to_string()),
                ("order".to_string(), "name.asc".to_string()),
            ]
        );
    }

    #[rstest]
    fn it_should_join_the_base_url_without_double_slashes() {
        let client = PostgrestRemoteClient::new("https://example.supabase.co/", API_KEY);
        assert_eq!(
            client.table_url(Table::Commitments),
            "https://example.supabase.co/rest/v1/commitments"
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_select_with_order_and_credentials() {
        let client = PostgrestRemoteClient::new(spawn_mock_postgrest().await, API_KEY);
        let rows = client
            .select(Table::Commitments, Query::ordered(Order::desc("created_at")))
            .await
            .expect("select failed");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["table"], json!("commitments"));
        assert_eq!(rows[0]["params"]["order"], json!("created_at.desc"));
        assert_eq!(rows[0]["params"]["select"], json!("*"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_a_rejected_select() {
        let client = PostgrestRemoteClient::new(spawn_mock_postgrest().await, API_KEY);
        let result = client.select(Table::Areas, Query::ordered(Order::asc("name"))).await;
        assert_eq!(
            result,
            Err(RemoteError::Rejected { status: 500, message: "relation unavailable".into() })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_reject_requests_with_a_wrong_key() {
        let client = PostgrestRemoteClient::new(spawn_mock_postgrest().await, "wrong");
        let result = client.select(Table::Meetings, Query::all()).await;
        assert!(matches!(result, Err(RemoteError::Rejected { status: 401, .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_inserted_row() {
        let client = PostgrestRemoteClient::new(spawn_mock_postgrest().await, API_KEY);
        let row = client
            .insert(Table::Commitments, json!({ "tema": "Budget" }))
            .await
            .expect("insert failed");
        assert_eq!(row["id"], json!("generated-1"));
        assert_eq!(row["tema"], json!("Budget"));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_return_the_updated_row_or_row_not_found() {
        let client = PostgrestRemoteClient::new(spawn_mock_postgrest().await, API_KEY);
        let row = client
            .update(Table::Commitments, "c-7", json!({ "acao": "Call" }))
            .await
            .expect("update failed");
        assert_eq!(row, json!({ "acao": "Call", "id": "c-7" }));

        let missing = client.update(Table::Commitments, "missing", json!({})).await;
        assert_eq!(
            missing,
            Err(RemoteError::RowNotFound { table: Table::Commitments, id: "missing".into() })
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_and_surface_conflicts() {
        let client = PostgrestRemoteClient::new(spawn_mock_postgrest().await, API_KEY);
        assert!(client.delete(Table::Commitments, "c-7").await.is_ok());
        let locked = client.delete(Table::Commitments, "locked").await;
        assert!(matches!(locked, Err(RemoteError::Rejected { status: 409, .. })));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_report_transport_errors() {
        let client = PostgrestRemoteClient::new("http://127.0.0.1:9", API_KEY);
        let result = client.delete(Table::Commitments, "c-7").await;
        assert!(matches!(result, Err(RemoteError::Transport(_))));
    }
}
