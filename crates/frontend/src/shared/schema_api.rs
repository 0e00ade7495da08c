//! Table metadata endpoints: table names and the column names of one table.

use crate::shared::api_utils::{api_url, path_segment, read_json, ApiResult};
use gloo_net::http::Request;

/// `GET /api/tables`
pub async fn fetch_tables() -> ApiResult<Vec<String>> {
    let sent = Request::get(&api_url("/api/tables")).send().await;
    read_json(sent, "Network response was not ok.").await
}

/// `GET /api/tables/{table}/columns`
pub async fn fetch_columns(table: &str) -> ApiResult<Vec<String>> {
    let url = api_url(&format!("/api/tables/{}/columns", path_segment(table)));
    let sent = Request::get(&url).send().await;
    read_json(sent, &format!("Failed to load columns for {}", table)).await
}
