use crate::shared::api_utils::{api_url, read_json, ApiError, ApiResult};
use contracts::usecases::u101_query_builder::{QueryRequest, QueryResponse};
use gloo_net::http::Request;

pub use crate::shared::schema_api::{fetch_columns, fetch_tables};

/// `POST /api/query`
pub async fn run_query(request: &QueryRequest) -> ApiResult<QueryResponse> {
    let sent = Request::post(&api_url("/api/query"))
        .json(request)
        .map_err(ApiError::transport)?
        .send()
        .await;
    read_json(sent, "An unknown error occurred.").await
}
