//! API utilities for console-backend communication
//!
//! Every request in the console goes through [`read_json`], so transport,
//! HTTP, application and parse failures all end up as one [`ApiError`].

use contracts::shared::ErrorBody;
use gloo_net::http::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Port of the employee records API when no build-time override is given.
const DEFAULT_API_PORT: &str = "5000";

/// Get the base URL for API requests
///
/// `EMPLOYEE_API_BASE` (build time) wins outright. Otherwise the URL is built
/// from the current window location with port `EMPLOYEE_API_PORT` or 5000.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(base) = option_env!("EMPLOYEE_API_BASE") {
        return base.trim_end_matches('/').to_string();
    }
    let port = option_env!("EMPLOYEE_API_PORT").unwrap_or(DEFAULT_API_PORT);

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/employees");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encodes a value used as one path segment (table name, emp_no).
pub fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Failure of a single API call, already reduced to something a view can show.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never reached the server or the body could not be read
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx status; `message` is the server's `error` field or the caller's fallback
    #[error("{message}")]
    Http { status: u16, message: String },
    /// 2xx status with an `error` field in the body
    #[error("{0}")]
    Application(String),
    #[error("Failed to parse server response. The server may be down or returning an invalid page.")]
    Unparsable { status: u16, detail: String },
}

impl ApiError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        ApiError::Transport(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Turns a status code and raw body into a typed result.
///
/// An empty body is read as JSON `null`, so `Option<T>` targets accept it.
/// A non-empty body that is not JSON is `Unparsable` whatever the status.
/// `fallback` is the message used for a non-2xx status without an `error` field.
pub fn interpret_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    fallback: &str,
) -> ApiResult<T> {
    let unparsable = |e: serde_json::Error| ApiError::Unparsable {
        status,
        detail: e.to_string(),
    };
    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str::<Value>(body).map_err(unparsable)?
    };

    if !(200..300).contains(&status) {
        let message = ErrorBody::from_value(&value).unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Http { status, message });
    }
    if let Some(error) = ErrorBody::from_value(&value) {
        return Err(ApiError::Application(error));
    }
    serde_json::from_value(value).map_err(unparsable)
}

/// Reads the outcome of `send().await` into a typed result.
pub async fn read_json<T: DeserializeOwned>(
    sent: Result<Response, gloo_net::Error>,
    fallback: &str,
) -> ApiResult<T> {
    let response = sent.map_err(ApiError::transport)?;
    let status = response.status();
    let body = response.text().await.map_err(ApiError::transport)?;
    interpret_response(status, &body, fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_employee::MessageResponse;
    use contracts::usecases::u101_query_builder::QueryResponse;

    #[test]
    fn test_server_error_is_surfaced_verbatim() {
        let err =
            interpret_response::<QueryResponse>(500, r#"{"error":"syntax error"}"#, "fallback")
                .unwrap_err();
        assert_eq!(err.to_string(), "syntax error");
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
    }

    #[test]
    fn test_fallback_when_error_field_missing() {
        let err = interpret_response::<Vec<String>>(
            502,
            r#"{"detail":"upstream"}"#,
            "Network response was not ok.",
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 502,
                message: "Network response was not ok.".into()
            }
        );
    }

    #[test]
    fn test_fallback_when_error_body_empty() {
        let err = interpret_response::<Vec<String>>(404, "", "Not found").unwrap_err();
        assert_eq!(err.to_string(), "Not found");
    }

    #[test]
    fn test_unparsable_error_body() {
        let err = interpret_response::<QueryResponse>(
            500,
            "<!doctype html><title>Internal Server Error</title>",
            "An unknown error occurred.",
        )
        .unwrap_err();
        assert!(matches!(err, ApiError::Unparsable { status: 500, .. }));
        assert!(err.to_string().starts_with("Failed to parse server response"));
    }

    #[test]
    fn test_error_field_on_success_status() {
        let err = interpret_response::<Vec<String>>(200, r#"{"error":"Invalid table name"}"#, "x")
            .unwrap_err();
        assert_eq!(err, ApiError::Application("Invalid table name".into()));
    }

    #[test]
    fn test_unparsable_success_body() {
        let err = interpret_response::<Vec<String>>(200, "<!doctype html>", "x").unwrap_err();
        assert!(matches!(err, ApiError::Unparsable { status: 200, .. }));
        assert!(err.to_string().starts_with("Failed to parse server response"));
    }

    #[test]
    fn test_shape_mismatch_is_unparsable() {
        let err = interpret_response::<Vec<String>>(200, r#"{"tables": []}"#, "x").unwrap_err();
        assert!(matches!(err, ApiError::Unparsable { .. }));
    }

    #[test]
    fn test_empty_result_array() {
        let rows = interpret_response::<QueryResponse>(200, "[]", "x").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_body_reads_as_none() {
        let reply = interpret_response::<Option<MessageResponse>>(204, "", "x").unwrap();
        assert_eq!(reply, None);
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment("dept emp"), "dept%20emp");
        assert_eq!(path_segment("10001"), "10001");
    }
}
