//! reqwest-backed implementation of [`ReviewService`].

use std::time::Duration;

use serde_json::Value;

use super::ReviewService;
use crate::error::{HistoryRefreshError, SubmissionError};
use crate::state::{AnalysisRequest, HistoryEntry};

/// Base URL used when neither settings nor CLI provide one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6543";

/// Path of the analyze endpoint.
const ANALYZE_PATH: &str = "/api/analyze-review";
/// Path of the history endpoint.
const HISTORY_PATH: &str = "/api/reviews";

/// HTTP client for the analysis service.
#[derive(Clone, Debug)]
pub struct HttpReviewService {
    /// Pooled client shared by both endpoints.
    client: reqwest::Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Request timeout in seconds; `0` means none.
    timeout_secs: u64,
}

impl HttpReviewService {
    /// What: Build a client for the service at `base_url`.
    ///
    /// Inputs:
    /// - `base_url`: Scheme, host, and port; trailing slashes are dropped.
    /// - `timeout_secs`: Whole-request timeout, `0` to wait indefinitely.
    ///
    /// Output:
    /// - Ready-to-use service client.
    ///
    /// Details:
    /// - Falls back to a default `reqwest::Client` if the builder fails, so
    ///   construction itself never errors.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(format!(
            "revscope/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client; using defaults");
            reqwest::Client::new()
        });
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
        }
    }

    /// Base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of an endpoint path.
    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a transport error of the analyze call.
    fn submission_transport_error(&self, err: &reqwest::Error) -> SubmissionError {
        if err.is_timeout() {
            SubmissionError::Timeout(self.timeout_secs)
        } else {
            SubmissionError::Unreachable(err.to_string())
        }
    }
}

impl ReviewService for HttpReviewService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, SubmissionError> {
        let url = self.url(ANALYZE_PATH);
        tracing::debug!(url = %url, "POST analyze-review");
        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| self.submission_transport_error(&e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| self.submission_transport_error(&e))?;
        tracing::debug!(status, bytes = body.len(), "analyze-review response received");
        parse_analyze_body(status, &body)
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryRefreshError> {
        let url = self.url(HISTORY_PATH);
        tracing::debug!(url = %url, "GET reviews");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HistoryRefreshError::Transport(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| HistoryRefreshError::Transport(e.to_string()))?;
        parse_history_body(status, &body)
    }
}

/// What: Interpret the status and body of an analyze response.
///
/// Inputs:
/// - `status`: HTTP status code.
/// - `body`: Raw response body.
///
/// Output:
/// - `Ok(Value)` for a 2xx status with a JSON body.
///
/// # Errors
/// - `Status` for non-2xx codes, carrying the body's `error` field if any.
/// - `Parse` when a 2xx body is not JSON.
pub fn parse_analyze_body(status: u16, body: &str) -> Result<Value, SubmissionError> {
    if !(200..300).contains(&status) {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|v| v.get("error").and_then(Value::as_str).map(str::to_string))
            .filter(|d| !d.trim().is_empty());
        return Err(SubmissionError::Status {
            code: status,
            detail,
        });
    }
    serde_json::from_str(body).map_err(|e| SubmissionError::Parse(e.to_string()))
}

/// What: Interpret the status and body of a history response.
///
/// Inputs:
/// - `status`: HTTP status code.
/// - `body`: Raw response body.
///
/// Output:
/// - Entries in server order.
///
/// # Errors
/// - `Status` for non-2xx codes.
/// - `Parse` when the body is not a JSON array of entries.
pub fn parse_history_body(status: u16, body: &str) -> Result<Vec<HistoryEntry>, HistoryRefreshError> {
    if !(200..300).contains(&status) {
        return Err(HistoryRefreshError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| HistoryRefreshError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: 2xx JSON bodies are returned untouched, whatever their shape.
    fn parse_analyze_accepts_any_json_on_success() {
        let v = parse_analyze_body(200, r#"{"sentiment":"Negative","confidence":0.5}"#)
            .expect("json");
        assert_eq!(v["sentiment"], "Negative");
        assert!(parse_analyze_body(201, "[]").is_ok());
    }

    #[test]
    /// What: Non-2xx statuses become Status errors with the service's error text.
    fn parse_analyze_maps_error_status() {
        let err = parse_analyze_body(500, r#"{"error":"quota exceeded"}"#).expect_err("500");
        assert_eq!(
            err,
            SubmissionError::Status {
                code: 500,
                detail: Some("quota exceeded".into())
            }
        );
        let err = parse_analyze_body(404, "<html>not found</html>").expect_err("404");
        assert_eq!(
            err,
            SubmissionError::Status {
                code: 404,
                detail: None
            }
        );
    }

    #[test]
    /// What: A 2xx body that is not JSON is a parse failure.
    fn parse_analyze_rejects_garbage_body() {
        let err = parse_analyze_body(200, "Internal error").expect_err("garbage");
        assert!(matches!(err, SubmissionError::Parse(_)));
        assert!(!err.is_connectivity());
    }

    #[test]
    /// What: History bodies must be arrays of entries.
    fn parse_history_requires_array() {
        let rows = parse_history_body(
            200,
            r#"[{"id":1,"product_name":"A","sentiment":"positive","key_points":["x"]}]"#,
        )
        .expect("array");
        assert_eq!(rows.len(), 1);
        assert!(matches!(
            parse_history_body(200, r#"{"id":1}"#),
            Err(HistoryRefreshError::Parse(_))
        ));
        assert!(matches!(
            parse_history_body(200, "Database error"),
            Err(HistoryRefreshError::Parse(_))
        ));
        assert_eq!(
            parse_history_body(500, "Database error"),
            Err(HistoryRefreshError::Status(500))
        );
    }

    #[test]
    /// What: One oddly shaped row does not fail the whole history fetch.
    ///
    /// - Input: A well-formed row followed by one with null product and mixed key points
    /// - Output: Both rows parse; the numeric key point is rendered as text
    fn parse_history_tolerates_mixed_shape_rows() {
        let rows = parse_history_body(
            200,
            r#"[
                {"id":1,"product_name":"A","sentiment":"positive","key_points":["x"]},
                {"id":2,"product_name":null,"sentiment":"negative","key_points":["ok",5]},
                {"id":3,"product_name":"C","key_points":{"first":"x"}}
            ]"#,
        )
        .expect("mixed rows parse");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].product_name, "");
        assert_eq!(
            rows[1].key_points,
            Some(vec!["ok".to_string(), "5".to_string()])
        );
        assert!(rows[2].key_points.is_none());
    }

    #[test]
    /// What: Trailing slashes are stripped from the base URL.
    fn new_normalizes_base_url() {
        let svc = HttpReviewService::new("http://localhost:6543///", 5);
        assert_eq!(svc.base_url(), "http://localhost:6543");
        assert_eq!(svc.url(HISTORY_PATH), "http://localhost:6543/api/reviews");
    }

    #[tokio::test]
    /// What: A refused connection is reported as an unreachable service.
    ///
    /// - Input: Client pointed at a closed local port
    /// - Output: `Unreachable` for analyze, `Transport` for history
    async fn closed_port_maps_to_connectivity_errors() {
        let svc = HttpReviewService::new("http://127.0.0.1:1", 5);
        let req = AnalysisRequest {
            product_name: "A".into(),
            review_text: "B".into(),
        };
        let err = svc.analyze(&req).await.expect_err("refused");
        assert!(err.is_connectivity(), "got {err:?}");
        let err = svc.fetch_history().await.expect_err("refused");
        assert!(matches!(err, HistoryRefreshError::Transport(_)));
    }
}
