//! Access to the remote analysis service.
//!
//! The [`ReviewService`] trait is the only seam between the client and the
//! network. The runtime and the command-line modes are generic over it; the
//! production implementation is [`HttpReviewService`].

use std::future::Future;

use serde_json::Value;

use crate::error::{HistoryRefreshError, SubmissionError};
use crate::state::{AnalysisRequest, HistoryEntry};

mod http;

pub use http::{DEFAULT_BASE_URL, HttpReviewService, parse_analyze_body, parse_history_body};

/// Operations offered by the analysis service.
pub trait ReviewService: Send + Sync + 'static {
    /// What: Submit a review for analysis.
    ///
    /// Output:
    /// - `Ok(Value)` with the decoded 2xx body (shape not yet validated);
    ///   `Err(SubmissionError)` on transport, status, or decoding failure.
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<Value, SubmissionError>> + Send;

    /// What: Fetch the full analysis history in server order.
    ///
    /// Output:
    /// - `Ok(entries)` when the body is a JSON array of entries;
    ///   `Err(HistoryRefreshError)` otherwise.
    fn fetch_history(
        &self,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, HistoryRefreshError>> + Send;
}
