//! Error taxonomy for the submission and history workflows.
//!
//! Each failure path of the client has its own type so callers can decide how
//! to surface it: validation and submission errors become blocking alerts,
//! history refresh errors are only logged.

use thiserror::Error;

/// What: A required form field was empty or whitespace-only.
///
/// Details:
/// - Raised before any request is built; nothing is sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The product name field is blank.
    #[error("Please enter a product name before submitting.")]
    EmptyProductName,
    /// The review text field is blank.
    #[error("Please enter the review text before submitting.")]
    EmptyReviewText,
}

/// What: The analyze call failed at the transport, HTTP, or decoding layer.
///
/// Details:
/// - `Unreachable` and `Timeout` mean the service could not be reached; the
///   remaining variants mean it answered but the answer was unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Connection refused, DNS failure, or any other transport-level error.
    #[error("Could not reach the analysis service: {0}")]
    Unreachable(String),
    /// The configured request timeout elapsed before a response arrived.
    #[error("The analysis service did not respond within {0} seconds")]
    Timeout(u64),
    /// The service answered with a non-2xx status.
    #[error("Analysis failed with HTTP {code}{}", detail_suffix(.detail))]
    Status {
        /// HTTP status code returned by the service.
        code: u16,
        /// Value of the `error` field of the response body, when present.
        detail: Option<String>,
    },
    /// The response body was not valid JSON.
    #[error("Analysis response could not be read: {0}")]
    Parse(String),
}

/// Format the optional service detail as a `": detail"` suffix.
fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl SubmissionError {
    /// What: Report whether this error means the service was never reached.
    ///
    /// Output:
    /// - `true` for `Unreachable` and `Timeout`.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Unreachable(_) | Self::Timeout(_))
    }

    /// Short headline used as the alert title.
    #[must_use]
    pub const fn headline(&self) -> &'static str {
        if self.is_connectivity() {
            "Could not reach service"
        } else {
            "Analysis failed"
        }
    }
}

/// What: A history fetch failed.
///
/// Details:
/// - Never shown to the user; the previous snapshot stays on screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryRefreshError {
    /// Transport-level failure, including timeouts.
    #[error("history request failed: {0}")]
    Transport(String),
    /// The service answered with a non-2xx status.
    #[error("history request returned HTTP {0}")]
    Status(u16),
    /// The body was not a JSON array of history entries.
    #[error("history response has an unexpected shape: {0}")]
    Parse(String),
}
