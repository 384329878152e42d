//! Lifecycle of a single analyze request.
//!
//! `SubmissionMachine` owns the in-flight flag and the "most recent result"
//! slot. Only the event loop calls into it, so it needs no locking.

use serde_json::Value;

use crate::error::{SubmissionError, ValidationError};
use crate::logic::normalize::{AnalysisReport, normalize_report};
use crate::state::AnalysisRequest;

/// Phase of the submission lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight; submit is disabled.
    Pending,
    /// Last request succeeded; its report is displayed.
    Succeeded,
    /// Last request failed; the result area is empty.
    Failed,
}

/// A request that passed validation and must be sent exactly once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IssuedRequest {
    /// Identifier used to match the completion to this request.
    pub id: u64,
    /// Body to send.
    pub request: AnalysisRequest,
}

/// Result of feeding a completion into the machine.
#[derive(Clone, Debug, PartialEq)]
pub enum Completion {
    /// Report stored; the caller must request one history refresh.
    Succeeded,
    /// Request failed; the caller surfaces the error to the user.
    Failed(SubmissionError),
    /// Completion did not belong to the in-flight request and was dropped.
    Ignored,
}

/// What: Validate form input and build the request body.
///
/// Inputs:
/// - `product_name`, `review_text`: Raw form contents.
///
/// Output:
/// - `Ok(AnalysisRequest)` with the text as entered; `Err(ValidationError)`
///   naming the first blank field.
///
/// # Errors
/// - `EmptyProductName` when the product name is empty or whitespace-only.
/// - `EmptyReviewText` when the review text is empty or whitespace-only.
pub fn validate_form(
    product_name: &str,
    review_text: &str,
) -> Result<AnalysisRequest, ValidationError> {
    if product_name.trim().is_empty() {
        return Err(ValidationError::EmptyProductName);
    }
    if review_text.trim().is_empty() {
        return Err(ValidationError::EmptyReviewText);
    }
    Ok(AnalysisRequest {
        product_name: product_name.to_string(),
        review_text: review_text.to_string(),
    })
}

/// State machine for analyze submissions.
#[derive(Debug, Default)]
pub struct SubmissionMachine {
    /// Current phase.
    phase: SubmissionPhase,
    /// Report of the latest successful request; cleared when a new one starts.
    result: Option<AnalysisReport>,
    /// Id of the request currently in flight.
    in_flight: Option<u64>,
    /// Next request id to allocate.
    next_id: u64,
}

impl SubmissionMachine {
    /// Create an idle machine with an empty result slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    /// Report to display, if the last request succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<&AnalysisReport> {
        self.result.as_ref()
    }

    /// Whether the submit control should accept input.
    #[must_use]
    pub const fn can_submit(&self) -> bool {
        !matches!(self.phase, SubmissionPhase::Pending)
    }

    /// What: Attempt the transition into `Pending`.
    ///
    /// Inputs:
    /// - `product_name`, `review_text`: Current form contents.
    ///
    /// Output:
    /// - `Ok(Some(IssuedRequest))` when the request must be sent.
    /// - `Ok(None)` when a request is already in flight (submit is disabled).
    /// - `Err(ValidationError)` when a field is blank; phase and result are untouched.
    ///
    /// # Errors
    /// - Propagates [`validate_form`] failures.
    ///
    /// Details:
    /// - Clears the previous report before the request is issued so a stale
    ///   result is never visible while pending.
    pub fn begin(
        &mut self,
        product_name: &str,
        review_text: &str,
    ) -> Result<Option<IssuedRequest>, ValidationError> {
        if !self.can_submit() {
            tracing::debug!(
                in_flight = ?self.in_flight,
                "submit ignored while a request is pending"
            );
            return Ok(None);
        }
        let request = validate_form(product_name, review_text)?;
        let id = self.next_id;
        self.next_id += 1;
        self.result = None;
        self.in_flight = Some(id);
        self.phase = SubmissionPhase::Pending;
        tracing::info!(
            request_id = id,
            product = %request.product_name,
            review_len = request.review_text.len(),
            "submitting review for analysis"
        );
        Ok(Some(IssuedRequest { id, request }))
    }

    /// What: Apply the outcome of the in-flight request.
    ///
    /// Inputs:
    /// - `id`: Id carried by the completion.
    /// - `outcome`: Parsed response body or the submission error.
    ///
    /// Output:
    /// - `Completion::Succeeded` after storing the normalized report,
    ///   `Completion::Failed` with the error, or `Completion::Ignored` when
    ///   `id` is not the in-flight request.
    ///
    /// Details:
    /// - On failure the result slot stays empty; it was cleared by `begin`.
    pub fn complete(&mut self, id: u64, outcome: Result<Value, SubmissionError>) -> Completion {
        if self.in_flight != Some(id) {
            tracing::debug!(
                request_id = id,
                in_flight = ?self.in_flight,
                "dropping completion for a request that is not in flight"
            );
            return Completion::Ignored;
        }
        self.in_flight = None;
        match outcome {
            Ok(body) => {
                let report = normalize_report(&body);
                tracing::info!(
                    request_id = id,
                    sentiment = %report.sentiment,
                    tier = report.tier().as_str(),
                    degraded = report.is_degraded(),
                    cached = report.cached,
                    "analysis succeeded"
                );
                self.result = Some(report);
                self.phase = SubmissionPhase::Succeeded;
                Completion::Succeeded
            }
            Err(err) => {
                tracing::warn!(request_id = id, error = %err, "analysis failed");
                self.result = None;
                self.phase = SubmissionPhase::Failed;
                Completion::Failed(err)
            }
        }
    }
}
