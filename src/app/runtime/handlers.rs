//! Event-loop side of the submission and history workflows.
//!
//! Every function here runs on the event loop and is the only code that
//! mutates the submission machine and the history snapshot.

use tokio::sync::mpsc;

use crate::error::{HistoryRefreshError, SubmissionError};
use crate::logic::{Completion, IssuedRequest, RefreshOutcome, RefreshReason, RefreshTicket};
use crate::state::{AppState, Modal};

use super::channels::{AnalysisOutcome, HistoryOutcome};

/// What: Validate the form and issue an analyze request.
///
/// Inputs:
/// - `app`: Application state
/// - `analyze_req_tx`: Channel sender to the analyze worker
///
/// Output:
/// - None (side effects: phase change, request sent, or validation alert)
///
/// Details:
/// - A blank field opens a blocking alert and sends nothing.
/// - While a request is pending this is a no-op.
/// - If the worker is gone the request fails immediately with an
///   `Unreachable` error so the machine does not stay pending.
pub fn submit_form(app: &mut AppState, analyze_req_tx: &mpsc::UnboundedSender<IssuedRequest>) {
    match app.submission.begin(&app.product_name, &app.review_text) {
        Err(err) => {
            tracing::info!(error = %err, "submission rejected by validation");
            app.modal = Modal::validation(err);
        }
        Ok(None) => {}
        Ok(Some(issued)) => {
            let id = issued.id;
            app.spinner_frame = 0;
            if analyze_req_tx.send(issued).is_err() {
                tracing::error!(request_id = id, "analyze worker unavailable");
                let err = SubmissionError::Unreachable("analysis worker is not running".into());
                if let Completion::Failed(e) = app.submission.complete(id, Err(err)) {
                    app.modal = Modal::submission(&e);
                }
            }
        }
    }
}

/// What: Issue a history fetch.
///
/// Inputs:
/// - `app`: Application state
/// - `reason`: Why the fetch is issued
/// - `history_req_tx`: Channel sender to the history worker
///
/// Details:
/// - If the worker is gone the ticket is applied as a failure right away,
///   which keeps the snapshot and clears the in-flight count.
pub fn request_history_refresh(
    app: &mut AppState,
    reason: RefreshReason,
    history_req_tx: &mpsc::UnboundedSender<RefreshTicket>,
) {
    let ticket = app.history.begin_refresh(reason);
    if history_req_tx.send(ticket).is_err() {
        app.history.apply(
            ticket,
            Err(HistoryRefreshError::Transport(
                "history worker is not running".into(),
            )),
        );
    }
}

/// What: Apply an analyze completion.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Request id and the response body or error
/// - `history_req_tx`: Channel sender to the history worker
///
/// Details:
/// - Success stores the normalized report and issues exactly one history
///   refresh (fetch-after-write); its completion is not awaited.
/// - Failure opens a blocking alert; no refresh is issued.
pub fn handle_analysis_result(
    app: &mut AppState,
    outcome: AnalysisOutcome,
    history_req_tx: &mpsc::UnboundedSender<RefreshTicket>,
) {
    let (id, result) = outcome;
    match app.submission.complete(id, result) {
        Completion::Succeeded => {
            request_history_refresh(app, RefreshReason::AfterSubmission, history_req_tx);
        }
        Completion::Failed(err) => {
            app.modal = Modal::submission(&err);
        }
        Completion::Ignored => {}
    }
}

/// What: Apply a history fetch completion.
///
/// Inputs:
/// - `app`: Application state
/// - `outcome`: Ticket and the entries or error
///
/// Details:
/// - Failures are logged by the synchronizer and never shown as alerts.
pub fn handle_history_result(app: &mut AppState, outcome: HistoryOutcome) {
    let (ticket, result) = outcome;
    if let RefreshOutcome::Replaced(_) = app.history.apply(ticket, result) {
        app.clamp_history_selection();
    }
}

/// What: Advance tick-driven UI state.
///
/// Details:
/// - Only the pending spinner is animated.
pub fn handle_tick(app: &mut AppState) {
    if !app.submission.can_submit() {
        app.spinner_frame = app.spinner_frame.wrapping_add(1);
    }
}
