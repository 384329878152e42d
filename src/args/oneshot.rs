//! Non-interactive modes: one-shot analysis and history listing.
//!
//! Both run the same state machine, normalizer, and projector as the TUI and
//! print plain text instead of drawing widgets.

use std::io::Write;

use crate::logic::{
    Completion, HistorySync, RefreshOutcome, RefreshReason, SubmissionMachine, project_all,
};
use crate::sources::ReviewService;
use crate::ui::helpers::{history_plain_lines, report_plain_lines};

/// What: Print the current history snapshot.
fn print_history<W: Write>(history: &HistorySync, out: &mut W) -> std::io::Result<()> {
    let views = project_all(history.entries());
    writeln!(out, "History ({}):", views.len())?;
    if views.is_empty() {
        writeln!(out, "  (no analyses yet)")?;
    }
    for view in &views {
        for line in history_plain_lines(view) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// What: Fetch history once and apply it to `history`.
///
/// Output:
/// - `true` when the snapshot was replaced.
async fn refresh_once<S: ReviewService>(
    service: &S,
    history: &mut HistorySync,
    reason: RefreshReason,
) -> bool {
    let ticket = history.begin_refresh(reason);
    let outcome = service.fetch_history().await;
    matches!(history.apply(ticket, outcome), RefreshOutcome::Replaced(_))
}

/// What: Analyze one review from the command line.
///
/// Inputs:
/// - `service`: Analysis service client
/// - `product`, `review`: Form values as given on the command line
/// - `out`: Destination for the rendered report and history
/// - `err`: Destination for validation and submission failures
///
/// Output:
/// - Process exit code: `0` on success, `1` on validation or submission failure.
///
/// # Errors
/// - Returns write errors from `out` or `err`.
///
/// Details:
/// - On success the history is refreshed once and printed; a failed refresh
///   only prints a notice and does not change the exit code.
pub async fn run_analyze<S: ReviewService, W: Write, E: Write>(
    service: &S,
    product: &str,
    review: &str,
    out: &mut W,
    err: &mut E,
) -> std::io::Result<i32> {
    let mut machine = SubmissionMachine::new();
    let issued = match machine.begin(product, review) {
        Ok(Some(issued)) => issued,
        Ok(None) => return Ok(1),
        Err(e) => {
            writeln!(err, "Missing input: {e}")?;
            return Ok(1);
        }
    };

    let outcome = service.analyze(&issued.request).await;
    match machine.complete(issued.id, outcome) {
        Completion::Succeeded => {}
        Completion::Failed(e) => {
            writeln!(err, "{}: {e}", e.headline())?;
            return Ok(1);
        }
        Completion::Ignored => return Ok(1),
    }

    if let Some(report) = machine.result() {
        for line in report_plain_lines(report) {
            writeln!(out, "{line}")?;
        }
    }
    writeln!(out)?;

    let mut history = HistorySync::new();
    if refresh_once(service, &mut history, RefreshReason::AfterSubmission).await {
        print_history(&history, out)?;
    } else {
        writeln!(out, "History unavailable.")?;
    }
    Ok(0)
}

/// What: Print the analysis history.
///
/// Output:
/// - `0` when the history was fetched, `1` otherwise.
///
/// # Errors
/// - Returns write errors from `out` or `err`.
pub async fn run_history<S: ReviewService, W: Write, E: Write>(
    service: &S,
    out: &mut W,
    err: &mut E,
) -> std::io::Result<i32> {
    let mut history = HistorySync::new();
    if refresh_once(service, &mut history, RefreshReason::Manual).await {
        print_history(&history, out)?;
        Ok(0)
    } else {
        let reason = history.last_error().unwrap_or("unknown error");
        writeln!(err, "Could not load history: {reason}")?;
        Ok(1)
    }
}
