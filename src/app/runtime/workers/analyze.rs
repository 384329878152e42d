use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::runtime::channels::AnalysisOutcome;
use crate::logic::IssuedRequest;
use crate::sources::ReviewService;

/// What: Spawn the background worker that sends analyze requests.
///
/// Inputs:
/// - `service`: Analysis service client
/// - `analyze_req_rx`: Channel receiver for validated requests
/// - `analyze_res_tx`: Channel sender for tagged outcomes
///
/// Details:
/// - Sends each request exactly once; there is no retry and no cancellation
/// - Requests are handled one after another; the submission machine never
///   issues a second one while the first is pending
/// - Exits when the request channel closes
pub fn spawn_analyze_worker<S: ReviewService>(
    service: Arc<S>,
    mut analyze_req_rx: mpsc::UnboundedReceiver<IssuedRequest>,
    analyze_res_tx: mpsc::UnboundedSender<AnalysisOutcome>,
) {
    tokio::spawn(async move {
        while let Some(issued) = analyze_req_rx.recv().await {
            let outcome = service.analyze(&issued.request).await;
            if let Err(e) = &outcome {
                tracing::debug!(request_id = issued.id, error = %e, "analyze worker: request failed");
            }
            if analyze_res_tx.send((issued.id, outcome)).is_err() {
                break;
            }
        }
        tracing::debug!("analyze worker stopped");
    });
}
