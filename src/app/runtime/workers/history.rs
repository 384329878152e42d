use std::sync::Arc;

use tokio::sync::mpsc;

use crate::app::runtime::channels::HistoryOutcome;
use crate::logic::RefreshTicket;
use crate::sources::ReviewService;

/// What: Spawn the background worker that fetches history.
///
/// Inputs:
/// - `service`: Analysis service client
/// - `history_req_rx`: Channel receiver for refresh tickets
/// - `history_res_tx`: Channel sender for tagged outcomes
///
/// Details:
/// - Each ticket is fetched on its own task so a slow fetch never delays a
///   later one; ordering is restored by the tickets on the receiving side
/// - A closed result channel is logged and does not stop the worker
/// - Exits when the request channel closes
pub fn spawn_history_worker<S: ReviewService>(
    service: Arc<S>,
    mut history_req_rx: mpsc::UnboundedReceiver<RefreshTicket>,
    history_res_tx: mpsc::UnboundedSender<HistoryOutcome>,
) {
    tokio::spawn(async move {
        while let Some(ticket) = history_req_rx.recv().await {
            let svc = Arc::clone(&service);
            let tx = history_res_tx.clone();
            tokio::spawn(async move {
                let outcome = svc.fetch_history().await;
                if tx.send((ticket, outcome)).is_err() {
                    tracing::debug!(ticket = ticket.0, "history worker: result receiver dropped");
                }
            });
        }
        tracing::debug!("history worker stopped");
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use serde_json::Value;

    use crate::error::{HistoryRefreshError, SubmissionError};
    use crate::state::{AnalysisRequest, HistoryEntry};

    #[derive(Default)]
    struct CountingService {
        fetches: AtomicUsize,
    }

    impl ReviewService for CountingService {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<Value, SubmissionError> {
            Ok(Value::Null)
        }

        async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryRefreshError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    /// What: Outcomes come back tagged with their ticket.
    async fn history_worker_tags_outcome_with_ticket() {
        let service = Arc::new(CountingService::default());
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, mut res_rx) = mpsc::unbounded_channel();
        spawn_history_worker(Arc::clone(&service), req_rx, res_tx);

        req_tx.send(RefreshTicket(4)).expect("send ticket");
        let (ticket, outcome) = tokio::time::timeout(Duration::from_secs(1), res_rx.recv())
            .await
            .expect("outcome in time")
            .expect("channel open");
        assert_eq!(ticket, RefreshTicket(4));
        assert_eq!(outcome, Ok(Vec::new()));
    }

    #[tokio::test]
    /// What: A dropped result receiver does not stop later fetches.
    ///
    /// - Input: Result receiver dropped before two tickets are sent
    /// - Output: Both tickets are still fetched
    async fn history_worker_survives_dropped_result_receiver() {
        let service = Arc::new(CountingService::default());
        let (req_tx, req_rx) = mpsc::unbounded_channel();
        let (res_tx, res_rx) = mpsc::unbounded_channel();
        drop(res_rx);
        spawn_history_worker(Arc::clone(&service), req_rx, res_tx);

        req_tx.send(RefreshTicket(0)).expect("send first");
        req_tx.send(RefreshTicket(1)).expect("send second");
        for _ in 0..50 {
            if service.fetches.load(Ordering::SeqCst) == 2 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(service.fetches.load(Ordering::SeqCst), 2);
    }
}
