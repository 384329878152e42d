use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use serde_json::Value;
use tokio::sync::mpsc;

use crate::error::{HistoryRefreshError, SubmissionError};
use crate::logic::{IssuedRequest, RefreshTicket};
use crate::state::HistoryEntry;

/// Completion of one analyze request, tagged with its request id.
pub type AnalysisOutcome = (u64, Result<Value, SubmissionError>);

/// Completion of one history fetch, tagged with its ticket.
pub type HistoryOutcome = (
    RefreshTicket,
    Result<Vec<HistoryEntry>, HistoryRefreshError>,
);

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Contains all channel senders and receivers used between the event loop
///   and the background workers. Request receivers are handed to the workers
///   by [`Channels::take_worker_ends`].
pub struct Channels {
    /// Terminal events from the input thread.
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    /// Receiver for terminal events.
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    /// Set to stop the input thread on exit.
    pub event_thread_cancelled: Arc<AtomicBool>,
    /// Analyze requests to the analyze worker.
    pub analyze_req_tx: mpsc::UnboundedSender<IssuedRequest>,
    /// Analyze results back to the loop.
    pub analyze_res_tx: mpsc::UnboundedSender<AnalysisOutcome>,
    /// Receiver for analyze results.
    pub analyze_res_rx: mpsc::UnboundedReceiver<AnalysisOutcome>,
    /// History fetch requests to the history worker.
    pub history_req_tx: mpsc::UnboundedSender<RefreshTicket>,
    /// History results back to the loop.
    pub history_res_tx: mpsc::UnboundedSender<HistoryOutcome>,
    /// Receiver for history results.
    pub history_res_rx: mpsc::UnboundedReceiver<HistoryOutcome>,
    /// Periodic ticks driving the pending spinner.
    pub tick_tx: mpsc::UnboundedSender<()>,
    /// Receiver for ticks.
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    /// Request receivers not yet handed to workers.
    worker_ends: Option<WorkerEnds>,
}

/// Request receivers consumed by the background workers.
pub struct WorkerEnds {
    /// Analyze requests.
    pub analyze_req_rx: mpsc::UnboundedReceiver<IssuedRequest>,
    /// History fetch requests.
    pub history_req_rx: mpsc::UnboundedReceiver<RefreshTicket>,
}

impl Channels {
    /// What: Create every channel pair used by the runtime.
    #[must_use]
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (analyze_req_tx, analyze_req_rx) = mpsc::unbounded_channel();
        let (analyze_res_tx, analyze_res_rx) = mpsc::unbounded_channel();
        let (history_req_tx, history_req_rx) = mpsc::unbounded_channel();
        let (history_res_tx, history_res_rx) = mpsc::unbounded_channel();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            analyze_req_tx,
            analyze_res_tx,
            analyze_res_rx,
            history_req_tx,
            history_res_tx,
            history_res_rx,
            tick_tx,
            tick_rx,
            worker_ends: Some(WorkerEnds {
                analyze_req_rx,
                history_req_rx,
            }),
        }
    }

    /// What: Hand the request receivers to the workers.
    ///
    /// Output:
    /// - `Some(WorkerEnds)` on the first call, `None` afterwards.
    pub fn take_worker_ends(&mut self) -> Option<WorkerEnds> {
        self.worker_ends.take()
    }
}

impl Default for Channels {
    fn default() -> Self {
        Self::new()
    }
}
