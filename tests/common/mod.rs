//! Shared helpers for integration tests: a scripted in-memory service.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use revscope::error::{HistoryRefreshError, SubmissionError};
use revscope::sources::ReviewService;
use revscope::state::{AnalysisRequest, EntryId, HistoryEntry};
use serde_json::Value;

/// In-memory `ReviewService` answering from scripted queues.
///
/// Unscripted analyze calls fail as unreachable; unscripted history calls
/// fail with a transport error.
#[derive(Default)]
pub struct FakeService {
    analyze_replies: Mutex<VecDeque<Result<Value, SubmissionError>>>,
    history_replies: Mutex<VecDeque<Result<Vec<HistoryEntry>, HistoryRefreshError>>>,
    requests: Mutex<Vec<AnalysisRequest>>,
    history_calls: AtomicUsize,
}

impl FakeService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_analyze(&self, reply: Result<Value, SubmissionError>) -> &Self {
        self.analyze_replies
            .lock()
            .expect("analyze queue poisoned")
            .push_back(reply);
        self
    }

    pub fn push_history(&self, reply: Result<Vec<HistoryEntry>, HistoryRefreshError>) -> &Self {
        self.history_replies
            .lock()
            .expect("history queue poisoned")
            .push_back(reply);
        self
    }

    /// Every analyze request received so far.
    pub fn requests(&self) -> Vec<AnalysisRequest> {
        self.requests.lock().expect("requests poisoned").clone()
    }

    pub fn history_calls(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

impl ReviewService for FakeService {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Value, SubmissionError> {
        self.requests
            .lock()
            .expect("requests poisoned")
            .push(request.clone());
        let reply = self
            .analyze_replies
            .lock()
            .expect("analyze queue poisoned")
            .pop_front();
        reply.unwrap_or_else(|| Err(SubmissionError::Unreachable("no scripted reply".into())))
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryEntry>, HistoryRefreshError> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .history_replies
            .lock()
            .expect("history queue poisoned")
            .pop_front();
        reply.unwrap_or_else(|| Err(HistoryRefreshError::Transport("no scripted reply".into())))
    }
}

/// History row with the given id, product, sentiment, and key points.
pub fn entry(id: i64, product: &str, sentiment: &str, points: &[&str]) -> HistoryEntry {
    HistoryEntry {
        id: EntryId::Number(id),
        product_name: product.to_string(),
        sentiment: Some(sentiment.to_string()),
        key_points: Some(points.iter().map(|p| (*p).to_string()).collect()),
        review_text: None,
        confidence: None,
        created_at: None,
    }
}
