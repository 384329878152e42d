//! Authoritative history snapshot and its refresh policy.
//!
//! The snapshot is only ever replaced as a whole by a successful fetch. A
//! failed fetch is logged and otherwise invisible: the previous snapshot stays.

use std::time::Instant;

use crate::error::HistoryRefreshError;
use crate::state::HistoryEntry;

/// Identifies one history fetch so late responses can be discarded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RefreshTicket(pub u64);

/// Why a refresh was requested; carried for logging only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RefreshReason {
    /// Initial load at process start.
    Startup,
    /// Fetch-after-write following a successful analysis.
    AfterSubmission,
    /// User asked for it.
    Manual,
}

impl RefreshReason {
    /// Lowercase name for structured logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::AfterSubmission => "after_submission",
            Self::Manual => "manual",
        }
    }
}

/// Result of applying a fetch outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Snapshot replaced; carries the new entry count.
    Replaced(usize),
    /// Fetch failed; previous snapshot kept.
    Kept,
    /// Response was older than the last applied one and was dropped.
    Stale,
}

/// Owner of the history collection.
#[derive(Debug, Default)]
pub struct HistorySync {
    /// Last successfully fetched snapshot, in server order.
    entries: Vec<HistoryEntry>,
    /// Next ticket to hand out.
    next_ticket: u64,
    /// Newest ticket whose response has been applied (success or failure).
    last_applied: Option<RefreshTicket>,
    /// Number of fetches issued but not yet applied.
    in_flight: usize,
    /// When the snapshot was last replaced.
    last_success: Option<Instant>,
    /// Message of the most recent failure, cleared on success.
    last_error: Option<String>,
}

impl HistorySync {
    /// Empty snapshot, nothing fetched yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Whether at least one fetch is outstanding.
    #[must_use]
    pub const fn is_refreshing(&self) -> bool {
        self.in_flight > 0
    }

    /// Instant of the last successful refresh.
    #[must_use]
    pub const fn last_success(&self) -> Option<Instant> {
        self.last_success
    }

    /// Message of the last failed refresh, if the latest outcome was a failure.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// What: Allocate a ticket for a new fetch.
    ///
    /// Inputs:
    /// - `reason`: Why the fetch is issued (logged).
    ///
    /// Output:
    /// - Ticket to attach to the fetch request.
    pub fn begin_refresh(&mut self, reason: RefreshReason) -> RefreshTicket {
        let ticket = RefreshTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight += 1;
        tracing::debug!(ticket = ticket.0, reason = reason.as_str(), "history refresh issued");
        ticket
    }

    /// What: Apply the outcome of a fetch.
    ///
    /// Inputs:
    /// - `ticket`: Ticket the fetch was issued with.
    /// - `outcome`: Entries on success, or the refresh error.
    ///
    /// Output:
    /// - `Replaced(n)` when the snapshot was swapped for `n` entries,
    ///   `Kept` on failure, `Stale` when a newer fetch was already applied.
    ///
    /// Details:
    /// - Failures are logged at `warn` and never surfaced to the user.
    pub fn apply(
        &mut self,
        ticket: RefreshTicket,
        outcome: Result<Vec<HistoryEntry>, HistoryRefreshError>,
    ) -> RefreshOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.last_applied.is_some_and(|last| ticket < last) {
            tracing::debug!(ticket = ticket.0, "dropping stale history response");
            return RefreshOutcome::Stale;
        }
        self.last_applied = Some(ticket);
        match outcome {
            Ok(entries) => {
                let count = entries.len();
                self.entries = entries;
                self.last_success = Some(Instant::now());
                self.last_error = None;
                tracing::info!(ticket = ticket.0, entries = count, "history refreshed");
                RefreshOutcome::Replaced(count)
            }
            Err(err) => {
                tracing::warn!(
                    ticket = ticket.0,
                    error = %err,
                    kept = self.entries.len(),
                    "history refresh failed; keeping previous snapshot"
                );
                self.last_error = Some(err.to_string());
                RefreshOutcome::Kept
            }
        }
    }
}
