//! Compact, read-only views of history entries for the history pane.

use crate::logic::sentiment::classify;
use crate::state::{HistoryEntry, SentimentTier};

/// Maximum number of key points shown per history card.
pub const HISTORY_PREVIEW_POINTS: usize = 2;

/// Marker appended when an entry has more key points than are shown.
pub const MORE_MARKER: &str = "...and more";

/// Borrowed presentation of one [`HistoryEntry`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryView<'a> {
    /// Product name as stored.
    pub product_name: &'a str,
    /// Sentiment label, empty when the entry has none.
    pub sentiment: &'a str,
    /// Display tier derived from the label.
    pub tier: SentimentTier,
    /// At most [`HISTORY_PREVIEW_POINTS`] key points, in original order.
    pub points: &'a [String],
    /// Whether a trailing "more" marker follows the points.
    pub has_more: bool,
    /// Creation timestamp, when the service included one.
    pub created_at: Option<&'a str>,
}

/// What: Project a history entry into its compact view.
///
/// Inputs:
/// - `entry`: Entry from the last fetched snapshot.
///
/// Output:
/// - A view borrowing from `entry` with the first two key points and a
///   `has_more` flag when the entry holds more than two.
///
/// Details:
/// - Entries without key points yield no items and no marker; unlike the
///   analyze result there is no placeholder here.
#[must_use]
pub fn project(entry: &HistoryEntry) -> HistoryView<'_> {
    let all = entry.key_points.as_deref().unwrap_or_default();
    let shown = all.len().min(HISTORY_PREVIEW_POINTS);
    HistoryView {
        product_name: &entry.product_name,
        sentiment: entry.sentiment.as_deref().unwrap_or_default(),
        tier: classify(entry.sentiment.as_deref()),
        points: &all[..shown],
        has_more: all.len() > HISTORY_PREVIEW_POINTS,
        created_at: entry.created_at.as_deref(),
    }
}

/// What: Project every entry of a snapshot, preserving server order.
#[must_use]
pub fn project_all(entries: &[HistoryEntry]) -> Vec<HistoryView<'_>> {
    entries.iter().map(project).collect()
}

impl HistoryView<'_> {
    /// What: Lines of the card body: bullets followed by the optional marker.
    #[must_use]
    pub fn body_lines(&self) -> Vec<&str> {
        let mut lines: Vec<&str> = self.points.iter().map(String::as_str).collect();
        if self.has_more {
            lines.push(MORE_MARKER);
        }
        lines
    }
}
