//! Display-tier classification of free-text sentiment labels.

use crate::state::SentimentTier;

/// What: Map a sentiment label to its display tier.
///
/// Inputs:
/// - `label`: Sentiment text from the service, or `None` when absent.
///
/// Output:
/// - `Positive` if the label contains "positive" (case-insensitive), else
///   `Negative` if it contains "negative", else `Neutral`.
///
/// Details:
/// - "positive" is checked first, so a label containing both words is positive.
#[must_use]
pub fn classify(label: Option<&str>) -> SentimentTier {
    let Some(label) = label else {
        return SentimentTier::Neutral;
    };
    let lower = label.to_lowercase();
    if lower.contains("positive") {
        SentimentTier::Positive
    } else if lower.contains("negative") {
        SentimentTier::Negative
    } else {
        SentimentTier::Neutral
    }
}
