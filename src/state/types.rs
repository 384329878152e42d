//! Core value types shared by the logic, network, and UI layers.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::logic::normalize::scalar_text;

/// Body of `POST /api/analyze-review`.
///
/// Built only after the form passed validation; dropped once the request
/// resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Product the review is about.
    pub product_name: String,
    /// Free-form review text to analyze.
    pub review_text: String,
}

/// Identifier the service assigns to a stored analysis.
///
/// The service emits integers, but string ids are accepted as well.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    /// Numeric database id.
    Number(i64),
    /// Opaque textual id.
    Text(String),
}

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One row of `GET /api/reviews`, in server order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique identifier of the stored analysis.
    pub id: EntryId,
    /// Product the review was about.
    #[serde(default, deserialize_with = "lenient_text")]
    pub product_name: String,
    /// Sentiment label as produced by the service (free text).
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub sentiment: Option<String>,
    /// Extracted key points; absent for rows stored without them.
    #[serde(default, deserialize_with = "lenient_key_points")]
    pub key_points: Option<Vec<String>>,
    /// Original review text, when the service includes it.
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub review_text: Option<String>,
    /// Model confidence in `[0, 1]`, when the service includes it.
    #[serde(default, deserialize_with = "lenient_number")]
    pub confidence: Option<f64>,
    /// Server-side creation timestamp, verbatim.
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub created_at: Option<String>,
}

/// What: Read any JSON scalar as display text; `null` becomes empty.
fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(scalar_text(&Value::deserialize(d)?))
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Null => None,
        v => Some(scalar_text(&v)),
    })
}

/// What: Accept key points the way the analyze normalizer does.
///
/// Details:
/// - Arrays keep every item, rendered through `scalar_text` (`5` becomes `"5"`).
/// - Anything that is not an array is treated as absent.
fn lenient_key_points<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<String>>, D::Error> {
    Ok(match Value::deserialize(d)? {
        Value::Array(items) => Some(items.iter().map(scalar_text).collect()),
        _ => None,
    })
}

fn lenient_number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
    Ok(Value::deserialize(d)?.as_f64())
}

/// Three-way display classification of a sentiment label.
///
/// Never stored; always recomputed from the label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SentimentTier {
    /// Label mentions "positive".
    Positive,
    /// Label mentions "negative" (and not "positive").
    Negative,
    /// Anything else, including a missing label.
    Neutral,
}

impl SentimentTier {
    /// Lowercase name used in logs and plain-text output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

/// Which form field or pane currently receives keyboard input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Focus {
    /// Single-line product name input.
    #[default]
    ProductName,
    /// Multi-line review text input.
    ReviewText,
    /// Scrollable history list.
    History,
}

impl Focus {
    /// Cycle forward: product name, review text, history.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::ProductName => Self::ReviewText,
            Self::ReviewText => Self::History,
            Self::History => Self::ProductName,
        }
    }

    /// Cycle backward.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::ProductName => Self::History,
            Self::ReviewText => Self::ProductName,
            Self::History => Self::ReviewText,
        }
    }
}
