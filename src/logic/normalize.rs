//! Defensive interpretation of analyze responses.
//!
//! The analysis service relies on an LLM step to extract key points, and that
//! step is known to fail or return odd shapes. Everything downstream of this
//! module works on [`AnalysisReport`], which is total: every field has a value
//! that is safe to render.

use serde_json::Value;

use crate::logic::sentiment::classify;
use crate::state::{EntryId, SentimentTier};

/// Text shown in place of key points when extraction failed upstream.
pub const KEY_POINTS_PLACEHOLDER: &str = "Key points could not be extracted for this review.";

/// Extracted key points, or a marker that the service did not provide usable ones.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyPoints {
    /// Non-empty list returned by the service.
    Extracted(Vec<String>),
    /// Field was absent, not an array, or an empty array.
    Degraded,
}

/// One line of the rendered key point list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyPointLine<'a> {
    /// A regular bullet.
    Point(&'a str),
    /// The single warning item shown when extraction failed.
    Placeholder,
}

impl KeyPointLine<'_> {
    /// Text to display for this line.
    #[must_use]
    pub fn text(&self) -> &str {
        match *self {
            Self::Point(s) => s,
            Self::Placeholder => KEY_POINTS_PLACEHOLDER,
        }
    }
}

/// Typed, total form of an analyze response.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    /// Sentiment label, empty when the service sent none.
    pub sentiment: String,
    /// Confidence as sent by the service; `None` when missing or not a number.
    pub confidence: Option<f64>,
    /// Key points or the degradation marker.
    pub key_points: KeyPoints,
    /// Id of the stored analysis, when returned.
    pub id: Option<EntryId>,
    /// Whether the service answered from its cache.
    pub cached: bool,
}

impl AnalysisReport {
    /// Display tier derived from the sentiment label.
    #[must_use]
    pub fn tier(&self) -> SentimentTier {
        classify(Some(&self.sentiment))
    }

    /// What: Render the confidence as a percentage with one decimal place.
    ///
    /// Output:
    /// - `"92.0%"` for `0.92`; `"n/a"` when the confidence is missing.
    ///
    /// Details:
    /// - No clamping: out-of-range values render as-is (`1.5` becomes `"150.0%"`).
    #[must_use]
    pub fn confidence_label(&self) -> String {
        format_confidence(self.confidence)
    }

    /// What: Lines to show in the key point list.
    ///
    /// Output:
    /// - One `Point` per extracted item, or exactly one `Placeholder` when degraded.
    #[must_use]
    pub fn key_point_lines(&self) -> Vec<KeyPointLine<'_>> {
        match &self.key_points {
            KeyPoints::Extracted(points) => points
                .iter()
                .map(|p| KeyPointLine::Point(p.as_str()))
                .collect(),
            KeyPoints::Degraded => vec![KeyPointLine::Placeholder],
        }
    }

    /// Whether the key points fell back to the placeholder.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self.key_points, KeyPoints::Degraded)
    }
}

/// What: Format an optional confidence in `[0, 1]` as a percentage string.
///
/// Inputs:
/// - `confidence`: Raw confidence value.
///
/// Output:
/// - `"{:.1}%"` of `confidence * 100`, or `"n/a"` for `None`.
#[must_use]
pub fn format_confidence(confidence: Option<f64>) -> String {
    confidence.map_or_else(|| "n/a".to_string(), |c| format!("{:.1}%", c * 100.0))
}

/// What: Normalize an arbitrary JSON value into an [`AnalysisReport`].
///
/// Inputs:
/// - `value`: Parsed response body of the analyze call.
///
/// Output:
/// - A report whose fields are always populated.
///
/// Details:
/// - Non-object bodies normalize to an empty, degraded report.
/// - Non-string sentiment and key point items are kept as their JSON text.
/// - Logs at `warn` when key points had to be replaced by the placeholder.
#[must_use]
pub fn normalize_report(value: &Value) -> AnalysisReport {
    let sentiment = value.get("sentiment").map(scalar_text).unwrap_or_default();
    let confidence = value.get("confidence").and_then(Value::as_f64);
    let key_points = match value.get("key_points").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => {
            KeyPoints::Extracted(items.iter().map(scalar_text).collect())
        }
        _ => {
            tracing::warn!(
                present = value.get("key_points").is_some(),
                "analysis response has no usable key points; showing placeholder"
            );
            KeyPoints::Degraded
        }
    };
    let id = value
        .get("id")
        .and_then(|v| serde_json::from_value::<EntryId>(v.clone()).ok());
    let cached = value
        .get("status")
        .and_then(Value::as_str)
        .is_some_and(|s| s.eq_ignore_ascii_case("cached"));
    AnalysisReport {
        sentiment,
        confidence,
        key_points,
        id,
        cached,
    }
}

/// Render a JSON scalar as display text; `null` becomes empty.
pub(crate) fn scalar_text(v: &Value) -> String {
    match v {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: A well-formed response passes through with its key points intact.
    ///
    /// - Input: Positive response with two key points
    /// - Output: Sentiment, "92.0%", two point lines, no degradation
    fn normalize_keeps_well_formed_response() {
        let report = normalize_report(&json!({
            "sentiment": "Positive",
            "confidence": 0.92,
            "key_points": ["battery", "value"]
        }));
        assert_eq!(report.sentiment, "Positive");
        assert_eq!(report.tier(), SentimentTier::Positive);
        assert_eq!(report.confidence_label(), "92.0%");
        assert_eq!(
            report.key_point_lines(),
            vec![KeyPointLine::Point("battery"), KeyPointLine::Point("value")]
        );
        assert!(!report.is_degraded());
        assert!(!report.cached);
    }

    #[test]
    /// What: Absent, non-array, and empty key points each produce exactly one placeholder.
    fn normalize_degrades_unusable_key_points() {
        let bodies = [
            json!({"sentiment": "Negative", "confidence": 0.5}),
            json!({"sentiment": "Negative", "key_points": "battery"}),
            json!({"sentiment": "Negative", "key_points": {"a": 1}}),
            json!({"sentiment": "Negative", "key_points": null}),
            json!({"sentiment": "Negative", "key_points": []}),
        ];
        for body in &bodies {
            let report = normalize_report(body);
            let lines = report.key_point_lines();
            assert_eq!(lines, vec![KeyPointLine::Placeholder], "body {body}");
            assert_eq!(lines[0].text(), KEY_POINTS_PLACEHOLDER);
            assert!(report.is_degraded());
        }
    }

    #[test]
    /// What: Missing sentiment maps to empty text and the neutral tier.
    fn normalize_missing_sentiment_is_neutral() {
        let report = normalize_report(&json!({"confidence": 0.1, "key_points": ["x"]}));
        assert_eq!(report.sentiment, "");
        assert_eq!(report.tier(), SentimentTier::Neutral);
    }

    #[test]
    /// What: Confidence renders unclamped and falls back to "n/a" when not numeric.
    fn confidence_label_is_unclamped_and_total() {
        assert_eq!(format_confidence(Some(1.5)), "150.0%");
        assert_eq!(format_confidence(Some(-0.25)), "-25.0%");
        assert_eq!(format_confidence(Some(0.0)), "0.0%");
        assert_eq!(format_confidence(None), "n/a");
        let report = normalize_report(&json!({"confidence": "high"}));
        assert_eq!(report.confidence, None);
        assert_eq!(report.confidence_label(), "n/a");
    }

    #[test]
    /// What: Non-object bodies still normalize to a renderable report.
    fn normalize_tolerates_non_object_body() {
        for body in [json!([1, 2]), json!("ok"), json!(null), json!(3)] {
            let report = normalize_report(&body);
            assert_eq!(report.sentiment, "");
            assert!(report.is_degraded());
            assert_eq!(report.confidence, None);
        }
    }

    #[test]
    /// What: Non-string items are rendered from their JSON text, cache status and id are kept.
    fn normalize_keeps_odd_items_and_cache_status() {
        let report = normalize_report(&json!({
            "id": 12,
            "sentiment": 4,
            "confidence": 0.3,
            "key_points": ["ok", 5, true],
            "status": "cached"
        }));
        assert_eq!(report.sentiment, "4");
        assert_eq!(
            report.key_points,
            KeyPoints::Extracted(vec!["ok".into(), "5".into(), "true".into()])
        );
        assert_eq!(report.id, Some(EntryId::Number(12)));
        assert!(report.cached);
    }
}
