//! UI helper utilities shared by the panes and the plain-text CLI output.
//!
//! - Display-width aware truncation and caret placement
//! - Spinner frames for the pending indicator
//! - Plain-text renderings of an analysis report and history cards

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::logic::{AnalysisReport, HistoryView};

/// Braille spinner frames advanced by the tick worker.
const SPINNER: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// What: Spinner glyph for an animation frame.
#[must_use]
pub fn spinner_glyph(frame: usize) -> &'static str {
    SPINNER[frame % SPINNER.len()]
}

/// What: Truncate `s` so it occupies at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Available columns
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix followed by `…`.
///
/// Details:
/// - Widths come from `unicode-width`, so wide CJK glyphs count as two columns.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let budget = max - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// What: Locate a character caret inside possibly multi-line text.
///
/// Inputs:
/// - `text`: Buffer contents
/// - `caret`: Caret position in characters
///
/// Output:
/// - `(row, column)` where `column` is measured in display columns.
#[must_use]
pub fn caret_row_col(text: &str, caret: usize) -> (usize, usize) {
    let mut row = 0;
    let mut col = 0;
    for ch in text.chars().take(caret) {
        if ch == '\n' {
            row += 1;
            col = 0;
        } else {
            col += UnicodeWidthChar::width(ch).unwrap_or(0);
        }
    }
    (row, col)
}

/// What: Plain-text rendering of an analysis report.
///
/// Output:
/// - Sentiment, confidence, and one bullet per key point (or the placeholder).
#[must_use]
pub fn report_plain_lines(report: &AnalysisReport) -> Vec<String> {
    let sentiment = if report.sentiment.is_empty() {
        "(none)"
    } else {
        report.sentiment.as_str()
    };
    let mut head = format!("Sentiment: {sentiment} [{}]", report.tier().as_str());
    if report.cached {
        head.push_str(" (cached)");
    }
    let mut lines = vec![
        head,
        format!("Confidence: {}", report.confidence_label()),
        "Key points:".to_string(),
    ];
    lines.extend(
        report
            .key_point_lines()
            .iter()
            .map(|l| format!("  - {}", l.text())),
    );
    lines
}

/// What: Plain-text rendering of one history card.
#[must_use]
pub fn history_plain_lines(view: &HistoryView<'_>) -> Vec<String> {
    let mut head = format!("{} [{}]", view.product_name, view.sentiment);
    if let Some(ts) = view.created_at {
        head.push_str("  ");
        head.push_str(ts);
    }
    let mut lines = vec![head];
    lines.extend(view.body_lines().iter().map(|l| format!("  - {l}")));
    lines
}
