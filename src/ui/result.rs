use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::logic::{AnalysisReport, KeyPointLine, SubmissionPhase};
use crate::state::AppState;
use crate::theme::{Theme, tier_color};

use super::helpers::spinner_glyph;

/// What: Build the themed lines for a normalized report.
///
/// Details:
/// - The sentiment badge is colored by tier; a missing label reads "(none)".
/// - The degraded placeholder is rendered as a yellow warning line.
fn report_lines(report: &AnalysisReport, th: &Theme) -> Vec<Line<'static>> {
    let tier_fg = tier_color(th, report.tier());
    let label = if report.sentiment.is_empty() {
        "(none)".to_string()
    } else {
        report.sentiment.clone()
    };
    let mut head = vec![
        Span::styled(
            "Sentiment: ",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(th.crust)
                .bg(tier_fg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if report.cached {
        head.push(Span::styled("  (cached)", Style::default().fg(th.overlay1)));
    }

    let mut lines = vec![
        Line::from(head),
        Line::from(vec![
            Span::styled(
                "Confidence: ",
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled(report.confidence_label(), Style::default().fg(th.text)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Key points",
            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
        )),
    ];
    for item in report.key_point_lines() {
        let line = match item {
            KeyPointLine::Point(p) => Line::from(vec![
                Span::styled("• ", Style::default().fg(tier_fg)),
                Span::styled(p.to_string(), Style::default().fg(th.text)),
            ]),
            KeyPointLine::Placeholder => Line::from(Span::styled(
                format!("⚠ {}", item.text()),
                Style::default().fg(th.yellow).add_modifier(Modifier::ITALIC),
            )),
        };
        lines.push(line);
    }
    if let Some(id) = &report.id {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Saved as #{id}"),
            Style::default().fg(th.overlay1),
        )));
    }
    lines
}

/// What: Render the result panel for the current submission state.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (submission phase and report)
/// - `area`: Target rectangle
/// - `th`: Active theme
///
/// Details:
/// - Nothing from a previous request is shown while a new one is pending.
pub fn render_result(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let lines = match (app.submission.phase(), app.submission.result()) {
        (SubmissionPhase::Succeeded, Some(report)) => report_lines(report, th),
        (SubmissionPhase::Pending, _) => vec![Line::from(Span::styled(
            format!("{} Analyzing review…", spinner_glyph(app.spinner_frame)),
            Style::default().fg(th.yellow),
        ))],
        (SubmissionPhase::Failed, _) => vec![Line::from(Span::styled(
            "The last analysis failed. Adjust the form and try again.",
            Style::default().fg(th.red),
        ))],
        _ => vec![Line::from(Span::styled(
            "No analysis yet. Fill in the form and press Ctrl+S.",
            Style::default().fg(th.overlay1),
        ))],
    };

    let panel = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.base))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(Span::styled("Analysis", Style::default().fg(th.overlay1)))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(th.surface2)),
        );
    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::normalize_report;
    use serde_json::json;

    fn flat(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    /// What: A full report lists the badge, the percentage, and every point.
    fn report_lines_show_all_points() {
        let th = crate::theme::theme();
        let report = normalize_report(
            &json!({"sentiment": "Positive", "confidence": 0.92, "key_points": ["battery", "value"], "status": "cached"}),
        );
        let text = flat(&report_lines(&report, &th));
        assert_eq!(text[0], "Sentiment:  Positive   (cached)");
        assert_eq!(text[1], "Confidence: 92.0%");
        assert_eq!(text[4], "• battery");
        assert_eq!(text[5], "• value");
    }

    #[test]
    /// What: A degraded report shows one warning line instead of bullets.
    fn degraded_report_shows_placeholder() {
        let th = crate::theme::theme();
        let report = normalize_report(&json!({"sentiment": "Neutral", "confidence": 0.5}));
        let lines = report_lines(&report, &th);
        let text = flat(&lines);
        assert_eq!(text.len(), 5);
        assert!(text[4].starts_with('⚠'));
        assert_eq!(lines[4].spans[0].style.fg, Some(th.yellow));
    }
}
