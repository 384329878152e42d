use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::Modal;
use crate::theme::Theme;

/// Key bindings listed in the help overlay.
const HELP_ROWS: &[(&str, &str)] = &[
    ("Ctrl+S / F2", "Submit the review for analysis"),
    ("Tab / Shift+Tab", "Move between product, review, and history"),
    ("Enter", "Next field (product) / new line (review)"),
    ("Ctrl+L", "Clear the form"),
    ("F5 / Ctrl+R", "Refresh history"),
    ("Up / Down", "Move the history selection"),
    ("F1", "Show this help"),
    ("Ctrl+C / Ctrl+Q", "Quit"),
];

/// Centered rectangle of at most `w`×`h` inside `area`.
fn centered(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(w)) / 2,
        y: area.y + (area.height.saturating_sub(h)) / 2,
        width: w,
        height: h,
    }
}

/// Render modal overlays: Alert and Help.
///
/// Clears the area behind the modal and draws a styled box centered on the
/// screen.
pub fn render_modals(f: &mut Frame, modal: &Modal, area: Rect, th: &Theme) {
    match modal {
        Modal::None => {}
        Modal::Alert { title, message } => {
            let rect = centered(area, area.width.saturating_sub(10).min(80), 8);
            f.render_widget(Clear, rect);
            let lines = vec![
                Line::from(Span::styled(
                    title.clone(),
                    Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(message.clone(), Style::default().fg(th.text))),
                Line::from(""),
                Line::from(Span::styled(
                    "Press Enter or Esc to close",
                    Style::default().fg(th.subtext1),
                )),
            ];
            let boxw = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(Span::styled(
                            format!(" {title} "),
                            Style::default().fg(th.red).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.red))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(boxw, rect);
        }
        Modal::Help => {
            let h = u16::try_from(HELP_ROWS.len()).unwrap_or(u16::MAX) + 4;
            let rect = centered(area, 64, h);
            f.render_widget(Clear, rect);
            let mut lines: Vec<Line> = HELP_ROWS
                .iter()
                .map(|(keys, what)| {
                    Line::from(vec![
                        Span::styled(
                            format!("{keys:<18}"),
                            Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(*what, Style::default().fg(th.text)),
                    ])
                })
                .collect();
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Press Enter or Esc to close",
                Style::default().fg(th.subtext1),
            )));
            let boxw = Paragraph::new(lines)
                .style(Style::default().fg(th.text).bg(th.mantle))
                .block(
                    Block::default()
                        .title(Span::styled(
                            " Help ",
                            Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                        ))
                        .borders(Borders::ALL)
                        .border_type(BorderType::Double)
                        .border_style(Style::default().fg(th.mauve))
                        .style(Style::default().bg(th.mantle)),
                );
            f.render_widget(boxw, rect);
        }
    }
}
