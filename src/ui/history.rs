use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::logic::projection::MORE_MARKER;
use crate::logic::{HistoryView, project_all};
use crate::state::{AppState, Focus};
use crate::theme::{Theme, tier_color};

use super::helpers::{spinner_glyph, truncate_to_width};

/// What: Build the multi-line list item for one history card.
///
/// Inputs:
/// - `view`: Projected entry
/// - `width`: Usable columns inside the pane
/// - `th`: Active theme
///
/// Details:
/// - Header: tier dot, product name, sentiment label, and timestamp when present.
/// - Body: up to two bullets, then the dimmed "more" marker.
fn card<'a>(view: &HistoryView<'_>, width: usize, th: &Theme) -> ListItem<'a> {
    let fg = tier_color(th, view.tier);
    let mut head = vec![
        Span::styled("● ", Style::default().fg(fg)),
        Span::styled(
            truncate_to_width(view.product_name, width.saturating_sub(4).max(1)),
            Style::default().fg(th.text).add_modifier(Modifier::BOLD),
        ),
    ];
    if !view.sentiment.is_empty() {
        head.push(Span::styled(
            format!("  {}", view.sentiment),
            Style::default().fg(fg),
        ));
    }
    let used: usize = head.iter().map(|s| s.content.width()).sum();
    if let Some(ts) = view.created_at {
        let room = width.saturating_sub(used + 2);
        if room > 0 {
            head.push(Span::styled(
                format!("  {}", truncate_to_width(ts, room)),
                Style::default().fg(th.overlay1),
            ));
        }
    }

    let mut lines = vec![Line::from(head)];
    let bullet_room = width.saturating_sub(4);
    for point in view.points {
        lines.push(Line::from(vec![
            Span::styled("  • ", Style::default().fg(th.overlay2)),
            Span::styled(
                truncate_to_width(point, bullet_room),
                Style::default().fg(th.subtext0),
            ),
        ]));
    }
    if view.has_more {
        lines.push(Line::from(Span::styled(
            format!("    {MORE_MARKER}"),
            Style::default()
                .fg(th.overlay1)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    ListItem::new(lines)
}

/// What: Render the history pane from the current snapshot.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (history snapshot, selection, focus)
/// - `area`: Target rectangle
/// - `th`: Active theme
///
/// Details:
/// - Rows keep server order; a spinner in the title marks an outstanding fetch.
pub fn render_history(f: &mut Frame, app: &mut AppState, area: Rect, th: &Theme) {
    let focused = app.focus == Focus::History;
    let mut title = vec![Span::styled(
        format!(
            "History ({}){}",
            app.history.entries().len(),
            if focused { " (focused)" } else { "" }
        ),
        Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
    )];
    if app.history.is_refreshing() {
        title.push(Span::styled(
            format!(" {}", spinner_glyph(app.spinner_frame)),
            Style::default().fg(th.yellow),
        ));
    }
    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }));

    if app.history.entries().is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No analyses yet.",
            Style::default().fg(th.overlay1),
        ))
        .style(Style::default().bg(th.base))
        .block(block);
        f.render_widget(empty, area);
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = project_all(app.history.entries())
        .iter()
        .map(|v| card(v, width, th))
        .collect();
    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(if focused {
            Style::default().bg(th.surface1)
        } else {
            Style::default()
        })
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.history_state);
}
