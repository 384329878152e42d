//! Top-level frame layout for revscope's TUI.
//!
//! The left column holds the form; the right column stacks the analysis
//! panel over the history pane. A one-line footer shows the service URL and
//! the history refresh status. Modals are drawn last on top of everything.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::state::AppState;
use crate::theme::{Theme, theme};

mod form;
pub mod helpers;
mod history;
mod modals;
mod result;

/// What: Render one full frame.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; mutable for the history list selection state
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let area = f.area();

    // Background
    let bg = Block::default().style(Style::default().bg(th.base));
    f.render_widget(bg, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(1)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(columns[1]);

    form::render_form(f, app, columns[0], &th);
    result::render_result(f, app, right[0], &th);
    history::render_history(f, app, right[1], &th);
    render_footer(f, app, rows[1], &th);

    modals::render_modals(f, &app.modal, area, &th);
}

/// What: Human-readable history status for the footer.
fn history_status(app: &AppState) -> String {
    if app.history.is_refreshing() {
        return "history: refreshing…".to_string();
    }
    if let Some(err) = app.history.last_error() {
        return format!("history: last refresh failed ({err})");
    }
    app.history.last_success().map_or_else(
        || "history: not loaded".to_string(),
        |at| format!("history: updated {}s ago", at.elapsed().as_secs()),
    )
}

/// What: Render the status line below the main layout.
fn render_footer(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let width = area.width as usize;
    let text = format!(
        " {}  |  {}  |  F1 help  Ctrl+Q quit",
        app.base_url,
        history_status(app)
    );
    let footer = Paragraph::new(Line::from(Span::styled(
        helpers::truncate_to_width(&text, width),
        Style::default().fg(th.overlay1),
    )))
    .style(Style::default().bg(th.mantle));
    f.render_widget(footer, area);
}
