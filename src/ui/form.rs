use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    prelude::Position,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::Theme;

use super::helpers::{caret_row_col, spinner_glyph};

/// Block styled by focus, shared by both inputs.
fn input_block<'a>(title: &'a str, focused: bool, th: &Theme) -> Block<'a> {
    let title = if focused {
        format!("{title} (focused)")
    } else {
        title.to_string()
    };
    Block::default()
        .title(Span::styled(
            title,
            Style::default().fg(if focused { th.mauve } else { th.overlay1 }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface1 }))
}

/// What: Render the product input, the review input, and the submit control.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state (inputs, carets, focus, submission phase)
/// - `area`: Left column of the main layout
/// - `th`: Active theme
///
/// Details:
/// - Places the terminal cursor at the caret of the focused input.
/// - The review input scrolls vertically to keep the caret row visible.
/// - While a request is pending the submit control shows a spinner and is
///   rendered as disabled.
pub fn render_form(f: &mut Frame, app: &AppState, area: Rect, th: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(3),
        ])
        .split(area);

    // Product name
    let product_focused = app.focus == Focus::ProductName;
    let product_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if product_focused { th.sapphire } else { th.overlay1 }),
        ),
        Span::styled(
            app.product_name.clone(),
            Style::default().fg(if product_focused { th.text } else { th.subtext0 }),
        ),
    ]);
    let product = Paragraph::new(product_line)
        .style(Style::default().bg(th.base))
        .block(input_block("Product name", product_focused, th));
    f.render_widget(product, rows[0]);

    // Review text
    let review_focused = app.focus == Focus::ReviewText;
    let inner_h = rows[1].height.saturating_sub(2) as usize;
    let (caret_row, caret_col) = caret_row_col(&app.review_text, app.review_caret);
    let scroll = caret_row.saturating_sub(inner_h.saturating_sub(1));
    let review_lines: Vec<Line> = app
        .review_text
        .split('\n')
        .map(|l| {
            Line::from(Span::styled(
                l.to_string(),
                Style::default().fg(if review_focused { th.text } else { th.subtext0 }),
            ))
        })
        .collect();
    let review = Paragraph::new(review_lines)
        .style(Style::default().bg(th.base))
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(input_block("Review", review_focused, th));
    f.render_widget(review, rows[1]);

    // Submit control
    let pending = !app.submission.can_submit();
    let (label, color) = if pending {
        (
            format!("{} Analyzing…", spinner_glyph(app.spinner_frame)),
            th.yellow,
        )
    } else {
        ("Analyze  [Ctrl+S]".to_string(), th.green)
    };
    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if pending {
        style = style.add_modifier(Modifier::DIM);
    }
    let button = Paragraph::new(Line::from(Span::styled(label, style)))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if pending { th.surface1 } else { color })),
        );
    f.render_widget(button, rows[2]);

    // Cursor in the focused input
    if product_focused {
        let (_, col) = caret_row_col(&app.product_name, app.product_caret);
        place_cursor(f, rows[0], 2 + col, 0);
    } else if review_focused {
        place_cursor(f, rows[1], caret_col, caret_row - scroll);
    }
}

/// What: Put the terminal cursor at an offset inside a bordered block, clamped to its interior.
fn place_cursor(f: &mut Frame, block: Rect, col: usize, row: usize) {
    let right = block.x + block.width.saturating_sub(2);
    let bottom = block.y + block.height.saturating_sub(2);
    let x = (block.x + 1).saturating_add(u16::try_from(col).unwrap_or(u16::MAX));
    let y = (block.y + 1).saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
    f.set_cursor_position(Position::new(x.min(right), y.min(bottom)));
}
