//! Integration tests for UI rendering using ratatui's `TestBackend`.
//!
//! These tests verify that the TUI renders correctly across different application states
//! without requiring a real terminal. They focus on visual rendering correctness rather
//! than business logic.

mod common;

use ratatui::{Terminal, backend::TestBackend};
use serde_json::json;
use tokio::sync::mpsc;

use common::entry;
use revscope::app::runtime::handlers::{handle_analysis_result, handle_history_result, submit_form};
use revscope::error::SubmissionError;
use revscope::logic::{RefreshReason, RefreshTicket};
use revscope::state::{AppState, Modal};
use revscope::ui;

/// Render one frame and return the screen as text, one row per line.
fn render(app: &mut AppState, w: u16, h: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(w, h)).expect("terminal");
    terminal.draw(|f| ui::ui(f, app)).expect("draw");
    let buffer = terminal.backend().buffer().clone();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn filled() -> AppState {
    let mut app = AppState::default();
    app.product_name = "Laptop X".into();
    app.review_text = "Great battery".into();
    app
}

#[test]
/// What: The idle screen shows both inputs, the submit control, and the empty history.
fn idle_screen_shows_form_and_empty_history() {
    let mut app = AppState::default();
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Product name"));
    assert!(screen.contains("Review"));
    assert!(screen.contains("Analyze  [Ctrl+S]"));
    assert!(screen.contains("No analysis yet"));
    assert!(screen.contains("No analyses yet."));
    assert!(screen.contains("http://localhost:6543"));
}

#[test]
/// What: A pending request shows the analyzing state instead of the submit label.
fn pending_submission_shows_progress() {
    let mut app = filled();
    let (tx, _rx) = mpsc::unbounded_channel();
    submit_form(&mut app, &tx);
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Analyzing…"));
    assert!(!screen.contains("Analyze  [Ctrl+S]"));
}

#[test]
/// What: A successful result shows badge, percentage, bullets, and the history cards.
fn success_renders_report_and_history() {
    let mut app = filled();
    let (atx, mut arx) = mpsc::unbounded_channel();
    let (htx, _hrx) = mpsc::unbounded_channel();
    submit_form(&mut app, &atx);
    let issued = arx.try_recv().expect("request");
    handle_analysis_result(
        &mut app,
        (
            issued.id,
            Ok(json!({"sentiment": "Positive", "confidence": 0.92, "key_points": ["battery", "value"]})),
        ),
        &htx,
    );
    handle_history_result(
        &mut app,
        (
            RefreshTicket(0),
            Ok(vec![entry(
                1,
                "Laptop X",
                "Positive",
                &["battery", "value", "screen"],
            )]),
        ),
    );

    let screen = render(&mut app, 140, 40);
    assert!(screen.contains("Positive"));
    assert!(screen.contains("92.0%"));
    assert!(screen.contains("• battery"));
    assert!(screen.contains("• value"));
    assert!(screen.contains("History (1)"));
    assert!(screen.contains("...and more"));
    assert!(!screen.contains("• screen"), "history shows at most two points");
}

#[test]
/// What: A failed submission shows the alert above the layout.
fn failure_renders_alert_modal() {
    let mut app = filled();
    let (atx, mut arx) = mpsc::unbounded_channel();
    let (htx, _hrx) = mpsc::unbounded_channel();
    submit_form(&mut app, &atx);
    let issued = arx.try_recv().expect("request");
    handle_analysis_result(
        &mut app,
        (issued.id, Err(SubmissionError::Unreachable("refused".into()))),
        &htx,
    );
    assert!(matches!(app.modal, Modal::Alert { .. }));
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Could not reach service"));
    assert!(screen.contains("Press Enter or Esc to close"));
}

#[test]
/// What: The footer reports an outstanding refresh.
fn footer_shows_refresh_in_progress() {
    let mut app = AppState::default();
    let _ = app.history.begin_refresh(RefreshReason::Startup);
    let screen = render(&mut app, 140, 30);
    assert!(screen.contains("history: refreshing…"));
}
