//! Event handling layer for revscope's TUI.
//!
//! Converts raw `crossterm` key events into mutations on [`AppState`]:
//!
//! - Modal dialogs capture all keys until dismissed
//! - Global chords submit, refresh history, clear the form, show help, quit
//! - Remaining keys edit the focused form field or move the history selection
//!
//! Every function here is synchronous. Network work is delegated to the
//! runtime's workers through the channels passed in.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::app::runtime::handlers::{request_history_refresh, submit_form};
use crate::logic::{IssuedRequest, RefreshReason, RefreshTicket};
use crate::state::{AppState, Focus, Modal};

mod form;
mod history;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event
/// - `app`: Application state
/// - `analyze_req_tx`: Channel sender to the analyze worker
/// - `history_req_tx`: Channel sender to the history worker
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(
    ev: &CEvent,
    app: &mut AppState,
    analyze_req_tx: &mpsc::UnboundedSender<IssuedRequest>,
    history_req_tx: &mpsc::UnboundedSender<RefreshTicket>,
) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    if app.modal.is_open() {
        handle_modal_key(ke, app);
        return false;
    }

    if let Some(exit) = handle_global_key(ke, app, analyze_req_tx, history_req_tx) {
        return exit;
    }

    match app.focus {
        Focus::ProductName => form::handle_product_key(ke, app),
        Focus::ReviewText => form::handle_review_key(ke, app),
        Focus::History => history::handle_history_key(ke, app),
    }
    false
}

/// What: Keys while a modal is open.
///
/// Details:
/// - Enter or Esc dismisses alerts and help; everything else is swallowed.
fn handle_modal_key(ke: &KeyEvent, app: &mut AppState) {
    if matches!(ke.code, KeyCode::Enter | KeyCode::Esc) {
        app.modal = Modal::None;
    }
}

/// What: Chords that work regardless of focus.
///
/// Output:
/// - `Some(exit)` when the key was consumed, `None` to fall through to the
///   focused pane.
fn handle_global_key(
    ke: &KeyEvent,
    app: &mut AppState,
    analyze_req_tx: &mpsc::UnboundedSender<IssuedRequest>,
    history_req_tx: &mpsc::UnboundedSender<RefreshTicket>,
) -> Option<bool> {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);
    match ke.code {
        KeyCode::Char('c' | 'q') if ctrl => Some(true),
        KeyCode::Char('s') if ctrl => {
            submit_form(app, analyze_req_tx);
            Some(false)
        }
        KeyCode::F(2) => {
            submit_form(app, analyze_req_tx);
            Some(false)
        }
        KeyCode::Char('r') if ctrl => {
            request_history_refresh(app, RefreshReason::Manual, history_req_tx);
            Some(false)
        }
        KeyCode::F(5) => {
            request_history_refresh(app, RefreshReason::Manual, history_req_tx);
            Some(false)
        }
        KeyCode::Char('l') if ctrl => {
            app.clear_form();
            Some(false)
        }
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            Some(false)
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            if app.focus == Focus::History {
                app.clamp_history_selection();
            }
            Some(false)
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            if app.focus == Focus::History {
                app.clamp_history_selection();
            }
            Some(false)
        }
        _ => None,
    }
}
