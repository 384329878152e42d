//! Key handling for the history pane.

use crossterm::event::{KeyCode, KeyEvent};

use crate::state::AppState;

/// What: Move the history selection.
///
/// Details:
/// - Up/Down (and `k`/`j`) step one row; `PageUp`/`PageDown` step ten; Home/End jump.
/// - The selection never leaves the snapshot bounds.
pub(super) fn handle_history_key(ke: &KeyEvent, app: &mut AppState) {
    let len = app.history.entries().len();
    if len == 0 {
        app.history_state.select(None);
        return;
    }
    let cur = app.history_state.selected().unwrap_or(0);
    let next = match ke.code {
        KeyCode::Up | KeyCode::Char('k') => cur.saturating_sub(1),
        KeyCode::Down | KeyCode::Char('j') => (cur + 1).min(len - 1),
        KeyCode::PageUp => cur.saturating_sub(10),
        KeyCode::PageDown => (cur + 10).min(len - 1),
        KeyCode::Home => 0,
        KeyCode::End => len - 1,
        _ => return,
    };
    app.history_state.select(Some(next));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::{RefreshReason, RefreshTicket};
    use crate::state::{EntryId, HistoryEntry};
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn app_with_rows(n: i64) -> AppState {
        let mut app = crate::test_utils::new_app();
        let ticket = app.history.begin_refresh(RefreshReason::Startup);
        assert_eq!(ticket, RefreshTicket(0));
        let rows = (0..n)
            .map(|i| HistoryEntry {
                id: EntryId::Number(i),
                product_name: format!("p{i}"),
                sentiment: None,
                key_points: None,
                review_text: None,
                confidence: None,
                created_at: None,
            })
            .collect();
        let _ = app.history.apply(ticket, Ok(rows));
        app.clamp_history_selection();
        app
    }

    #[test]
    /// What: Navigation stays inside the list.
    fn selection_is_clamped() {
        let mut app = app_with_rows(3);
        handle_history_key(&key(KeyCode::Up), &mut app);
        assert_eq!(app.history_state.selected(), Some(0));
        handle_history_key(&key(KeyCode::PageDown), &mut app);
        assert_eq!(app.history_state.selected(), Some(2));
        handle_history_key(&key(KeyCode::Down), &mut app);
        assert_eq!(app.history_state.selected(), Some(2));
        handle_history_key(&key(KeyCode::Home), &mut app);
        assert_eq!(app.history_state.selected(), Some(0));
    }

    #[test]
    /// What: An empty snapshot has no selection.
    fn empty_history_has_no_selection() {
        let mut app = crate::test_utils::new_app();
        handle_history_key(&key(KeyCode::Down), &mut app);
        assert_eq!(app.history_state.selected(), None);
    }
}
