//! Central `AppState` container.

use ratatui::widgets::ListState;

use crate::logic::{HistorySync, SubmissionMachine};
use crate::state::modal::Modal;
use crate::state::types::Focus;

/// Application state owned by the event loop.
///
/// The three mutable slots of the workflow are held by separate owners:
/// `submission` (in-flight flag and current result) and `history` (the
/// authoritative snapshot). Only the event loop mutates them.
#[derive(Debug)]
pub struct AppState {
    /// Product name input.
    pub product_name: String,
    /// Caret position (in characters) within `product_name`.
    pub product_caret: usize,
    /// Review text input; may contain newlines.
    pub review_text: String,
    /// Caret position (in characters) within `review_text`.
    pub review_caret: usize,
    /// Which pane receives key input.
    pub focus: Focus,
    /// Submission lifecycle and the current result slot.
    pub submission: SubmissionMachine,
    /// Authoritative history snapshot.
    pub history: HistorySync,
    /// Selection state of the history list.
    pub history_state: ListState,
    /// Active modal dialog, if any.
    pub modal: Modal,
    /// Service base URL, shown in the footer.
    pub base_url: String,
    /// Animation frame counter advanced by ticks while a request is pending.
    pub spinner_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            product_caret: 0,
            review_text: String::new(),
            review_caret: 0,
            focus: Focus::default(),
            submission: SubmissionMachine::new(),
            history: HistorySync::new(),
            history_state: ListState::default(),
            modal: Modal::None,
            base_url: crate::sources::DEFAULT_BASE_URL.to_string(),
            spinner_frame: 0,
        }
    }
}

impl AppState {
    /// What: Empty both form fields and reset their carets.
    pub fn clear_form(&mut self) {
        self.product_name.clear();
        self.product_caret = 0;
        self.review_text.clear();
        self.review_caret = 0;
    }

    /// What: Keep the history selection within the current snapshot.
    ///
    /// Details:
    /// - Selects the first row when nothing is selected and rows exist; clears
    ///   the selection when the snapshot is empty.
    pub fn clamp_history_selection(&mut self) {
        let len = self.history.entries().len();
        if len == 0 {
            self.history_state.select(None);
            return;
        }
        let sel = self.history_state.selected().unwrap_or(0).min(len - 1);
        self.history_state.select(Some(sel));
    }
}
