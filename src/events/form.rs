//! Key handling for the two form inputs.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::{AppState, Focus};

/// What: Count characters of `s`.
fn char_count(s: &str) -> usize {
    s.chars().count()
}

/// What: Convert a character index to a byte offset within `s`.
///
/// Details:
/// - Indices past the end map to `s.len()`.
fn byte_index(s: &str, caret: usize) -> usize {
    s.char_indices().nth(caret).map_or(s.len(), |(i, _)| i)
}

/// What: Apply one editing key to a text buffer with a character caret.
///
/// Inputs:
/// - `text`: Buffer to edit
/// - `caret`: Caret position in characters
/// - `ke`: Key event
///
/// Output:
/// - `true` when the key was an editing key, `false` when it was ignored.
///
/// Details:
/// - The caret is clamped to the buffer before use.
/// - Characters typed with Ctrl or Alt held are not inserted.
fn edit_text(text: &mut String, caret: &mut usize, ke: &KeyEvent) -> bool {
    *caret = (*caret).min(char_count(text));
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            text.insert(byte_index(text, *caret), ch);
            *caret += 1;
        }
        KeyCode::Backspace => {
            if *caret > 0 {
                *caret -= 1;
                text.remove(byte_index(text, *caret));
            }
        }
        KeyCode::Delete => {
            if *caret < char_count(text) {
                text.remove(byte_index(text, *caret));
            }
        }
        KeyCode::Left => *caret = caret.saturating_sub(1),
        KeyCode::Right => *caret = (*caret + 1).min(char_count(text)),
        KeyCode::Home => *caret = 0,
        KeyCode::End => *caret = char_count(text),
        _ => return false,
    }
    true
}

/// What: Keys for the product name field.
///
/// Details:
/// - Enter moves focus to the review text field.
pub(super) fn handle_product_key(ke: &KeyEvent, app: &mut AppState) {
    if ke.code == KeyCode::Enter {
        app.focus = Focus::ReviewText;
        return;
    }
    edit_text(&mut app.product_name, &mut app.product_caret, ke);
}

/// What: Keys for the review text field.
///
/// Details:
/// - Enter inserts a line break; the review is multi-line.
pub(super) fn handle_review_key(ke: &KeyEvent, app: &mut AppState) {
    if ke.code == KeyCode::Enter {
        let at = byte_index(&app.review_text, app.review_caret);
        app.review_text.insert(at, '\n');
        app.review_caret = app.review_caret.min(char_count(&app.review_text)) + 1;
        return;
    }
    edit_text(&mut app.review_text, &mut app.review_caret, ke);
}
