use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Add-bar input: a single-line buffer with a grapheme-aware cursor.
/// Enter submits the buffer to the store, Esc returns focus to the list.
pub(super) fn handle_input(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => app.submit_new_task(),
        (_, KeyCode::Esc) => {
            app.mode = Mode::Navigate;
        }
        // Kill to start of line: Ctrl+U (macOS Cmd+Backspace sends ^U)
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_buffer.drain(..app.input_cursor);
            app.input_cursor = 0;
        }
        // Jump to start / end of line
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = 0;
        }
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => {
            app.input_cursor = app.input_buffer.len();
        }
        (_, KeyCode::Home) => {
            app.input_cursor = 0;
        }
        (_, KeyCode::End) => {
            app.input_cursor = app.input_buffer.len();
        }
        (KeyModifiers::NONE, KeyCode::Left) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = prev;
            }
        }
        (KeyModifiers::NONE, KeyCode::Right) => {
            if let Some(next) = unicode::next_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_cursor = next;
            }
        }
        (KeyModifiers::NONE, KeyCode::Backspace) => {
            if let Some(prev) = unicode::prev_grapheme_boundary(&app.input_buffer, app.input_cursor)
            {
                app.input_buffer.drain(prev..app.input_cursor);
                app.input_cursor = prev;
            }
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            app.input_buffer.insert(app.input_cursor, c);
            app.input_cursor += c.len_utf8();
        }
        _ => {}
    }
}
