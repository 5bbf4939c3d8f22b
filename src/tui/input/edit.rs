use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Inline row edit: keys route to the selected row's edit controller.
/// Enter commits the draft through the store, Esc discards it.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            app.submit_row_edit();
            return;
        }
        KeyCode::Esc => {
            app.cancel_row_edit();
            return;
        }
        _ => {}
    }

    let Some(edit) = app.row_edit.as_mut() else {
        // Stale mode without a controller; fall back to the list
        app.mode = Mode::Navigate;
        return;
    };

    match (key.modifiers, key.code) {
        // Kill to start of line: Ctrl+U (macOS Cmd+Backspace sends ^U)
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => edit.kill_to_start(),
        // Jump to start / end of line
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => edit.move_home(),
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => edit.move_end(),
        (_, KeyCode::Home) => edit.move_home(),
        (_, KeyCode::End) => edit.move_end(),
        (KeyModifiers::NONE, KeyCode::Left) => edit.move_left(),
        (KeyModifiers::NONE, KeyCode::Right) => edit.move_right(),
        (KeyModifiers::NONE, KeyCode::Backspace) => edit.backspace(),
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => edit.insert(c),
        _ => {}
    }
}
