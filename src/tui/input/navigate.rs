use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => {
            app.should_quit = true;
        }
        // Selection movement
        (KeyModifiers::NONE, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (KeyModifiers::NONE, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (KeyModifiers::NONE, KeyCode::Char('g') | KeyCode::Home) => {
            app.cursor = 0;
        }
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char('G'))
        | (KeyModifiers::NONE, KeyCode::End) => {
            app.cursor = app.store.len().saturating_sub(1);
        }
        // Toggle completion
        (KeyModifiers::NONE, KeyCode::Char(' ') | KeyCode::Enter) => app.toggle_selected(),
        // Focus the add bar
        (KeyModifiers::NONE, KeyCode::Char('a') | KeyCode::Char('i')) => {
            app.mode = Mode::Input;
        }
        // Inline title edit
        (KeyModifiers::NONE, KeyCode::Char('e')) => app.begin_row_edit(),
        // Remove (confirmation-gated)
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Backspace) => {
            app.request_remove_selected()
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.store.is_empty() {
        return;
    }
    let last = (app.store.len() - 1) as isize;
    app.cursor = (app.cursor as isize + delta).clamp(0, last) as usize;
}
