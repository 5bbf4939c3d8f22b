mod add;
mod confirm;
mod edit;
mod navigate;
mod notice;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Input => add::handle_input(app, key),
        Mode::EditRow => edit::handle_edit(app, key),
        Mode::Confirm => confirm::handle_confirm(app, key),
        Mode::Notice => notice::handle_notice(app, key),
    }
}
