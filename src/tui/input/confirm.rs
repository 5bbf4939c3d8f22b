use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Yes/no confirmation popup. Only an explicit `y` (or Enter) runs the
/// registered action; everything that reads as "no" cancels it.
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Confirm: y or Enter
        (KeyModifiers::NONE, KeyCode::Char('y') | KeyCode::Enter) => app.resolve_confirm(true),
        // Cancel: n or Esc
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => app.resolve_confirm(false),
        _ => {}
    }
}
