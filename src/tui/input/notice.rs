use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

/// Blocking informational popup; intercepts input until acknowledged
pub(super) fn handle_notice(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.dismiss_notice(),
        _ => {}
    }
}
