//! End-to-end flows driven through the key handler, without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use tally::tui::app::{App, Mode};
use tally::tui::input::handle_key;
use tally::tui::theme::Theme;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        handle_key(app, key(KeyCode::Char(c)));
    }
}

fn titles(app: &App) -> Vec<String> {
    app.store.tasks().iter().map(|t| t.title.clone()).collect()
}

#[test]
fn test_add_toggle_edit_remove_scenario() {
    let mut app = App::new(Theme::default());

    // Add "Buy milk" through the add bar
    handle_key(&mut app, key(KeyCode::Char('a')));
    assert_eq!(app.mode, Mode::Input);
    type_text(&mut app, "Buy milk");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(titles(&app), vec!["Buy milk"]);
    assert!(!app.store.tasks()[0].done);

    // Back to the list, toggle completion
    handle_key(&mut app, key(KeyCode::Esc));
    assert_eq!(app.mode, Mode::Navigate);
    handle_key(&mut app, key(KeyCode::Char(' ')));
    assert!(app.store.tasks()[0].done);

    // Inline edit: "Buy milk" -> "Buy almond milk"
    handle_key(&mut app, key(KeyCode::Char('e')));
    assert_eq!(app.mode, Mode::EditRow);
    for _ in 0..4 {
        handle_key(&mut app, key(KeyCode::Backspace));
    }
    type_text(&mut app, "almond milk");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(titles(&app), vec!["Buy almond milk"]);
    assert!(app.store.tasks()[0].done, "edit must not touch the done flag");

    // Remove with confirmation
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.mode, Mode::Confirm);
    handle_key(&mut app, key(KeyCode::Char('y')));

    assert!(app.store.is_empty());
    assert_eq!(app.mode, Mode::Navigate);
}

#[test]
fn test_remove_declined_leaves_list_unchanged() {
    let mut app = App::new(Theme::default());
    handle_key(&mut app, key(KeyCode::Char('a')));
    type_text(&mut app, "keep me");
    handle_key(&mut app, key(KeyCode::Enter));
    handle_key(&mut app, key(KeyCode::Esc));

    let before = app.store.tasks().to_vec();
    let revision = app.store.revision();

    handle_key(&mut app, key(KeyCode::Char('d')));
    handle_key(&mut app, key(KeyCode::Char('n')));

    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.store.tasks().to_vec(), before);
    assert_eq!(app.store.revision(), revision);
}

#[test]
fn test_duplicate_add_shows_notice_and_keeps_buffer() {
    let mut app = App::new(Theme::default());
    handle_key(&mut app, key(KeyCode::Char('a')));
    type_text(&mut app, "laundry");
    handle_key(&mut app, key(KeyCode::Enter));

    // Second submit with the same title is rejected with a notice
    type_text(&mut app, "laundry");
    handle_key(&mut app, key(KeyCode::Enter));

    assert_eq!(app.mode, Mode::Notice);
    assert!(app.notice.is_some());
    assert_eq!(app.store.len(), 1);

    // While the notice is up, other keys are swallowed
    handle_key(&mut app, key(KeyCode::Char('d')));
    assert_eq!(app.mode, Mode::Notice);

    // Acknowledge: back in the add bar with the rejected title intact
    handle_key(&mut app, key(KeyCode::Enter));
    assert_eq!(app.mode, Mode::Input);
    assert_eq!(app.input_buffer, "laundry");
    assert_eq!(app.store.len(), 1);
}

#[test]
fn test_empty_submit_adds_nothing() {
    let mut app = App::new(Theme::default());
    handle_key(&mut app, key(KeyCode::Char('a')));
    handle_key(&mut app, key(KeyCode::Enter));
    assert!(app.store.is_empty());
    assert_eq!(app.mode, Mode::Input);
}

#[test]
fn test_edit_cancel_discards_draft() {
    let mut app = App::new(Theme::default());
    handle_key(&mut app, key(KeyCode::Char('a')));
    type_text(&mut app, "stable");
    handle_key(&mut app, key(KeyCode::Enter));
    handle_key(&mut app, key(KeyCode::Esc));

    handle_key(&mut app, key(KeyCode::Char('e')));
    type_text(&mut app, " scribble");
    handle_key(&mut app, key(KeyCode::Esc));

    assert_eq!(titles(&app), vec!["stable"]);
    assert_eq!(app.mode, Mode::Navigate);
    assert!(app.row_edit.is_none());
}

#[test]
fn test_navigation_selects_rows_in_order() {
    let mut app = App::new(Theme::default());
    handle_key(&mut app, key(KeyCode::Char('a')));
    for title in ["one", "two", "three"] {
        type_text(&mut app, title);
        handle_key(&mut app, key(KeyCode::Enter));
    }
    handle_key(&mut app, key(KeyCode::Esc));

    // Selection follows the last added task
    assert_eq!(app.cursor, 2);

    handle_key(&mut app, key(KeyCode::Char('g')));
    assert_eq!(app.cursor, 0);
    handle_key(&mut app, key(KeyCode::Char('j')));
    assert_eq!(app.cursor, 1);
    handle_key(&mut app, key(KeyCode::Char('j')));
    handle_key(&mut app, key(KeyCode::Char('j')));
    assert_eq!(app.cursor, 2, "cursor clamps at the last row");
    handle_key(&mut app, key(KeyCode::Char('k')));
    assert_eq!(app.cursor, 1);

    // Toggle the middle row only
    handle_key(&mut app, key(KeyCode::Char(' ')));
    let done: Vec<bool> = app.store.tasks().iter().map(|t| t.done).collect();
    assert_eq!(done, vec![false, true, false]);
}
