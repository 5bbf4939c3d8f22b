use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): key hints for the current mode
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let hint = match app.mode {
        Mode::Navigate => "a add  e edit  space toggle  d remove  q quit",
        Mode::Input => "Enter add  Esc done",
        Mode::EditRow => "Enter save  Esc cancel",
        Mode::Confirm => "y yes  n no",
        Mode::Notice => "Enter dismiss",
    };

    let hint_width = hint.chars().count();
    let padding = width.saturating_sub(hint_width + 1);
    let line = Line::from(vec![
        Span::styled(" ".repeat(padding + 1), Style::default().bg(bg)),
        Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)),
    ]);

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}
