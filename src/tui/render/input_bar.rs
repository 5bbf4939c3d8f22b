use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the add bar. When focused the terminal cursor sits in the bar;
/// otherwise a dim placeholder invites the user in.
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.mode == Mode::Input;

    let border_style = if focused {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Add a task ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if app.input_buffer.is_empty() && !focused {
        Line::from(Span::styled(
            "press a to add a task",
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(
            app.input_buffer.as_str(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);

    // Focus side effect: the terminal cursor follows the add-bar cursor
    if focused && inner.width > 0 {
        let col = unicode::byte_offset_to_display_col(&app.input_buffer, app.input_cursor);
        let col = (col as u16).min(inner.width.saturating_sub(1));
        frame.set_cursor_position((inner.x + col, inner.y));
    }
}
