use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::render::popup_rect;
use crate::util::unicode;

/// Render the yes/no confirmation popup
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let state = match &app.confirm {
        Some(state) => state,
        None => return,
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let popup = popup_rect(50, 7, area);
    let message = unicode::truncate_to_width(&state.message, popup.width.saturating_sub(6) as usize);

    let lines = vec![
        Line::from(Span::styled(format!(" {}", state.title), header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(format!("  {}", message), text_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("y", dim_style),
            Span::styled(" yes   ", text_style),
            Span::styled("n", dim_style),
            Span::styled(" no", text_style),
        ]),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg));
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        popup,
    );
}
