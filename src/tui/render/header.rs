use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render the header: app name on the left, task counter on the right,
/// with a separator rule underneath
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = app.store.len();
    let counter = format!("{} task{} ", count, if count == 1 { "" } else { "s" });
    let name = " tally";

    let name_width = name.chars().count();
    let counter_width = counter.chars().count();
    let padding = width.saturating_sub(name_width + counter_width);

    let title_line = Line::from(vec![
        Span::styled(
            name,
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ".repeat(padding), Style::default().bg(bg)),
        Span::styled(counter, Style::default().fg(app.theme.dim).bg(bg)),
    ]);
    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![title_line, separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
