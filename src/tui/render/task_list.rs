use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Render the task list: one row per task, selected row highlighted,
/// done tasks green with a crossed-out title. A row being edited shows
/// its draft with the terminal cursor in place.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let theme = app.theme.clone();
    let bg = theme.background;
    let width = area.width as usize;
    let height = area.height as usize;

    if app.store.is_empty() {
        let line = Line::from(Span::styled(
            "  no tasks \u{2014} press a to add one",
            Style::default().fg(theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the selection inside the visible window
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    }
    if height > 0 && app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut edit_cursor: Option<(u16, u16)> = None;

    for (row, idx) in (app.scroll_offset..app.store.len()).take(height).enumerate() {
        let task = &app.store.tasks()[idx];
        let selected = idx == app.cursor && app.mode != Mode::Input;
        let row_bg = if selected { theme.selection_bg } else { bg };

        let marker = if task.done {
            Span::styled(theme.marker_done, Style::default().fg(theme.done).bg(row_bg))
        } else {
            Span::styled(theme.marker_todo, Style::default().fg(theme.text).bg(row_bg))
        };
        let marker_width = unicode::display_width(if task.done {
            theme.marker_done
        } else {
            theme.marker_todo
        });

        // " " + marker + " " + title, padded to the full row width
        let title_budget = width.saturating_sub(marker_width + 2);
        let edit_for_row = app
            .row_edit
            .as_ref()
            .filter(|edit| app.mode == Mode::EditRow && edit.task_id == task.id);

        let title_span = if let Some(edit) = edit_for_row {
            let draft = unicode::truncate_to_width(edit.draft(), title_budget);
            let col = edit.cursor_col().min(title_budget.saturating_sub(1));
            edit_cursor = Some((
                area.x + 1 + marker_width as u16 + 1 + col as u16,
                area.y + row as u16,
            ));
            Span::styled(
                draft,
                Style::default().fg(theme.text_bright).bg(row_bg),
            )
        } else {
            let title = unicode::truncate_to_width(&task.title, title_budget);
            let style = if task.done {
                Style::default()
                    .fg(theme.done)
                    .bg(row_bg)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(theme.text).bg(row_bg)
            };
            Span::styled(title, style)
        };

        let used = 1 + marker_width + 1 + unicode::display_width(&title_span.content);
        let padding = width.saturating_sub(used);

        lines.push(Line::from(vec![
            Span::styled(" ", Style::default().bg(row_bg)),
            marker,
            Span::styled(" ", Style::default().bg(row_bg)),
            title_span,
            Span::styled(" ".repeat(padding), Style::default().bg(row_bg)),
        ]));
    }

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );

    // Focus side effect: the terminal cursor sits in the edited title
    if let Some(pos) = edit_cursor {
        frame.set_cursor_position(pos);
    }
}
