use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::cli::Cli;
use crate::model::Task;
use crate::store::{AddError, TaskStore};

use super::input;
use super::render;
use super::row_edit::RowEdit;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving the selection through the task list
    Navigate,
    /// The add bar has focus
    Input,
    /// A row title is being edited inline
    EditRow,
    /// A yes/no popup is waiting for a choice
    Confirm,
    /// A blocking informational popup is waiting to be acknowledged
    Notice,
}

/// The deferred effect behind a confirmation popup; runs only on "yes"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    RemoveTask { task_id: u64 },
}

#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub title: String,
    pub message: String,
    /// Mode to return to once acknowledged
    pub resume: Mode,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Selection index into the task list
    pub cursor: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Add-bar draft text
    pub input_buffer: String,
    /// Byte offset of the add-bar cursor
    pub input_cursor: usize,
    /// Inline edit controller for the selected row, if editing
    pub row_edit: Option<RowEdit>,
    pub confirm: Option<ConfirmState>,
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        App {
            store: TaskStore::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme,
            cursor: 0,
            scroll_offset: 0,
            input_buffer: String::new(),
            input_cursor: 0,
            row_edit: None,
            confirm: None,
            notice: None,
        }
    }

    /// The task under the selection cursor
    pub fn selected_task(&self) -> Option<&Task> {
        self.store.tasks().get(self.cursor)
    }

    /// Keep the cursor inside the collection after removals
    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.store.len().saturating_sub(1));
    }

    /// Submit the add bar. On success the bar clears for the next entry and
    /// the selection moves to the new task. An empty buffer is silently
    /// ignored; a duplicate title keeps the buffer and raises a notice so
    /// the user can amend it.
    pub fn submit_new_task(&mut self) {
        match self.store.add(&self.input_buffer) {
            Ok(_) => {
                self.input_buffer.clear();
                self.input_cursor = 0;
                self.cursor = self.store.len() - 1;
            }
            Err(AddError::EmptyTitle) => {}
            Err(AddError::DuplicateTitle(_)) => {
                self.notice = Some(Notice {
                    title: "Task already registered".to_string(),
                    message: "Duplicate task names are not allowed.".to_string(),
                    resume: self.mode,
                });
                self.mode = Mode::Notice;
            }
        }
    }

    /// Start an inline edit of the selected row's title
    pub fn begin_row_edit(&mut self) {
        if let Some(task) = self.selected_task() {
            self.row_edit = Some(RowEdit::begin(task));
            self.mode = Mode::EditRow;
        }
    }

    /// Discard the draft and leave edit mode
    pub fn cancel_row_edit(&mut self) {
        self.row_edit = None;
        self.mode = Mode::Navigate;
    }

    /// Commit the draft through the store and leave edit mode. A submit
    /// against a task that disappeared meanwhile is a silent no-op.
    pub fn submit_row_edit(&mut self) {
        if let Some(edit) = self.row_edit.take() {
            let task_id = edit.task_id;
            self.store.edit_title(task_id, &edit.into_draft());
        }
        self.mode = Mode::Navigate;
    }

    /// Flip the completion flag of the selected task
    pub fn toggle_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            let id = task.id;
            self.store.toggle_done(id);
        }
    }

    /// Ask for confirmation before removing the selected task
    pub fn request_remove_selected(&mut self) {
        if let Some(task) = self.selected_task() {
            self.confirm = Some(ConfirmState {
                title: "Remove task".to_string(),
                message: format!("Are you sure you want to remove \"{}\"?", task.title),
                action: ConfirmAction::RemoveTask { task_id: task.id },
            });
            self.mode = Mode::Confirm;
        }
    }

    /// Resolve the pending confirmation. Declining leaves the store
    /// untouched.
    pub fn resolve_confirm(&mut self, accepted: bool) {
        let state = self.confirm.take();
        self.mode = Mode::Navigate;
        if !accepted {
            return;
        }
        if let Some(state) = state {
            match state.action {
                ConfirmAction::RemoveTask { task_id } => {
                    self.store.remove(task_id);
                    self.clamp_cursor();
                }
            }
        }
    }

    /// Acknowledge the blocking notice and return to the interrupted mode
    pub fn dismiss_notice(&mut self) {
        if let Some(notice) = self.notice.take() {
            self.mode = notice.resume;
        }
    }
}

/// Run the TUI application
pub fn run(cli: &Cli) -> io::Result<()> {
    let mut app = App::new(Theme::new(cli.ascii));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
