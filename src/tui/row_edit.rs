use crate::model::Task;
use crate::util::unicode;

/// Transient edit state for one task row.
///
/// The controller exists only while its row is being edited: creating it is
/// the "start editing" transition, dropping it without a commit is "cancel"
/// (the draft is discarded and the committed title stays visible). It holds
/// only the task id, never a reference into the store, so the task can be
/// toggled or removed underneath without invalidating the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowEdit {
    /// Id of the task whose title is being edited
    pub task_id: u64,
    draft: String,
    /// Byte offset into `draft`, always on a grapheme boundary
    cursor: usize,
}

impl RowEdit {
    /// Start editing: the draft begins as the committed title, cursor at
    /// the end.
    pub fn begin(task: &Task) -> Self {
        RowEdit {
            task_id: task.id,
            draft: task.title.clone(),
            cursor: task.title.len(),
        }
    }

    /// The uncommitted draft title
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Cursor position as a display column within the draft
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.draft, self.cursor)
    }

    pub fn insert(&mut self, c: char) {
        self.draft.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.draft, self.cursor) {
            self.draft.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    /// Kill to start of line (Ctrl+U)
    pub fn kill_to_start(&mut self) {
        self.draft.drain(..self.cursor);
        self.cursor = 0;
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.draft, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.draft, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.draft.len();
    }

    /// Consume the controller on submit, yielding the draft for commit
    pub fn into_draft(self) -> String {
        self.draft
    }
}
