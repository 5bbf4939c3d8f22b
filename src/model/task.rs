/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique within a store, assigned at creation
    pub id: u64,
    /// Title text as entered by the user
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(id: u64, title: String) -> Self {
        Task {
            id,
            title,
            done: false,
        }
    }
}
