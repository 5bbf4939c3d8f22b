use chrono::Local;

use crate::model::Task;

/// Rejection reasons for [`TaskStore::add`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddError {
    #[error("task title is empty")]
    EmptyTitle,
    #[error("task \"{0}\" already registered, duplicate names are not allowed")]
    DuplicateTitle(String),
}

/// Exclusive owner of the ordered task collection.
///
/// Ids come from a counter seeded with the creation timestamp in
/// milliseconds, so they are pairwise distinct within a store and roughly
/// reflect creation time across runs.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
    revision: u64,
}

impl TaskStore {
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: Local::now().timestamp_millis().max(1) as u64,
            revision: 0,
        }
    }

    /// The current ordered collection
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Bumped on every successful mutation. Observers can compare revisions
    /// instead of collections to detect change.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task and return its id. Empty titles and titles that
    /// exactly match an existing task are rejected without touching the
    /// collection.
    pub fn add(&mut self, title: &str) -> Result<u64, AddError> {
        if title.is_empty() {
            return Err(AddError::EmptyTitle);
        }
        if self.tasks.iter().any(|t| t.title == title) {
            return Err(AddError::DuplicateTitle(title.to_string()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, title.to_string()));
        self.revision += 1;
        Ok(id)
    }

    /// Flip a task's completion flag. Returns false, changing nothing,
    /// when the id is unknown.
    pub fn toggle_done(&mut self, id: u64) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.done = !task.done;
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Replace a task's title, leaving its completion flag untouched.
    /// No validation happens here; callers decide what to submit.
    pub fn edit_title(&mut self, id: u64, new_title: &str) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = new_title.to_string();
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    /// Remove a task, preserving the relative order of the remainder
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.revision += 1;
            true
        } else {
            false
        }
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store_with(titles: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for title in titles {
            store.add(title).unwrap();
        }
        store
    }

    #[test]
    fn test_add_appends_in_order() {
        let store = store_with(&["first", "second", "third"]);
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
        assert!(store.tasks().iter().all(|t| !t.done));
    }

    #[test]
    fn test_add_ids_pairwise_distinct() {
        let mut store = TaskStore::new();
        let mut ids = Vec::new();
        for i in 0..100 {
            ids.push(store.add(&format!("task {}", i)).unwrap());
        }
        let mut deduped = ids.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn test_add_empty_title_rejected() {
        let mut store = store_with(&["one"]);
        let rev = store.revision();
        assert_eq!(store.add(""), Err(AddError::EmptyTitle));
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_add_duplicate_title_rejected() {
        let mut store = store_with(&["buy milk"]);
        let rev = store.revision();
        assert_eq!(
            store.add("buy milk"),
            Err(AddError::DuplicateTitle("buy milk".to_string()))
        );
        assert_eq!(store.len(), 1);
        assert_eq!(store.revision(), rev);
        // A different title is fine, including one differing only in case
        assert!(store.add("Buy milk").is_ok());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_toggle_done_is_own_inverse() {
        let mut store = store_with(&["a", "b", "c"]);
        let id = store.tasks()[1].id;
        let before = store.tasks().to_vec();

        assert!(store.toggle_done(id));
        assert!(store.get(id).unwrap().done);
        // Other tasks untouched
        assert_eq!(store.tasks()[0], before[0]);
        assert_eq!(store.tasks()[2], before[2]);

        assert!(store.toggle_done(id));
        assert_eq!(store.tasks().to_vec(), before);
    }

    #[test]
    fn test_toggle_done_unknown_id_noop() {
        let mut store = store_with(&["a"]);
        let rev = store.revision();
        assert!(!store.toggle_done(u64::MAX));
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_edit_title_changes_only_title() {
        let mut store = store_with(&["a", "b"]);
        let id = store.tasks()[0].id;
        store.toggle_done(id);
        let other = store.tasks()[1].clone();

        assert!(store.edit_title(id, "renamed"));
        let task = store.get(id).unwrap();
        assert_eq!(task.title, "renamed");
        assert_eq!(task.id, id);
        assert!(task.done);
        assert_eq!(store.tasks()[1], other);
    }

    #[test]
    fn test_edit_title_unknown_id_noop() {
        let mut store = store_with(&["a"]);
        let rev = store.revision();
        assert!(!store.edit_title(u64::MAX, "nope"));
        assert_eq!(store.tasks()[0].title, "a");
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut store = store_with(&["a", "b", "c"]);
        let id = store.tasks()[1].id;

        assert!(store.remove(id));
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_unknown_id_noop() {
        let mut store = store_with(&["a", "b"]);
        let rev = store.revision();
        assert!(!store.remove(u64::MAX));
        assert_eq!(store.len(), 2);
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn test_revision_bumps_on_every_mutation() {
        let mut store = TaskStore::new();
        assert_eq!(store.revision(), 0);
        let id = store.add("a").unwrap();
        assert_eq!(store.revision(), 1);
        store.toggle_done(id);
        assert_eq!(store.revision(), 2);
        store.edit_title(id, "b");
        assert_eq!(store.revision(), 3);
        store.remove(id);
        assert_eq!(store.revision(), 4);
    }

    #[test]
    fn test_full_lifecycle() {
        let mut store = TaskStore::new();
        let id = store.add("Buy milk").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks()[0].title, "Buy milk");
        assert!(!store.tasks()[0].done);

        store.toggle_done(id);
        assert!(store.get(id).unwrap().done);

        store.edit_title(id, "Buy almond milk");
        assert_eq!(store.get(id).unwrap().title, "Buy almond milk");
        assert!(store.get(id).unwrap().done);

        store.remove(id);
        assert!(store.is_empty());
    }
}
