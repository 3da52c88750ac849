//! In-memory task collection.
//!
//! The store is the single source of truth for the session's tasks.
//! Calendar projection and notification derivation are pure read-side
//! views over it; the reminder scanner is the only component that
//! mutates tasks outside direct user edits.
//!
//! Insertion order is preserved so hydrated data renders in the same
//! order it was saved. The store carries no interior locking: the
//! engine follows a single-threaded, event-driven model and the
//! session context owns the store.

use serde::{Deserialize, Serialize};

use super::{Task, TaskId, TaskStatus};

// ============================================================================
// Status Counts
// ============================================================================

/// Count of tasks by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub completed: usize,
    pub missed: usize,
}

impl StatusCounts {
    /// Total number of tasks counted.
    #[must_use]
    pub fn total(&self) -> usize {
        self.pending + self.completed + self.missed
    }
}

// ============================================================================
// Task Store
// ============================================================================

/// Insertion-ordered, in-memory collection of task records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from an existing task list (session hydration).
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Number of tasks in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the store holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Iterate the tasks in insertion order.
    pub fn tasks(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    /// Iterate the tasks mutably (reminder scanning).
    pub fn tasks_mut(&mut self) -> impl Iterator<Item = &mut Task> {
        self.tasks.iter_mut()
    }

    /// Borrow the tasks as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Get a mutable task by id.
    pub fn get_mut(&mut self, id: &TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| &t.id == id)
    }

    /// Append a task to the collection.
    pub fn add(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Replace the task with the same id.
    ///
    /// Returns `false` (and changes nothing) when no task has that id.
    pub fn update(&mut self, task: Task) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task.id) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => false,
        }
    }

    /// Remove a task by id, returning it if present.
    pub fn remove(&mut self, id: &TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|t| &t.id == id)?;
        Some(self.tasks.remove(index))
    }

    /// Replace the whole collection (session hydration).
    pub fn replace_all(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Drop every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Tasks whose title contains `query`, case-insensitively.
    ///
    /// An empty query matches everything, mirroring the search box.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Task> {
        let needle = query.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Count tasks by status.
    #[must_use]
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for task in &self.tasks {
            match task.status {
                TaskStatus::Pending => counts.pending += 1,
                TaskStatus::Completed => counts.completed += 1,
                TaskStatus::Missed => counts.missed += 1,
            }
        }
        counts
    }

    /// Clone the collection into an owned `Vec` (snapshot for saving).
    #[must_use]
    pub fn to_vec(&self) -> Vec<Task> {
        self.tasks.clone()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::DayOfWeek;

    fn sample(title: &str, day: DayOfWeek) -> Task {
        Task::new(title, "9:00am - 10:00am", day)
    }

    #[test]
    fn test_add_and_get() {
        let mut store = TaskStore::new();
        let task = sample("Math Study", DayOfWeek::Mon);
        let id = task.id.clone();
        store.add(task);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().title, "Math Study");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = TaskStore::new();
        store.add(sample("first", DayOfWeek::Mon));
        store.add(sample("second", DayOfWeek::Tue));
        store.add(sample("third", DayOfWeek::Wed));

        let titles: Vec<&str> = store.tasks().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut store = TaskStore::new();
        let task = sample("draft", DayOfWeek::Fri);
        let id = task.id.clone();
        store.add(task);

        let mut edited = store.get(&id).unwrap().clone();
        edited.title = "final".to_string();
        edited.status = TaskStatus::Completed;
        assert!(store.update(edited));

        let stored = store.get(&id).unwrap();
        assert_eq!(stored.title, "final");
        assert_eq!(stored.status, TaskStatus::Completed);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(sample("kept", DayOfWeek::Mon));

        let stray = sample("stray", DayOfWeek::Tue);
        assert!(!store.update(stray));
        assert_eq!(store.len(), 1);
        assert_eq!(store.tasks().next().unwrap().title, "kept");
    }

    #[test]
    fn test_remove_returns_task() {
        let mut store = TaskStore::new();
        let task = sample("gone", DayOfWeek::Sat);
        let id = task.id.clone();
        store.add(task);
        store.add(sample("stays", DayOfWeek::Sun));

        let removed = store.remove(&id).unwrap();
        assert_eq!(removed.title, "gone");
        assert_eq!(store.len(), 1);
        assert!(store.get(&id).is_none());
    }

    #[test]
    fn test_remove_missing_returns_none() {
        let mut store = TaskStore::new();
        assert!(store.remove(&TaskId::from_raw("nope")).is_none());
    }

    #[test]
    fn test_search_case_insensitive() {
        let mut store = TaskStore::new();
        store.add(sample("DSA Practice", DayOfWeek::Wed));
        store.add(sample("Gym Workout", DayOfWeek::Tue));

        let hits = store.search("dsa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "DSA Practice");
    }

    #[test]
    fn test_search_empty_query_matches_all() {
        let mut store = TaskStore::new();
        store.add(sample("a", DayOfWeek::Mon));
        store.add(sample("b", DayOfWeek::Tue));
        assert_eq!(store.search("").len(), 2);
    }

    #[test]
    fn test_status_counts() {
        let mut store = TaskStore::new();
        store.add(sample("p1", DayOfWeek::Mon));
        store.add(sample("p2", DayOfWeek::Tue));
        store.add(sample("c", DayOfWeek::Wed).with_status(TaskStatus::Completed));
        store.add(sample("m", DayOfWeek::Thu).with_status(TaskStatus::Missed));

        let counts = store.status_counts();
        assert_eq!(counts.pending, 2);
        assert_eq!(counts.completed, 1);
        assert_eq!(counts.missed, 1);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn test_replace_all_and_clear() {
        let mut store = TaskStore::new();
        store.add(sample("old", DayOfWeek::Mon));

        store.replace_all(vec![
            sample("new1", DayOfWeek::Tue),
            sample("new2", DayOfWeek::Wed),
        ]);
        assert_eq!(store.len(), 2);
        assert!(store.search("old").is_empty());

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_serde_transparent_list() {
        let mut store = TaskStore::new();
        store.add(sample("only", DayOfWeek::Mon));

        let json = serde_json::to_string(&store).unwrap();
        assert!(json.starts_with('['));

        let back: TaskStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 1);
    }
}
