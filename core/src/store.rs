//! The in-memory resource store.
//!
//! # Design
//! Records live in a `Vec` in insertion order; every lookup is a linear scan
//! over the collection. Mutating operations validate first and only then
//! touch the collection, so an `Err` never leaves a partial write behind.
//! The store holds no external resources and needs no teardown.

use crate::error::StoreError;
use crate::types::{Todo, UpdateTodo};

/// Insertion-ordered collection of todo records with store-assigned ids.
///
/// The store is a plain owned value; the server wraps one instance in a lock
/// and shares it, while tests construct isolated instances per case.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: u64,
}

impl TodoStore {
    /// Empty store; ids start at 1.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-populated with existing records. The id counter resumes
    /// above the largest seeded id. The caller supplies records with unique
    /// ids and non-empty tasks.
    pub fn seeded(todos: Vec<Todo>) -> Self {
        let next_id = todos.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { todos, next_id }
    }

    /// All records, insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    pub fn get(&self, id: u64) -> Result<Todo, StoreError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Append a new record with the next id and `completed = false`.
    ///
    /// Ids are never reused: the counter only moves forward, so a create
    /// after a delete cannot collide with a surviving record.
    pub fn create(&mut self, task: &str) -> Result<Todo, StoreError> {
        if task.is_empty() {
            return Err(StoreError::EmptyTask);
        }
        let todo = Todo {
            id: self.next_id,
            task: task.to_string(),
            completed: false,
        };
        self.next_id += 1;
        self.todos.push(todo.clone());
        Ok(todo)
    }

    /// Merge the `Some` fields of `patch` into the record and return the
    /// merged copy. The merge itself is not validated: a patch may set
    /// `task` to the empty string.
    pub fn update(&mut self, id: u64, patch: UpdateTodo) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::NotFound)?;
        if let Some(task) = patch.task {
            todo.task = task;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        Ok(todo.clone())
    }

    /// Remove the record permanently. A miss is detected by comparing the
    /// collection length before and after the removal pass.
    pub fn delete(&mut self, id: u64) -> Result<(), StoreError> {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        if self.todos.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    /// The matching subsequence, insertion order, no mutation.
    pub fn filter<P>(&self, predicate: P) -> Vec<Todo>
    where
        P: Fn(&Todo) -> bool,
    {
        self.todos.iter().filter(|t| predicate(t)).cloned().collect()
    }

    pub fn completed(&self) -> Vec<Todo> {
        self.filter(|t| t.completed)
    }

    pub fn active(&self) -> Vec<Todo> {
        self.filter(|t| !t.completed)
    }
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> TodoStore {
        TodoStore::seeded(vec![
            Todo {
                id: 1,
                task: "Learn".to_string(),
                completed: false,
            },
            Todo {
                id: 2,
                task: "Build".to_string(),
                completed: false,
            },
        ])
    }

    #[test]
    fn create_then_get_returns_task_with_completed_false() {
        let mut store = TodoStore::new();
        let created = store.create("Buy milk").unwrap();
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched.task, "Buy milk");
        assert!(!fetched.completed);
    }

    #[test]
    fn create_assigns_sequential_ids_from_one() {
        let mut store = TodoStore::new();
        assert_eq!(store.create("a").unwrap().id, 1);
        assert_eq!(store.create("b").unwrap().id, 2);
        assert_eq!(store.create("c").unwrap().id, 3);
    }

    #[test]
    fn create_empty_task_leaves_collection_unchanged() {
        let mut store = seeded();
        let err = store.create("").unwrap_err();
        assert_eq!(err, StoreError::EmptyTask);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn create_after_delete_does_not_reuse_ids() {
        let mut store = TodoStore::new();
        store.create("a").unwrap();
        let b = store.create("b").unwrap();
        store.delete(1).unwrap();

        // A size-derived id (len + 1) would re-issue id 2 here and collide
        // with the surviving record; the counter must keep moving forward.
        let c = store.create("c").unwrap();
        assert_eq!(c.id, 3);
        assert_ne!(c.id, b.id);
        let ids: Vec<u64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn get_missing_id_is_not_found() {
        let store = TodoStore::new();
        assert_eq!(store.get(1).unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn update_completed_only_leaves_task_unchanged() {
        let mut store = seeded();
        let updated = store
            .update(
                1,
                UpdateTodo {
                    task: None,
                    completed: Some(true),
                },
            )
            .unwrap();
        assert_eq!(updated.task, "Learn");
        assert!(updated.completed);
    }

    #[test]
    fn update_task_only_leaves_completed_unchanged() {
        let mut store = seeded();
        store
            .update(
                2,
                UpdateTodo {
                    task: None,
                    completed: Some(true),
                },
            )
            .unwrap();
        let updated = store
            .update(
                2,
                UpdateTodo {
                    task: Some("Rebuild".to_string()),
                    completed: None,
                },
            )
            .unwrap();
        assert_eq!(updated.task, "Rebuild");
        assert!(updated.completed);
    }

    #[test]
    fn update_missing_id_is_not_found() {
        let mut store = TodoStore::new();
        let err = store.update(42, UpdateTodo::default()).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn update_accepts_empty_task() {
        let mut store = seeded();
        let updated = store
            .update(
                1,
                UpdateTodo {
                    task: Some(String::new()),
                    completed: None,
                },
            )
            .unwrap();
        assert_eq!(updated.task, "");
    }

    #[test]
    fn delete_then_get_is_not_found() {
        let mut store = seeded();
        store.delete(1).unwrap();
        assert_eq!(store.get(1).unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn delete_missing_id_leaves_collection_unchanged() {
        let mut store = seeded();
        let err = store.delete(42).unwrap_err();
        assert_eq!(err, StoreError::NotFound);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut store = TodoStore::new();
        store.create("first").unwrap();
        store.create("second").unwrap();
        store.create("third").unwrap();
        store.delete(2).unwrap();
        let tasks: Vec<String> = store.list().into_iter().map(|t| t.task).collect();
        assert_eq!(tasks, vec!["first", "third"]);
    }

    #[test]
    fn completed_and_active_partition_the_collection() {
        let mut store = seeded();
        store.create("Ship").unwrap();
        store
            .update(
                3,
                UpdateTodo {
                    task: None,
                    completed: Some(true),
                },
            )
            .unwrap();
        store.delete(2).unwrap();

        let mut partition = store.active();
        partition.extend(store.completed());
        partition.sort_by_key(|t| t.id);

        let mut all = store.list();
        all.sort_by_key(|t| t.id);
        assert_eq!(partition, all);
    }

    #[test]
    fn filter_applies_arbitrary_predicates() {
        let mut store = seeded();
        store.create("Ship").unwrap();
        let long_tasks = store.filter(|t| t.task.len() > 4);
        let tasks: Vec<String> = long_tasks.into_iter().map(|t| t.task).collect();
        assert_eq!(tasks, vec!["Learn", "Build"]);
    }

    #[test]
    fn seeded_resumes_id_counter_above_largest_id() {
        let mut store = seeded();
        let created = store.create("Ship").unwrap();
        assert_eq!(created.id, 3);
    }

    #[test]
    fn seeded_empty_starts_ids_at_one() {
        let mut store = TodoStore::seeded(Vec::new());
        assert_eq!(store.create("a").unwrap().id, 1);
    }
}
