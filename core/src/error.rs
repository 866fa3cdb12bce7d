//! Error types for the todo store.
//!
//! # Design
//! `NotFound` gets a dedicated variant because the dispatcher maps it to a
//! 404 distinct from validation failures. `EmptyTask` covers the single
//! required-field rule: a todo is never created without a task.

use std::fmt;

/// Errors returned by `TodoStore` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The create payload had a missing or empty `task`.
    EmptyTask,

    /// No record with the requested id exists.
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::EmptyTask => write!(f, "task is required"),
            StoreError::NotFound => write!(f, "todo not found"),
        }
    }
}

impl std::error::Error for StoreError {}
