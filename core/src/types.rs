//! Domain DTOs for the todo service.
//!
//! # Design
//! The wire schema is shared between the store and the HTTP adapter: the
//! store returns `Todo` values and consumes `UpdateTodo` patches directly,
//! so there is no separate internal record type to drift from the JSON
//! surface.

use serde::{Deserialize, Serialize};

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub task: String,
    pub completed: bool,
}

/// Request payload for creating a new todo.
///
/// `task` defaults to the empty string when the field is absent, so a
/// missing task and an explicitly empty one take the same validation path
/// instead of being rejected during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub task: String,
}

/// Request payload for partially updating an existing todo. Only the fields
/// present in the JSON are applied; omitted fields remain unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTodo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}
