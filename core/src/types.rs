//! Wire DTOs for the todo API.
//!
//! These mirror the server's JSON but are defined independently so the
//! client does not link against Axum or SQLite.

use serde::{Deserialize, Serialize};

pub type TodoId = i64;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

/// Request payload for creating a new todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTodo {
    pub title: String,
}

/// Request payload for `PUT /todos/{id}/done` when the caller wants a
/// specific status rather than plain completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpdateStatus {
    pub status: bool,
}
