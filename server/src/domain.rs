//! The todo entity.
//!
//! # Invariants
//! - `id` is assigned by the store on creation and never changes afterwards.
//!   An unpersisted todo carries `id == 0`.
//! - `title` is trimmed and non-empty once it has passed through the use-case
//!   layer.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier of a todo.
pub type TodoId = i64;

/// Longest accepted title, counted in Unicode scalar values.
pub const MAX_TITLE_CHARS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub done: bool,
}

impl Todo {
    /// Builds an open todo that has not been persisted yet.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: title.into(),
            done: false,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            title: "Buy milk".to_string(),
            done: false,
        };
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":1,"title":"Buy milk","done":false}"#);
    }

    #[test]
    fn new_todo_is_open_and_unpersisted() {
        let todo = Todo::new("Walk dog");
        assert_eq!(todo.title, "Walk dog");
        assert!(!todo.done);
        assert!(!todo.is_persisted());
    }
}
