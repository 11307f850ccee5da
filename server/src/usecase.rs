//! Todo use cases.
//!
//! # Responsibility
//! - Validate caller input and decide whether an operation is allowed.
//! - Orchestrate store calls and attach an `ErrorKind` to every failure.
//!
//! # Invariants
//! - Titles are validated trimmed, non-empty and at most `MAX_TITLE_CHARS`
//!   long. Validation sees the caller's title; any encoding is applied to
//!   the accepted title afterwards.
//! - A lookup that finds nothing is `NotFound`; a lookup that fails is
//!   `Internal`.

use tracing::{error, info, warn};

use crate::domain::{Todo, TodoId, MAX_TITLE_CHARS};
use crate::error::{AppError, AppResult};
use crate::store::{StoreError, TodoStore};

/// Business operations exposed to the transport layer.
pub trait TodoUseCase: Send + Sync {
    fn get_todos(&self) -> AppResult<Vec<Todo>>;
    fn get_todo(&self, id: TodoId) -> AppResult<Todo>;
    /// Validates the raw `title`, then stores `encode` of its trimmed form.
    fn create_todo_encoded(&self, title: &str, encode: fn(&str) -> String) -> AppResult<Todo>;
    /// Sets the completion flag to `done`. Reopening is allowed.
    fn update_todo(&self, id: TodoId, done: bool) -> AppResult<Todo>;
    fn delete_todo(&self, id: TodoId) -> AppResult<()>;

    fn create_todo(&self, title: &str) -> AppResult<Todo> {
        self.create_todo_encoded(title, |title| title.to_owned())
    }

    fn complete_todo(&self, id: TodoId) -> AppResult<Todo> {
        self.update_todo(id, true)
    }
}

pub struct TodoService<S> {
    store: S,
}

impl<S: TodoStore> TodoService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn lookup(&self, id: TodoId) -> AppResult<Todo> {
        match self.store.find_by_id(id) {
            Ok(Some(todo)) => Ok(todo),
            Ok(None) => {
                warn!(id, "todo not found");
                Err(AppError::not_found(format!("todo {id} not found")))
            }
            Err(err) => Err(internal("failed to look up todo", err)),
        }
    }
}

impl<S: TodoStore> TodoUseCase for TodoService<S> {
    fn get_todos(&self) -> AppResult<Vec<Todo>> {
        self.store
            .find_all()
            .map_err(|err| internal("failed to fetch todos", err))
    }

    fn get_todo(&self, id: TodoId) -> AppResult<Todo> {
        self.lookup(id)
    }

    fn create_todo_encoded(&self, title: &str, encode: fn(&str) -> String) -> AppResult<Todo> {
        let title = validate_title(title)?;
        let mut todo = Todo::new(encode(title));
        self.store
            .create(&mut todo)
            .map_err(|err| internal("failed to create todo", err))?;
        info!(id = todo.id, "todo created");
        Ok(todo)
    }

    fn update_todo(&self, id: TodoId, done: bool) -> AppResult<Todo> {
        let mut todo = self.lookup(id)?;
        todo.done = done;
        self.store
            .update(&todo)
            .map_err(|err| internal("failed to update todo", err))?;
        info!(id, done, "todo status updated");
        Ok(todo)
    }

    fn delete_todo(&self, id: TodoId) -> AppResult<()> {
        let todo = self.lookup(id)?;
        self.store
            .delete(&todo)
            .map_err(|err| internal("failed to delete todo", err))?;
        info!(id, "todo deleted");
        Ok(())
    }
}

/// Checks a raw title and returns its trimmed form.
fn validate_title(title: &str) -> AppResult<&str> {
    if title.is_empty() {
        return Err(AppError::invalid_input("title is required"));
    }
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::invalid_input(
            "title must contain visible characters",
        ));
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::invalid_input(format!(
            "title must be at most {MAX_TITLE_CHARS} characters"
        )));
    }
    Ok(trimmed)
}

fn internal(message: &'static str, err: StoreError) -> AppError {
    error!(error = %err, "{message}");
    AppError::internal(message, err)
}
