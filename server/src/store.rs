//! Persistence gateway for todos.
//!
//! # Responsibility
//! - Define the storage contract consumed by the use-case layer.
//! - Keep SQL details inside the SQLite implementation.
//!
//! # Invariants
//! - `find_by_id` reports a missing row as `Ok(None)`, never as an error.
//! - Errors are raw storage failures; no domain meaning is attached here.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{Todo, TodoId};

const CREATE_TODOS_TABLE: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    done INTEGER NOT NULL DEFAULT 0
);";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("store connection lock poisoned")]
    Poisoned,
}

/// Storage contract for todo records.
pub trait TodoStore: Send + Sync {
    fn find_all(&self) -> StoreResult<Vec<Todo>>;
    fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>>;
    /// Persists a new record and writes the assigned id back into `todo`.
    fn create(&self, todo: &mut Todo) -> StoreResult<()>;
    fn update(&self, todo: &Todo) -> StoreResult<()>;
    fn delete(&self, todo: &Todo) -> StoreResult<()>;
}

impl<S: TodoStore + ?Sized> TodoStore for Arc<S> {
    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        (**self).find_all()
    }

    fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        (**self).find_by_id(id)
    }

    fn create(&self, todo: &mut Todo) -> StoreResult<()> {
        (**self).create(todo)
    }

    fn update(&self, todo: &Todo) -> StoreResult<()> {
        (**self).update(todo)
    }

    fn delete(&self, todo: &Todo) -> StoreResult<()> {
        (**self).delete(todo)
    }
}

/// SQLite-backed store. The single connection is serialized behind a mutex.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Opens (or creates) a file-backed database and ensures the schema exists.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened todo database");
        Self::bootstrap(conn)
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Self::bootstrap(Connection::open_in_memory()?)
    }

    fn bootstrap(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(CREATE_TODOS_TABLE)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl TodoStore for SqliteStore {
    fn find_all(&self) -> StoreResult<Vec<Todo>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT id, title, done FROM todos ORDER BY id;")?;
        let todos = stmt
            .query_map([], parse_todo_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(todos)
    }

    fn find_by_id(&self, id: TodoId) -> StoreResult<Option<Todo>> {
        let conn = self.lock()?;
        let todo = conn
            .query_row(
                "SELECT id, title, done FROM todos WHERE id = ?1;",
                params![id],
                parse_todo_row,
            )
            .optional()?;
        Ok(todo)
    }

    fn create(&self, todo: &mut Todo) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO todos (title, done) VALUES (?1, ?2);",
            params![todo.title, todo.done],
        )?;
        todo.id = conn.last_insert_rowid();
        debug!(id = todo.id, "inserted todo row");
        Ok(())
    }

    fn update(&self, todo: &Todo) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute(
            "UPDATE todos SET title = ?1, done = ?2 WHERE id = ?3;",
            params![todo.title, todo.done, todo.id],
        )?;
        Ok(())
    }

    fn delete(&self, todo: &Todo) -> StoreResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM todos WHERE id = ?1;", params![todo.id])?;
        Ok(())
    }
}

fn parse_todo_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        done: row.get(2)?,
    })
}
