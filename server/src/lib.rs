//! Todo REST service.
//!
//! # Overview
//! Layers, leaves first: `domain` (the entity), `store` (persistence
//! gateway), `usecase` (validation and error classification), `api` (HTTP
//! translation). The binary wires them together with `config` and
//! `telemetry`.

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
mod middleware;
pub mod sanitize;
pub mod store;
pub mod telemetry;
pub mod usecase;

pub use api::{app, run, AppState, ErrorBody};
pub use config::{LogFormat, ServerConfig};
pub use domain::{Todo, TodoId, MAX_TITLE_CHARS};
pub use error::{AppError, AppResult, ErrorKind};
pub use middleware::REQUEST_ID_HEADER;
pub use store::{SqliteStore, StoreError, TodoStore};
pub use usecase::{TodoService, TodoUseCase};
