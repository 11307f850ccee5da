//! HTTP transport for the todo use cases.
//!
//! # Design
//! Handlers decode path and body, call the use case on tokio's blocking pool
//! (the SQLite store is synchronous) and encode the result. Every failure is
//! an `AppError`; its kind alone decides the status code. Error responses
//! carry `{"error": "<message>"}`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info, warn, Span};

use crate::domain::{Todo, TodoId};
use crate::error::{AppError, AppResult, ErrorKind};
use crate::middleware::request_tracing;
use crate::sanitize::{escape_html, screen_title, SanitizeError};
use crate::usecase::TodoUseCase;

/// Shared handler state. Cheap to clone; holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    todos: Arc<dyn TodoUseCase>,
    sanitize: bool,
}

impl AppState {
    pub fn new(todos: impl TodoUseCase + 'static) -> Self {
        Self::from_shared(Arc::new(todos))
    }

    pub fn from_shared(todos: Arc<dyn TodoUseCase>) -> Self {
        Self {
            todos,
            sanitize: true,
        }
    }

    /// Toggles title screening in front of use-case validation.
    pub fn with_sanitize(mut self, enabled: bool) -> Self {
        self.sanitize = enabled;
        self
    }

    async fn call<T, F>(&self, op: F) -> AppResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn TodoUseCase) -> AppResult<T> + Send + 'static,
    {
        let todos = Arc::clone(&self.todos);
        let span = Span::current();
        tokio::task::spawn_blocking(move || span.in_scope(|| op(&*todos)))
            .await
            .map_err(|err| AppError::internal("request worker failed", err))?
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).delete(delete_todo))
        .route("/todos/{id}/done", put(update_status))
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(request_tracing))
        .with_state(state)
}

/// Serves until Ctrl-C is received, then drains in-flight requests.
pub async fn run(listener: TcpListener, state: AppState) -> Result<(), std::io::Error> {
    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = status_for(self.kind());
        debug!(
            kind = self.kind().as_str(),
            status = status.as_u16(),
            error = %self,
            "request failed"
        );
        let body = ErrorBody {
            error: self.message().to_owned(),
        };
        (status, Json(body)).into_response()
    }
}

async fn list_todos(State(state): State<AppState>) -> AppResult<Json<Vec<Todo>>> {
    let todos = state.call(|todos| todos.get_todos()).await?;
    Ok(Json(todos))
}

async fn get_todo(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let todo = state.call(move |todos| todos.get_todo(id)).await?;
    Ok(Json(todo))
}

async fn create_todo(
    State(state): State<AppState>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    let Json(input) = payload.map_err(|rejection| AppError::invalid_input(rejection.body_text()))?;
    let title = input.title;
    let todo = if state.sanitize {
        screen_title(&title).map_err(screening_error)?;
        state.call(move |todos| todos.create_todo_encoded(&title, escape_html)).await?
    } else {
        state.call(move |todos| todos.create_todo(&title)).await?
    };
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> AppResult<Json<Todo>> {
    let id = parse_id(&id)?;
    let todo = match parse_status(&body)? {
        Some(done) => state.call(move |todos| todos.update_todo(id, done)).await?,
        None => state.call(move |todos| todos.complete_todo(id)).await?,
    };
    Ok(Json(todo))
}

async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    state.call(move |todos| todos.delete_todo(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn screening_error(err: SanitizeError) -> AppError {
    if err.is_rejection() {
        AppError::invalid_input(err.to_string())
    } else {
        AppError::internal("title screening unavailable", err)
    }
}

async fn route_not_found() -> AppError {
    AppError::not_found("no such route")
}

async fn method_not_allowed() -> Response {
    let body = ErrorBody {
        error: "method not allowed".to_string(),
    };
    (StatusCode::METHOD_NOT_ALLOWED, Json(body)).into_response()
}

fn parse_id(raw: &str) -> AppResult<TodoId> {
    raw.parse::<TodoId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::invalid_input(format!("invalid todo id `{raw}`")))
}

/// An empty body means "mark done"; otherwise `{"status": bool}` is required.
fn parse_status(body: &[u8]) -> AppResult<Option<bool>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<UpdateStatusRequest>(body)
        .map(|req| Some(req.status))
        .map_err(|err| AppError::invalid_input(format!("invalid status body: {err}")))
}
