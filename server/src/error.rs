//! Domain error taxonomy.
//!
//! # Design
//! Only the use-case layer constructs these values. The store reports raw
//! `StoreError`s and absent rows as `None`; the API layer turns an
//! `AppError` into a status code and never adds kinds of its own.

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type AppResult<T> = Result<T, AppError>;

/// The three kinds of failure a caller can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    Internal,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "INVALID_INPUT",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data failed validation.
    #[error("{message}")]
    InvalidInput { message: String },

    /// The referenced todo does not exist.
    #[error("{message}")]
    NotFound { message: String },

    /// Storage or encoding failure not attributable to the caller.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl AppError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        AppError::Internal {
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidInput { .. } => ErrorKind::InvalidInput,
            AppError::NotFound { .. } => ErrorKind::NotFound,
            AppError::Internal { .. } => ErrorKind::Internal,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::InvalidInput { message }
            | AppError::NotFound { message }
            | AppError::Internal { message, .. } => message,
        }
    }
}
