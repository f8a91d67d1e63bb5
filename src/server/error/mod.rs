//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into HTTP responses. The `AppError` enum is the single error type
//! returned by services and controllers, and its `IntoResponse` implementation is the
//! one place where failures are logged and turned into status codes.
//!
//! Lookups that match no rows are not errors; see `CourseLookup::NotFound`.

pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::config::ConfigError};

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM that has not been tagged with context.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Store failure tagged with a description of the operation that failed.
    ///
    /// Results in 500 Internal Server Error. The context is returned to the client,
    /// the underlying database error is only logged.
    ///
    /// # Fields
    /// - `context` - Human-readable description of the failed operation
    /// - `source` - The underlying database error
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: sea_orm::DbErr,
    },

    /// Database connectivity probe failed.
    ///
    /// Raised by `HealthService::check_health`. Results in 503 Service Unavailable
    /// if it ever reaches a response.
    #[error("Database health check failed: {0}")]
    HealthCheck(#[source] sea_orm::DbErr),

    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Tags a store error with the operation that produced it.
    ///
    /// Untagged database errors become `Store`, already tagged errors have their
    /// context replaced, every other variant is returned unchanged.
    ///
    /// # Arguments
    /// - `context` - Description of the failed operation
    ///
    /// # Returns
    /// - `AppError` - The tagged error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        match self {
            Self::DbErr(source) | Self::Store { source, .. } => Self::Store {
                context: context.into(),
                source,
            },
            err => err,
        }
    }
}

/// Attaches operation context to a failed result before it reaches the error handler.
pub trait ErrorContext<T> {
    /// Tags the error, if any, with `context`. See `AppError::with_context`.
    fn context(self, context: impl Into<String>) -> Result<T, AppError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn context(self, context: impl Into<String>) -> Result<T, AppError> {
        self.map_err(|err| err.into().with_context(context))
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 500 Internal Server Error - For `Store`, with the operation context as the message
/// - 503 Service Unavailable - For `HealthCheck`
/// - 500 Internal Server Error - For all other error types, with a generic message
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Store { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto { error: context }),
                )
                    .into_response()
            }
            Self::HealthCheck(source) => {
                tracing::error!(error = %source, "Database health check failed");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: "Database unavailable".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
