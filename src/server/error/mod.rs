//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every controller. Concern-specific
//! errors (`AuthError`, `ValidationError`) map their own responses; database unique
//! violations become 409 responses and everything else collapses into a generic 500.

pub mod auth;
pub mod config;
pub mod internal;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        validation::ValidationError,
    },
};

/// Message returned for every unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 400/401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request validation error, always a 400.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations become 409 Conflict, anything else is a 500.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected internal failure such as hashing or token signing.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found, 404 with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request, 400 with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Operation not permitted for the caller, 403 with the provided message.
    #[error("{0}")]
    Forbidden(String),

    /// Operation conflicts with existing data, 409 with the provided message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message, logged and never returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`, `ValidationErr`
/// - 403 Forbidden - `Forbidden`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict` and unique constraint violations
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => err.into_response(),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, Json(ErrorDto::new(msg))).into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new(msg))).into_response()
            }
            Self::Forbidden(msg) => (StatusCode::FORBIDDEN, Json(ErrorDto::new(msg))).into_response(),
            Self::Conflict(msg) => (StatusCode::CONFLICT, Json(ErrorDto::new(msg))).into_response(),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    duplicate_key_response(&detail)
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => InternalServerError(msg).into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds the 409 response for a unique constraint violation.
///
/// SQLite reports violations as `UNIQUE constraint failed: users.email, ...`; each
/// column after the table prefix becomes one entry in `errors`.
fn duplicate_key_response(detail: &str) -> Response {
    let fields = duplicate_key_fields(detail);

    (
        StatusCode::CONFLICT,
        Json(ErrorDto::with_errors(
            "Duplicate key violation",
            fields
                .iter()
                .map(|field| format!("User with field: {} already exists", field))
                .collect(),
        )),
    )
        .into_response()
}

pub(crate) fn duplicate_key_fields(detail: &str) -> Vec<String> {
    let columns = detail.rsplit(':').next().unwrap_or(detail);

    columns
        .split(',')
        .map(|column| column.trim())
        .filter(|column| !column.is_empty())
        .map(|column| column.rsplit('.').next().unwrap_or(column).to_string())
        .collect()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new(INTERNAL_ERROR_MESSAGE)),
        )
            .into_response()
    }
}
