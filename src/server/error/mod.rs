//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error type returned by every handler. It wraps
//! the domain-specific errors and implements `IntoResponse`, producing an
//! `ErrorDto { message, stack? }` body. The `stack` field carries the debug
//! rendering of the error and is only emitted in development mode.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, internal::InternalError},
};

static EXPOSE_STACK: AtomicBool = AtomicBool::new(false);

/// Enables `stack` in error bodies. Called once at startup in development mode.
pub fn expose_stack(enabled: bool) {
    EXPOSE_STACK.store(enabled, Ordering::Relaxed);
}

pub(crate) fn stack_for<E: std::fmt::Debug>(err: &E) -> Option<String> {
    EXPOSE_STACK
        .load(Ordering::Relaxed)
        .then(|| format!("{:?}", err))
}

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403/500 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Bug-class failure such as a malformed stored value.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// Request collides with existing state. Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Request body could not be parsed. Results in 400 Bad Request.
    #[error(transparent)]
    JsonRejection(#[from] JsonRejection),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` and `JsonRejection`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            err @ Self::NotFound(_) => client_error(StatusCode::NOT_FOUND, err),
            err @ (Self::BadRequest(_) | Self::JsonRejection(_)) => {
                client_error(StatusCode::BAD_REQUEST, err)
            }
            err @ Self::Conflict(_) => client_error(StatusCode::CONFLICT, err),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn client_error(status: StatusCode, err: AppError) -> Response {
    let body = ErrorDto {
        message: err.to_string(),
        stack: stack_for(&err),
    };

    (status, Json(body)).into_response()
}

/// Wrapper type for converting any error into a 500 Internal Server Error response.
///
/// Logs the full error and returns a generic message to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display + std::fmt::Debug> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                message: "Внутренняя ошибка сервера".to_string(),
                stack: stack_for(&self.0),
            }),
        )
            .into_response()
    }
}
