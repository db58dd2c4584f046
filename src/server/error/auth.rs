use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::stack_for};

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header on a protected route.
    #[error("Missing bearer token")]
    MissingToken,

    /// Token is malformed or its signature does not verify.
    #[error("Invalid session token")]
    InvalidToken,

    /// Token verified but its `exp` is in the past.
    #[error("Session token expired")]
    ExpiredToken,

    /// Token refers to a user id that no longer exists.
    #[error("User {0} from session token not found in database")]
    UserNotInDatabase(i32),

    /// Caller is authenticated but lacks the capability for the action.
    ///
    /// # Fields
    /// - Id of the user that was denied
    /// - Client-facing reason
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Discord rejected the authorization code exchange.
    #[error("Failed to exchange Discord authorization code: {0}")]
    DiscordTokenExchange(String),

    /// Discord profile request failed or returned an unexpected body.
    #[error("Failed to fetch Discord profile: {0}")]
    DiscordProfile(#[from] reqwest::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `ExpiredToken` / `UserNotInDatabase` → 401
/// - `AccessDenied` → 403 with the denial reason
/// - Discord failures → 500 with a generic login failure message
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let stack = stack_for(&self);
        let (status, message) = match &self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "Требуется авторизация".to_string()),
            Self::InvalidToken | Self::ExpiredToken | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (
                    StatusCode::UNAUTHORIZED,
                    "Недействительный токен авторизации".to_string(),
                )
            }
            Self::AccessDenied(user_id, reason) => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (StatusCode::FORBIDDEN, reason.clone())
            }
            Self::DiscordTokenExchange(_) | Self::DiscordProfile(_) => {
                tracing::error!("{}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Ошибка авторизации через Discord".to_string(),
                )
            }
        };

        (status, Json(ErrorDto { message, stack })).into_response()
    }
}
