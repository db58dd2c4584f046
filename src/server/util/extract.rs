//! Request extractors.

use axum::extract::FromRequest;

use crate::server::error::AppError;

/// `axum::Json` whose rejection is reported as an [`AppError`], so malformed
/// bodies get the usual `{message}` error body with status 400.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
