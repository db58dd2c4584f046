use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AuthResponseDto, DiscordLoginDto, LoginUrlDto},
        user::UserDto,
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, service::auth::DiscordAuthService,
        state::AppState, util::extract::ApiJson,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Get the Discord authorize URL.
///
/// Returns the URL the client should send the user to, requesting the `identify`
/// scope, together with the state value embedded in it.
///
/// # Returns
/// - `200 OK` - Authorize URL and state
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Discord authorize URL", body = LoginUrlDto),
    ),
)]
pub async fn login(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = auth_service(&state);
    let (url, csrf_state) = service.login_url();

    Ok((
        StatusCode::OK,
        Json(LoginUrlDto {
            url: url.to_string(),
            state: csrf_state.secret().clone(),
        }),
    ))
}

/// Log in with a Discord authorization code.
///
/// Exchanges the code with Discord, creates or refreshes the user and returns a
/// session token valid for seven days.
///
/// # Returns
/// - `200 OK` - Session token and user
/// - `400 Bad Request` - No code supplied
/// - `500 Internal Server Error` - Discord rejected the code or the profile request failed
#[utoipa::path(
    post,
    path = "/api/auth/discord",
    tag = AUTH_TAG,
    request_body = DiscordLoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "No authorization code", body = ErrorDto),
        (status = 500, description = "Discord authorization failed", body = ErrorDto)
    ),
)]
pub async fn discord_login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<DiscordLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let code = payload.code.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest(
            "Код авторизации не предоставлен".to_string(),
        ));
    }

    let (token, user) = auth_service(&state).callback(code.to_string()).await?;

    tracing::info!("User {} logged in", user.id);

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the authenticated user with roles.
///
/// # Returns
/// - `200 OK` - Current user
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(actor.user.into_dto())))
}

fn auth_service(state: &AppState) -> DiscordAuthService<'_> {
    DiscordAuthService::new(
        &state.db,
        &state.http_client,
        &state.oauth_client,
        &state.tokens,
        state.admin_discord_id.as_deref(),
    )
}
