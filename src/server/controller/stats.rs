use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        stats::{DbStatsDto, ExecuteQueryDto, QueryResultDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::stats::StatsService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping statistics endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "db-stats";

/// Get row counts and per-type card statistics.
///
/// # Access Control
/// - `Admin` - Only admins can view database statistics
#[utoipa::path(
    get,
    path = "/api/db-stats",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Database statistics", body = DbStatsDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn get_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let stats = StatsService::new(&state.db).get_stats().await?;

    Ok((StatusCode::OK, Json(stats.into_dto())))
}

/// Run a single read-only SQL statement.
///
/// Only `SELECT`, `WITH`, `EXPLAIN` and `VALUES` statements are accepted. The
/// statement runs in a transaction that is always rolled back.
///
/// # Access Control
/// - `Admin` - Only admins can run queries
///
/// # Returns
/// - `200 OK` - Column names and rows
/// - `400 Bad Request` - Statement rejected or failed
#[utoipa::path(
    post,
    path = "/api/db-stats/execute-query",
    tag = STATS_TAG,
    request_body = ExecuteQueryDto,
    responses(
        (status = 200, description = "Query result", body = QueryResultDto),
        (status = 400, description = "Statement rejected or failed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn execute_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<ExecuteQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    tracing::info!("User {} executing query: {}", actor.id(), payload.query);

    let result = StatsService::new(&state.db)
        .execute_query(&payload.query)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
