use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        field::{CreateFieldDto, FieldDto, FieldListQuery, UpdateFieldDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::field::{CreateFieldParams, Field, UpdateFieldParams},
        service::field::FieldService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping field schema endpoints in OpenAPI documentation
pub static FIELD_TAG: &str = "field";

/// List field definitions.
///
/// With `cardType` set to a card type, returns the fields for that type plus
/// those for all types. Without it, or with `all`, returns every field.
/// Ordered by category, then position.
///
/// # Access Control
/// - `Admin` - Only admins can manage the field schema
#[utoipa::path(
    get,
    path = "/api/admin/fields",
    tag = FIELD_TAG,
    params(
        ("cardType" = Option<String>, Query, description = "character, npc, item or all")
    ),
    responses(
        (status = 200, description = "Field definitions", body = Vec<FieldDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn get_fields(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<FieldListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let fields = FieldService::new(&state.db).get_all(query.card_type).await?;

    Ok((
        StatusCode::OK,
        Json(fields.into_iter().map(Field::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a field definition.
///
/// The machine key is derived from the name. Without `order` the field is
/// appended to its (category, card type) bucket.
///
/// # Access Control
/// - `Admin` - Only admins can manage the field schema
///
/// # Returns
/// - `201 Created` - The new field
/// - `400 Bad Request` - Missing name, type or category, or invalid default value
/// - `409 Conflict` - Derived key already exists
#[utoipa::path(
    post,
    path = "/api/admin/fields",
    tag = FIELD_TAG,
    request_body = CreateFieldDto,
    responses(
        (status = 201, description = "Field created", body = FieldDto),
        (status = 400, description = "Invalid field data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Field key already exists", body = ErrorDto)
    ),
)]
pub async fn create_field(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateFieldDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let field = FieldService::new(&state.db)
        .create(CreateFieldParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(field.into_dto())))
}

/// Update a field definition.
///
/// Changing category, card type or order moves the field within or between
/// buckets; positions stay dense in both.
///
/// # Access Control
/// - `Admin` - Only admins can manage the field schema
#[utoipa::path(
    put,
    path = "/api/admin/fields/{id}",
    tag = FIELD_TAG,
    params(("id" = i32, Path, description = "Field ID")),
    request_body = UpdateFieldDto,
    responses(
        (status = 200, description = "Field updated", body = FieldDto),
        (status = 400, description = "Invalid field data", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Field not found", body = ErrorDto)
    ),
)]
pub async fn update_field(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateFieldDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let field = FieldService::new(&state.db)
        .update(UpdateFieldParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(field.into_dto())))
}

/// Delete a field definition and close the gap in its bucket.
///
/// # Access Control
/// - `Admin` - Only admins can manage the field schema
#[utoipa::path(
    delete,
    path = "/api/admin/fields/{id}",
    tag = FIELD_TAG,
    params(("id" = i32, Path, description = "Field ID")),
    responses(
        (status = 200, description = "Field deleted", body = MessageDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Field not found", body = ErrorDto)
    ),
)]
pub async fn delete_field(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    FieldService::new(&state.db).delete(id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Поле успешно удалено"))))
}
