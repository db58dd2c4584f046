use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        role::{AssignRoleDto, CreateRoleDto, RoleDto, UpdateRoleDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            role::{CreateRoleParams, Role, UpdateRoleParams},
            user::User,
        },
        service::role::RoleService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping role endpoints in OpenAPI documentation
pub static ROLE_TAG: &str = "role";

/// List all roles.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    get,
    path = "/api/admin/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All roles ordered by name", body = Vec<RoleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let roles = RoleService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(roles.into_iter().map(Role::into_dto).collect::<Vec<_>>()),
    ))
}

/// Create a custom role.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Returns
/// - `201 Created` - The new role
/// - `400 Bad Request` - Empty name
/// - `409 Conflict` - Name already taken
#[utoipa::path(
    post,
    path = "/api/admin/roles",
    tag = ROLE_TAG,
    request_body = CreateRoleDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Role name already taken", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db)
        .create(CreateRoleParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

/// Update a role.
///
/// System roles cannot be renamed; their description may change.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    put,
    path = "/api/admin/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role updated", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ErrorDto),
        (status = 403, description = "Not an admin, or renaming a system role", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 409, description = "Role name already taken", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let role = RoleService::new(&state.db)
        .update(actor.id(), UpdateRoleParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

/// Delete a custom role.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    delete,
    path = "/api/admin/roles/{id}",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted", body = MessageDto),
        (status = 403, description = "Not an admin, or deleting a system role", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoleService::new(&state.db).delete(actor.id(), id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Роль успешно удалена"))))
}

/// Assign a role to a user.
///
/// Assigning Administrator also sets the user's admin flag.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
///
/// # Returns
/// - `200 OK` - Role assigned
/// - `400 Bad Request` - Missing user or role id
/// - `404 Not Found` - User or role not found
/// - `409 Conflict` - User already holds the role
#[utoipa::path(
    post,
    path = "/api/admin/roles/assign",
    tag = ROLE_TAG,
    request_body = AssignRoleDto,
    responses(
        (status = 200, description = "Role assigned", body = MessageDto),
        (status = 400, description = "Missing ids", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 409, description = "Role already assigned", body = ErrorDto)
    ),
)]
pub async fn assign_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<AssignRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let (Some(user_id), Some(role_id)) = (payload.user_id, payload.role_id) else {
        return Err(AppError::BadRequest(
            "ID пользователя и роли обязательны".to_string(),
        ));
    };

    RoleService::new(&state.db).assign(user_id, role_id).await?;

    tracing::info!("User {} assigned role {} to user {}", actor.id(), role_id, user_id);

    Ok((StatusCode::OK, Json(MessageDto::new("Роль успешно назначена"))))
}

/// Remove a role from a user.
///
/// Removing Administrator also clears the admin flag and is rejected for the
/// last administrator.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    delete,
    path = "/api/admin/roles/{id}/users/{user_id}",
    tag = ROLE_TAG,
    params(
        ("id" = i32, Path, description = "Role ID"),
        ("user_id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Role removed", body = MessageDto),
        (status = 403, description = "Not an admin, or last administrator", body = ErrorDto),
        (status = 404, description = "User or role not found", body = ErrorDto),
        (status = 409, description = "User does not hold the role", body = ErrorDto)
    ),
)]
pub async fn remove_role(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((role_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    RoleService::new(&state.db).remove(user_id, role_id).await?;

    tracing::info!("User {} removed role {} from user {}", actor.id(), role_id, user_id);

    Ok((StatusCode::OK, Json(MessageDto::new("Роль успешно удалена у пользователя"))))
}

/// List users holding a role.
///
/// # Access Control
/// - `Admin` - Only admins can manage roles
#[utoipa::path(
    get,
    path = "/api/admin/roles/{id}/users",
    tag = ROLE_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Holders of the role", body = Vec<UserDto>),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto)
    ),
)]
pub async fn get_role_users(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(role_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let users = RoleService::new(&state.db).get_holders(role_id).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(User::into_dto).collect::<Vec<_>>()),
    ))
}
