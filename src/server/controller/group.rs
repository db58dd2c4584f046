use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        role::SystemRole,
        group::{
            AddMemberDto, AttachCardDto, BankEntryDto, CreateBankEntryDto, CreateGroupDto,
            GroupDetailDto, GroupDto, LedgerDto, MemberGroupDto, UpdateGroupDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::group::{CreateBankEntryParams, CreateGroupParams, MemberGroup, UpdateGroupParams},
        service::{bank::BankService, group::GroupService},
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

/// List the groups the caller belongs to, with the caller's position in each.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "Caller's groups", body = Vec<MemberGroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_groups(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let groups = GroupService::new(&state.db).get_for_user(&actor).await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(MemberGroup::into_dto).collect::<Vec<_>>()),
    ))
}

/// Get a group with its members and attached cards.
///
/// # Access Control
/// - Members, admins and Dungeon Masters
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "The group", body = GroupDetailDto),
        (status = 403, description = "Caller has no access to the group", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let group = GroupService::new(&state.db).get_by_id(&actor, id).await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Create a group with the caller as its Dungeon Master.
///
/// # Access Control
/// - Admins and Dungeon Masters
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = CreateGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Missing name", body = ErrorDto),
        (status = 403, description = "Not allowed to create groups", body = ErrorDto)
    ),
)]
pub async fn create_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Role(SystemRole::DungeonMaster)])
        .await?;

    let group = GroupService::new(&state.db)
        .create(&actor, CreateGroupParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

/// Update a group's name or description.
///
/// # Access Control
/// - Admins, Dungeon Masters and the group's captain
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = UpdateGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 400, description = "Empty name", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the group", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn update_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let group = GroupService::new(&state.db)
        .update(&actor, UpdateGroupParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Delete a group with its memberships, attachments and ledger.
///
/// # Access Control
/// - Admins only
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Group deleted", body = MessageDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    GroupService::new(&state.db).delete(&actor, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Группа успешно удалена"))))
}

/// Add a user to a group.
///
/// # Access Control
/// - Admins, Dungeon Masters and the group's captain
///
/// # Returns
/// - `200 OK` - The group after the change
/// - `400 Bad Request` - Missing user id
/// - `404 Not Found` - Group or user not found
/// - `409 Conflict` - User is already a member
#[utoipa::path(
    post,
    path = "/api/groups/{id}/members",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = AddMemberDto,
    responses(
        (status = 200, description = "Member added", body = GroupDetailDto),
        (status = 400, description = "Missing user id", body = ErrorDto),
        (status = 403, description = "Not allowed to add members", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 409, description = "User already a member", body = ErrorDto)
    ),
)]
pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let group = GroupService::new(&state.db)
        .add_member(&actor, id, payload.user_id, payload.position)
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

/// Attach a card to a group.
///
/// # Access Control
/// - Admins, Dungeon Masters and the group's captain
#[utoipa::path(
    post,
    path = "/api/groups/{id}/cards",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = AttachCardDto,
    responses(
        (status = 201, description = "Card attached", body = MessageDto),
        (status = 400, description = "Missing card id", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the group", body = ErrorDto),
        (status = 404, description = "Group or card not found", body = ErrorDto),
        (status = 409, description = "Card already attached", body = ErrorDto)
    ),
)]
pub async fn attach_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<AttachCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    GroupService::new(&state.db)
        .attach_card(&actor, id, payload.card_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("Карточка добавлена в группу")),
    ))
}

/// Detach a card from a group.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}/cards/{card_id}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group ID"),
        ("card_id" = i32, Path, description = "Card ID")
    ),
    responses(
        (status = 200, description = "Card detached", body = MessageDto),
        (status = 403, description = "Not allowed to edit the group", body = ErrorDto),
        (status = 404, description = "Group not found or card not attached", body = ErrorDto)
    ),
)]
pub async fn detach_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, card_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    GroupService::new(&state.db)
        .detach_card(&actor, id, card_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("Карточка удалена из группы")),
    ))
}

/// Get a group's ledger with its balance.
///
/// # Access Control
/// - Members, admins and Dungeon Masters
#[utoipa::path(
    get,
    path = "/api/groups/{id}/bank",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    responses(
        (status = 200, description = "Entries newest first and total balance", body = LedgerDto),
        (status = 403, description = "Caller has no access to the ledger", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn get_bank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let ledger = BankService::new(&state.db).get_ledger(&actor, id).await?;

    Ok((StatusCode::OK, Json(ledger.into_dto())))
}

/// Record a ledger entry. Negative amounts are withdrawals.
///
/// # Access Control
/// - Admins and Dungeon Masters
/// - Checked after the group lookup, so a missing group is 404 for every caller
#[utoipa::path(
    post,
    path = "/api/groups/{id}/bank",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group ID")),
    request_body = CreateBankEntryDto,
    responses(
        (status = 201, description = "Entry recorded", body = BankEntryDto),
        (status = 400, description = "Missing title or amount", body = ErrorDto),
        (status = 403, description = "Not allowed to update the ledger", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto)
    ),
)]
pub async fn create_bank_entry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<CreateBankEntryDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let entry = BankService::new(&state.db)
        .record(&actor, CreateBankEntryParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(entry.into_dto())))
}
