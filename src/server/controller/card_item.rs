use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        card::{AddCardItemDto, CardItemDto, LinkedCardDto, UpdateCardItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::card::{AddCardItemParams, LinkedCard, UpdateCardItemParams},
        service::card_item::CardItemService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping inventory endpoints in OpenAPI documentation
pub static CARD_ITEM_TAG: &str = "card-item";

/// List the items a card carries.
///
/// # Access Control
/// - Same visibility as viewing the card
#[utoipa::path(
    get,
    path = "/api/cards/{id}/items",
    tag = CARD_ITEM_TAG,
    params(("id" = i32, Path, description = "Carrier card ID")),
    responses(
        (status = 200, description = "Carried items with inventory data", body = Vec<LinkedCardDto>),
        (status = 403, description = "Card not visible to the caller", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto)
    ),
)]
pub async fn get_card_items(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let items = CardItemService::new(&state.db).get_items(&actor, id).await?;

    Ok((StatusCode::OK, Json(into_dtos(items))))
}

/// Add an item to a card's inventory, or overwrite the existing entry.
///
/// # Access Control
/// - Same as editing the carrier card
///
/// # Returns
/// - `201 Created` - The stored inventory entry
/// - `400 Bad Request` - Missing item id, target is not an item, or quantity below 1
#[utoipa::path(
    post,
    path = "/api/cards/{id}/items",
    tag = CARD_ITEM_TAG,
    params(("id" = i32, Path, description = "Carrier card ID")),
    request_body = AddCardItemDto,
    responses(
        (status = 201, description = "Item stored", body = CardItemDto),
        (status = 400, description = "Invalid inventory data", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the card", body = ErrorDto),
        (status = 404, description = "Card or item not found", body = ErrorDto)
    ),
)]
pub async fn add_card_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<AddCardItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let card_item = CardItemService::new(&state.db)
        .add(&actor, AddCardItemParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card_item.into_dto())))
}

/// Update quantity, equipped flag or notes of a carried item.
#[utoipa::path(
    put,
    path = "/api/cards/{id}/items/{item_id}",
    tag = CARD_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Carrier card ID"),
        ("item_id" = i32, Path, description = "Item card ID")
    ),
    request_body = UpdateCardItemDto,
    responses(
        (status = 200, description = "Inventory entry updated", body = CardItemDto),
        (status = 400, description = "Quantity below 1", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the card", body = ErrorDto),
        (status = 404, description = "Card does not carry the item", body = ErrorDto)
    ),
)]
pub async fn update_card_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, item_id)): Path<(i32, i32)>,
    ApiJson(payload): ApiJson<UpdateCardItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let card_item = CardItemService::new(&state.db)
        .update(&actor, UpdateCardItemParams::from_dto(id, item_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(card_item.into_dto())))
}

/// Remove an item from a card's inventory.
#[utoipa::path(
    delete,
    path = "/api/cards/{id}/items/{item_id}",
    tag = CARD_ITEM_TAG,
    params(
        ("id" = i32, Path, description = "Carrier card ID"),
        ("item_id" = i32, Path, description = "Item card ID")
    ),
    responses(
        (status = 200, description = "Item removed", body = MessageDto),
        (status = 403, description = "Not allowed to edit the card", body = ErrorDto),
        (status = 404, description = "Card does not carry the item", body = ErrorDto)
    ),
)]
pub async fn remove_card_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, item_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    CardItemService::new(&state.db)
        .remove(&actor, id, item_id)
        .await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Предмет удален из инвентаря"))))
}

/// List the cards carrying an item.
///
/// # Access Control
/// - Item owner, admins and Dungeon Masters
#[utoipa::path(
    get,
    path = "/api/cards/items/{item_id}/usage",
    tag = CARD_ITEM_TAG,
    params(("item_id" = i32, Path, description = "Item card ID")),
    responses(
        (status = 200, description = "Carrier cards with inventory data", body = Vec<LinkedCardDto>),
        (status = 403, description = "Not allowed to view usage", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto)
    ),
)]
pub async fn get_item_usage(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let carriers = CardItemService::new(&state.db)
        .get_usage(&actor, item_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(carriers))))
}

fn into_dtos(linked: Vec<LinkedCard>) -> Vec<LinkedCardDto> {
    linked.into_iter().map(LinkedCard::into_dto).collect()
}
