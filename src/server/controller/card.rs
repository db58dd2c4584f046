use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        card::{CardDto, CardType, CreateCardDto, UpdateCardDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::card::{Card, CreateCardParams, UpdateCardParams},
        service::card::CardService,
        state::AppState,
        util::extract::ApiJson,
    },
};

/// Tag for grouping card endpoints in OpenAPI documentation
pub static CARD_TAG: &str = "card";

/// List the caller's own cards, newest first.
#[utoipa::path(
    get,
    path = "/api/cards",
    tag = CARD_TAG,
    responses(
        (status = 200, description = "Cards owned by the caller", body = Vec<CardDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto)
    ),
)]
pub async fn get_cards(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let cards = CardService::new(&state.db).get_own(&actor).await?;

    Ok((StatusCode::OK, Json(into_dtos(cards))))
}

/// List cards of one type.
///
/// # Access Control
/// - `character` - Own cards; all of them for admins and Dungeon Masters
/// - `npc`, `item` - Admins and Dungeon Masters only
#[utoipa::path(
    get,
    path = "/api/cards/type/{type}",
    tag = CARD_TAG,
    params(("type" = CardType, Path, description = "character, npc or item")),
    responses(
        (status = 200, description = "Cards of the type", body = Vec<CardDto>),
        (status = 400, description = "Unknown card type", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Type not listable by the caller", body = ErrorDto)
    ),
)]
pub async fn get_cards_by_type(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(card_type): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let card_type: CardType = card_type
        .parse()
        .map_err(|_| AppError::BadRequest("Недопустимый тип карточки".to_string()))?;

    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let cards = CardService::new(&state.db)
        .get_by_type(&actor, card_type)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(cards))))
}

/// Get a card.
///
/// # Access Control
/// - Owner, admins, anyone if public, Dungeon Masters for npc and item cards
#[utoipa::path(
    get,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card ID")),
    responses(
        (status = 200, description = "The card", body = CardDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Card not visible to the caller", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto)
    ),
)]
pub async fn get_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let card = CardService::new(&state.db).get_by_id(&actor, id).await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Create a card owned by the caller.
///
/// Content is validated against the field schema for the card type and missing
/// fields with defaults are filled in.
///
/// # Access Control
/// - `character` - Any authenticated user
/// - `npc`, `item` - Admins, Dungeon Masters and Card Creators
///
/// # Returns
/// - `201 Created` - The new card
/// - `400 Bad Request` - Missing name or invalid content
/// - `403 Forbidden` - Caller may not create cards of that type
#[utoipa::path(
    post,
    path = "/api/cards",
    tag = CARD_TAG,
    request_body = CreateCardDto,
    responses(
        (status = 201, description = "Card created", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to create this card type", body = ErrorDto)
    ),
)]
pub async fn create_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    ApiJson(payload): ApiJson<CreateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let card = CardService::new(&state.db)
        .create(&actor, CreateCardParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(card.into_dto())))
}

/// Update a card's name, content or visibility.
///
/// # Access Control
/// - Owner and admins; Dungeon Masters for npc and item cards
#[utoipa::path(
    put,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card ID")),
    request_body = UpdateCardDto,
    responses(
        (status = 200, description = "Card updated", body = CardDto),
        (status = 400, description = "Invalid card data", body = ErrorDto),
        (status = 403, description = "Not allowed to edit the card", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto)
    ),
)]
pub async fn update_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<UpdateCardDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let card = CardService::new(&state.db)
        .update(&actor, UpdateCardParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(card.into_dto())))
}

/// Delete a card with its inventory, links and group attachments.
///
/// # Access Control
/// - Owner and admins; Dungeon Masters for npc and item cards
#[utoipa::path(
    delete,
    path = "/api/cards/{id}",
    tag = CARD_TAG,
    params(("id" = i32, Path, description = "Card ID")),
    responses(
        (status = 200, description = "Card deleted", body = MessageDto),
        (status = 403, description = "Not allowed to delete the card", body = ErrorDto),
        (status = 404, description = "Card not found", body = ErrorDto)
    ),
)]
pub async fn delete_card(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    CardService::new(&state.db).delete(&actor, id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Карточка успешно удалена"))))
}

fn into_dtos(cards: Vec<Card>) -> Vec<CardDto> {
    cards.into_iter().map(Card::into_dto).collect()
}
