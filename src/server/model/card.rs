//! Card and inventory domain models.
//!
//! Cards hold a typed content map; the `card_type` and `content` columns are
//! parsed into [`CardType`] and [`Content`] when a row leaves the repository.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::card::{
        AddCardItemDto, CardDto, CardItemDto, CardType, Content, CreateCardDto, LinkedCardDto,
        UpdateCardDto, UpdateCardItemDto,
    },
    server::util::parse::{decode_stored_json, parse_stored},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: i32,
    pub name: String,
    pub card_type: CardType,
    /// Owner.
    pub user_id: i32,
    pub content: Content,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Converts an entity model to a card domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Card)` - Converted card
    /// - `Err(DbErr::Custom)` - Stored card type or content is malformed
    pub fn from_entity(entity: entity::card::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            card_type: parse_stored("card.card_type", &entity.card_type)?,
            user_id: entity.user_id,
            content: decode_stored_json("card.content", entity.content)?,
            is_public: entity.is_public,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> CardDto {
        CardDto {
            id: self.id,
            name: self.name,
            card_type: self.card_type,
            user_id: self.user_id,
            content: self.content,
            is_public: self.is_public,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCardParams {
    pub name: String,
    pub card_type: CardType,
    /// Validated and completed with field defaults before it is stored.
    pub content: Content,
    pub is_public: bool,
}

impl CreateCardParams {
    pub fn from_dto(dto: CreateCardDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            card_type: dto.card_type,
            content: dto.content.unwrap_or_default(),
            is_public: dto.is_public,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCardParams {
    pub id: i32,
    pub name: Option<String>,
    pub content: Option<Content>,
    pub is_public: Option<bool>,
}

impl UpdateCardParams {
    pub fn from_dto(id: i32, dto: UpdateCardDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            content: dto.content,
            is_public: dto.is_public,
        }
    }
}

/// Inventory association between a carrier card and an item card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardItem {
    pub card_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub equipped: bool,
    pub notes: Option<String>,
}

impl CardItem {
    pub fn from_entity(entity: entity::card_item::Model) -> Self {
        Self {
            card_id: entity.card_id,
            item_id: entity.item_id,
            quantity: entity.quantity,
            equipped: entity.equipped,
            notes: entity.notes,
        }
    }

    pub fn into_dto(self) -> CardItemDto {
        CardItemDto {
            card_id: self.card_id,
            item_id: self.item_id,
            quantity: self.quantity,
            equipped: self.equipped,
            notes: self.notes,
        }
    }
}

/// A card together with the inventory row that links it to another card.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkedCard {
    pub card: Card,
    pub card_item: CardItem,
}

impl LinkedCard {
    pub fn into_dto(self) -> LinkedCardDto {
        LinkedCardDto {
            card: self.card.into_dto(),
            card_item: self.card_item.into_dto(),
        }
    }
}

/// Values written when an item is added to or updated in an inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct CardItemValues {
    pub quantity: i32,
    pub equipped: bool,
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddCardItemParams {
    pub card_id: i32,
    pub item_id: Option<i32>,
    pub values: CardItemValues,
}

impl AddCardItemParams {
    pub fn from_dto(card_id: i32, dto: AddCardItemDto) -> Self {
        Self {
            card_id,
            item_id: dto.item_id,
            values: CardItemValues {
                quantity: dto.quantity.unwrap_or(1),
                equipped: dto.equipped.unwrap_or(false),
                notes: dto.notes,
            },
        }
    }
}

/// Patch for an existing inventory row; absent values are kept.
#[derive(Debug, Clone)]
pub struct UpdateCardItemParams {
    pub card_id: i32,
    pub item_id: i32,
    pub quantity: Option<i32>,
    pub equipped: Option<bool>,
    pub notes: Option<String>,
}

impl UpdateCardItemParams {
    pub fn from_dto(card_id: i32, item_id: i32, dto: UpdateCardItemDto) -> Self {
        Self {
            card_id,
            item_id,
            quantity: dto.quantity,
            equipped: dto.equipped,
            notes: dto.notes,
        }
    }
}
