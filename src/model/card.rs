use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::UnknownVariant;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    #[default]
    Character,
    Npc,
    Item,
}

impl CardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Character => "character",
            CardType::Npc => "npc",
            CardType::Item => "item",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "character" => Ok(CardType::Character),
            "npc" => Ok(CardType::Npc),
            "item" => Ok(CardType::Item),
            other => Err(UnknownVariant::new("card type", other)),
        }
    }
}

/// One value in a card's content map.
///
/// Field definitions decide which variant a key must hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentValue {
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
}

/// Card content keyed by field key.
pub type Content = BTreeMap<String, ContentValue>;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardDto {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub user_id: i32,
    #[schema(value_type = Object)]
    pub content: Content,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardDto {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub card_type: CardType,
    #[schema(value_type = Option<Object>)]
    pub content: Option<Content>,
    #[serde(default)]
    pub is_public: bool,
}

/// Card patch. The card type cannot be changed; `content` replaces the whole map.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardDto {
    pub name: Option<String>,
    #[schema(value_type = Option<Object>)]
    pub content: Option<Content>,
    pub is_public: Option<bool>,
}

/// Per-association data of an item carried by a card.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardItemDto {
    pub card_id: i32,
    pub item_id: i32,
    pub quantity: i32,
    pub equipped: bool,
    pub notes: Option<String>,
}

/// A card plus the association row linking it to the card on the other side.
///
/// Returned both by inventory listings (the card is the item) and by item
/// usage listings (the card is the carrier).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LinkedCardDto {
    #[serde(flatten)]
    pub card: CardDto,
    pub card_item: CardItemDto,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCardItemDto {
    pub item_id: Option<i32>,
    pub quantity: Option<i32>,
    pub equipped: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCardItemDto {
    pub quantity: Option<i32>,
    pub equipped: Option<bool>,
    pub notes: Option<String>,
}
