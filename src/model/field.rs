use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::{
    card::{CardType, ContentValue},
    UnknownVariant,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Number,
    Select,
    Checkbox,
    Textarea,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(FieldType::Text),
            "number" => Ok(FieldType::Number),
            "select" => Ok(FieldType::Select),
            "checkbox" => Ok(FieldType::Checkbox),
            "textarea" => Ok(FieldType::Textarea),
            other => Err(UnknownVariant::new("field type", other)),
        }
    }
}

/// Which card types a field applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldCardType {
    Character,
    Npc,
    Item,
    #[default]
    All,
}

impl FieldCardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldCardType::Character => "character",
            FieldCardType::Npc => "npc",
            FieldCardType::Item => "item",
            FieldCardType::All => "all",
        }
    }

    pub fn applies_to(&self, card_type: CardType) -> bool {
        match self {
            FieldCardType::All => true,
            other => *other == FieldCardType::from(card_type),
        }
    }
}

impl From<CardType> for FieldCardType {
    fn from(card_type: CardType) -> Self {
        match card_type {
            CardType::Character => FieldCardType::Character,
            CardType::Npc => FieldCardType::Npc,
            CardType::Item => FieldCardType::Item,
        }
    }
}

impl fmt::Display for FieldCardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldCardType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FieldCardType::All),
            other => other
                .parse::<CardType>()
                .map(FieldCardType::from)
                .map_err(|_| UnknownVariant::new("field card type", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDto {
    pub id: i32,
    pub name: String,
    pub key: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub category: String,
    pub order: i32,
    pub options: Vec<String>,
    #[schema(value_type = Option<Object>)]
    pub default_value: Option<ContentValue>,
    pub required: bool,
    pub card_type: FieldCardType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFieldDto {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    #[serde(default)]
    pub category: String,
    /// Position within the (category, cardType) bucket; appended when absent.
    pub order: Option<i32>,
    pub options: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub default_value: Option<ContentValue>,
    pub required: Option<bool>,
    pub card_type: Option<FieldCardType>,
}

/// Field patch. The machine key is fixed at creation.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFieldDto {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<FieldType>,
    pub category: Option<String>,
    pub order: Option<i32>,
    pub options: Option<Vec<String>>,
    #[schema(value_type = Option<Object>)]
    pub default_value: Option<ContentValue>,
    pub required: Option<bool>,
    pub card_type: Option<FieldCardType>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldListQuery {
    pub card_type: Option<FieldCardType>,
}
