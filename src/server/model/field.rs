//! Field schema domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::{
        card::ContentValue,
        field::{CreateFieldDto, FieldCardType, FieldDto, FieldType, UpdateFieldDto},
    },
    server::util::parse::{decode_stored_json, parse_stored},
};

/// One admin-defined attribute a card's content may hold.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub id: i32,
    pub name: String,
    /// Content map key, derived from the name at creation.
    pub key: String,
    pub field_type: FieldType,
    pub category: String,
    /// Dense position within the (category, card type) bucket.
    pub order: i32,
    pub options: Vec<String>,
    pub default_value: Option<ContentValue>,
    pub required: bool,
    pub card_type: FieldCardType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Field {
    /// Converts an entity model to a field domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Field)` - Converted field
    /// - `Err(DbErr::Custom)` - Stored type, card type, options or default is malformed
    pub fn from_entity(entity: entity::field::Model) -> Result<Self, DbErr> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            key: entity.key,
            field_type: parse_stored("field.field_type", &entity.field_type)?,
            category: entity.category,
            order: entity.sort_order,
            options: decode_stored_json("field.options", entity.options)?,
            default_value: entity
                .default_value
                .map(|value| decode_stored_json("field.default_value", value))
                .transpose()?,
            required: entity.required,
            card_type: parse_stored("field.card_type", &entity.card_type)?,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> FieldDto {
        FieldDto {
            id: self.id,
            name: self.name,
            key: self.key,
            field_type: self.field_type,
            category: self.category,
            order: self.order,
            options: self.options,
            default_value: self.default_value,
            required: self.required,
            card_type: self.card_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl Field {
    /// Whether `value` may be stored under this field's key.
    ///
    /// Text-like types take strings, `number` numbers and `checkbox` booleans. A
    /// `select` with options only takes one of them.
    pub fn accepts(&self, value: &ContentValue) -> bool {
        value_fits(self.field_type, &self.options, value)
    }
}

/// Type check shared by stored fields and field definitions being written.
pub fn value_fits(field_type: FieldType, options: &[String], value: &ContentValue) -> bool {
    match (field_type, value) {
        (FieldType::Text | FieldType::Textarea, ContentValue::Text(_)) => true,
        (FieldType::Number, ContentValue::Number(_)) => true,
        (FieldType::Checkbox, ContentValue::Bool(_)) => true,
        (FieldType::Select, ContentValue::Text(choice)) => {
            options.is_empty() || options.iter().any(|option| option == choice)
        }
        _ => false,
    }
}

/// Ordering bucket a field lives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBucket {
    pub category: String,
    pub card_type: FieldCardType,
}

impl Field {
    pub fn bucket(&self) -> FieldBucket {
        FieldBucket {
            category: self.category.clone(),
            card_type: self.card_type,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateFieldParams {
    pub name: String,
    pub field_type: Option<FieldType>,
    pub category: String,
    pub order: Option<i32>,
    pub options: Vec<String>,
    pub default_value: Option<ContentValue>,
    pub required: bool,
    pub card_type: FieldCardType,
}

impl CreateFieldParams {
    pub fn from_dto(dto: CreateFieldDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            field_type: dto.field_type,
            category: dto.category.trim().to_string(),
            order: dto.order,
            options: dto.options.unwrap_or_default(),
            default_value: dto.default_value,
            required: dto.required.unwrap_or(false),
            card_type: dto.card_type.unwrap_or_default(),
        }
    }
}

/// Everything the repository writes for a new field row.
#[derive(Debug, Clone)]
pub struct NewField {
    pub name: String,
    pub key: String,
    pub field_type: FieldType,
    pub bucket: FieldBucket,
    pub order: i32,
    pub options: Vec<String>,
    pub default_value: Option<ContentValue>,
    pub required: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateFieldParams {
    pub id: i32,
    pub name: Option<String>,
    pub field_type: Option<FieldType>,
    pub category: Option<String>,
    pub order: Option<i32>,
    pub options: Option<Vec<String>>,
    pub default_value: Option<ContentValue>,
    pub required: Option<bool>,
    pub card_type: Option<FieldCardType>,
}

impl UpdateFieldParams {
    pub fn from_dto(id: i32, dto: UpdateFieldDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            field_type: dto.field_type,
            category: dto.category.map(|category| category.trim().to_string()),
            order: dto.order,
            options: dto.options,
            default_value: dto.default_value,
            required: dto.required,
            card_type: dto.card_type,
        }
    }
}
