//! Field definition factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating field definitions.
///
/// The factory writes `sort_order` verbatim; it does not resequence siblings.
pub struct FieldFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    key: String,
    field_type: String,
    category: String,
    sort_order: i32,
    options: Vec<String>,
    default_value: Option<Value>,
    required: bool,
    card_type: String,
}

impl<'a> FieldFactory<'a> {
    /// Defaults: optional `text` field `field_{id}` in category `general`
    /// for all card types at order 0.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Field {}", id),
            key: format!("field_{}", id),
            field_type: "text".to_string(),
            category: "general".to_string(),
            sort_order: 0,
            options: Vec::new(),
            default_value: None,
            required: false,
            card_type: "all".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn field_type(mut self, field_type: impl Into<String>) -> Self {
        self.field_type = field_type.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn order(mut self, sort_order: i32) -> Self {
        self.sort_order = sort_order;
        self
    }

    pub fn options(mut self, options: &[&str]) -> Self {
        self.options = options.iter().map(|o| o.to_string()).collect();
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    pub async fn build(self) -> Result<entity::field::Model, DbErr> {
        let now = Utc::now();
        entity::field::ActiveModel {
            name: ActiveValue::Set(self.name),
            key: ActiveValue::Set(self.key),
            field_type: ActiveValue::Set(self.field_type),
            category: ActiveValue::Set(self.category),
            sort_order: ActiveValue::Set(self.sort_order),
            options: ActiveValue::Set(json!(self.options)),
            default_value: ActiveValue::Set(self.default_value),
            required: ActiveValue::Set(self.required),
            card_type: ActiveValue::Set(self.card_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a field with default values.
pub async fn create_field(db: &DatabaseConnection) -> Result<entity::field::Model, DbErr> {
    FieldFactory::new(db).build().await
}
