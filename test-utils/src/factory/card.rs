//! Card and inventory factories.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating cards owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let item = CardFactory::new(&db, owner.id)
///     .card_type("item")
///     .content(json!({ "weight": 3 }))
///     .build()
///     .await?;
/// ```
pub struct CardFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    card_type: String,
    content: Value,
    public: bool,
}

impl<'a> CardFactory<'a> {
    /// Defaults: a private `character` card named `"Card {id}"` with empty content.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            name: format!("Card {}", next_id()),
            card_type: "character".to_string(),
            content: json!({}),
            public: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// One of `character`, `npc`, `item`.
    pub fn card_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = card_type.into();
        self
    }

    pub fn content(mut self, content: Value) -> Self {
        self.content = content;
        self
    }

    pub fn public(mut self, public: bool) -> Self {
        self.public = public;
        self
    }

    pub async fn build(self) -> Result<entity::card::Model, DbErr> {
        let now = Utc::now();
        entity::card::ActiveModel {
            name: ActiveValue::Set(self.name),
            card_type: ActiveValue::Set(self.card_type),
            user_id: ActiveValue::Set(self.user_id),
            content: ActiveValue::Set(self.content),
            is_public: ActiveValue::Set(self.public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a private character card owned by `user_id`.
pub async fn create_card(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::card::Model, DbErr> {
    CardFactory::new(db, user_id).build().await
}

/// Puts `quantity` of `item_id` into the inventory of `card_id`.
pub async fn create_card_item(
    db: &DatabaseConnection,
    card_id: i32,
    item_id: i32,
    quantity: i32,
) -> Result<entity::card_item::Model, DbErr> {
    let now = Utc::now();
    entity::card_item::ActiveModel {
        card_id: ActiveValue::Set(card_id),
        item_id: ActiveValue::Set(item_id),
        quantity: ActiveValue::Set(quantity),
        equipped: ActiveValue::Set(false),
        notes: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
