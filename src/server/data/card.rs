//! Card data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::card::{CardType, Content},
    server::{model::card::Card, util::parse::encode_json},
};

pub struct CardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a card owned by `user_id`.
    ///
    /// # Arguments
    /// - `user_id` - Owner of the new card
    /// - `name` - Card name
    /// - `card_type` - Card type, fixed for the card's lifetime
    /// - `content` - Already validated content map
    /// - `is_public` - Visibility flag
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        user_id: i32,
        name: String,
        card_type: CardType,
        content: &Content,
        is_public: bool,
    ) -> Result<Card, DbErr> {
        let now = Utc::now();
        let entity = entity::card::ActiveModel {
            name: ActiveValue::Set(name),
            card_type: ActiveValue::Set(card_type.as_str().to_string()),
            user_id: ActiveValue::Set(user_id),
            content: ActiveValue::Set(encode_json("card.content", content)?),
            is_public: ActiveValue::Set(is_public),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Card::from_entity(entity)
    }

    pub async fn find_by_id(&self, card_id: i32) -> Result<Option<Card>, DbErr> {
        entity::prelude::Card::find_by_id(card_id)
            .one(self.db)
            .await?
            .map(Card::from_entity)
            .transpose()
    }

    /// Gets cards, newest first.
    ///
    /// # Arguments
    /// - `card_type` - Restrict to one card type
    /// - `owner_id` - Restrict to cards owned by this user
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - Matching cards
    /// - `Err(DbErr)` - Database error or malformed stored card
    pub async fn get_filtered(
        &self,
        card_type: Option<CardType>,
        owner_id: Option<i32>,
    ) -> Result<Vec<Card>, DbErr> {
        let mut query = entity::prelude::Card::find();

        if let Some(card_type) = card_type {
            query = query.filter(entity::card::Column::CardType.eq(card_type.as_str()));
        }
        if let Some(owner_id) = owner_id {
            query = query.filter(entity::card::Column::UserId.eq(owner_id));
        }

        let entities = query
            .order_by_desc(entity::card::Column::CreatedAt)
            .order_by_desc(entity::card::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(Card::from_entity).collect()
    }

    /// Writes name, content and visibility of an existing card and bumps `updated_at`.
    pub async fn update(&self, card: &Card) -> Result<Card, DbErr> {
        let entity = entity::card::ActiveModel {
            id: ActiveValue::Unchanged(card.id),
            name: ActiveValue::Set(card.name.clone()),
            content: ActiveValue::Set(encode_json("card.content", &card.content)?),
            is_public: ActiveValue::Set(card.is_public),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Card::from_entity(entity)
    }

    /// Deletes a card and every row referencing it.
    ///
    /// Removes inventory rows where the card is carrier or item, card links in both
    /// directions and group attachments before the card itself.
    pub async fn delete(&self, card_id: i32) -> Result<(), DbErr> {
        entity::prelude::CardItem::delete_many()
            .filter(
                Condition::any()
                    .add(entity::card_item::Column::CardId.eq(card_id))
                    .add(entity::card_item::Column::ItemId.eq(card_id)),
            )
            .exec(self.db)
            .await?;

        entity::prelude::CardRelation::delete_many()
            .filter(
                Condition::any()
                    .add(entity::card_relation::Column::CardId.eq(card_id))
                    .add(entity::card_relation::Column::LinkedCardId.eq(card_id)),
            )
            .exec(self.db)
            .await?;

        entity::prelude::GroupCard::delete_many()
            .filter(entity::group_card::Column::CardId.eq(card_id))
            .exec(self.db)
            .await?;

        entity::prelude::Card::delete_by_id(card_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Card type and raw content of every card.
    pub async fn get_all_contents(&self) -> Result<Vec<(String, serde_json::Value)>, DbErr> {
        entity::prelude::Card::find()
            .select_only()
            .column(entity::card::Column::CardType)
            .column(entity::card::Column::Content)
            .into_tuple()
            .all(self.db)
            .await
    }
}
