//! Card inventory repository.
//!
//! An inventory row links a carrier card (`card_id`) to an item card (`item_id`).

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};
use std::collections::HashMap;

use crate::server::model::card::{Card, CardItem, CardItemValues, LinkedCard};

pub struct CardItemRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CardItemRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Items carried by `card_id` in the order they were added, each with its
    /// inventory row.
    pub async fn get_items(&self, card_id: i32) -> Result<Vec<LinkedCard>, DbErr> {
        let rows = entity::prelude::CardItem::find()
            .filter(entity::card_item::Column::CardId.eq(card_id))
            .order_by_asc(entity::card_item::Column::CreatedAt)
            .order_by_asc(entity::card_item::Column::ItemId)
            .all(self.db)
            .await?;

        self.link(rows, |row| row.item_id).await
    }

    /// Cards carrying `item_id`, each with its inventory row.
    pub async fn get_carriers(&self, item_id: i32) -> Result<Vec<LinkedCard>, DbErr> {
        let rows = entity::prelude::CardItem::find()
            .filter(entity::card_item::Column::ItemId.eq(item_id))
            .order_by_asc(entity::card_item::Column::CreatedAt)
            .order_by_asc(entity::card_item::Column::CardId)
            .all(self.db)
            .await?;

        self.link(rows, |row| row.card_id).await
    }

    pub async fn find(&self, card_id: i32, item_id: i32) -> Result<Option<CardItem>, DbErr> {
        let entity = entity::prelude::CardItem::find_by_id((card_id, item_id))
            .one(self.db)
            .await?;

        Ok(entity.map(CardItem::from_entity))
    }

    /// Inserts an inventory row or overwrites quantity, equipped and notes of an
    /// existing one.
    ///
    /// # Returns
    /// - `Ok(CardItem)` - The stored row
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(
        &self,
        card_id: i32,
        item_id: i32,
        values: CardItemValues,
    ) -> Result<CardItem, DbErr> {
        let now = Utc::now();
        entity::prelude::CardItem::insert(entity::card_item::ActiveModel {
            card_id: ActiveValue::Set(card_id),
            item_id: ActiveValue::Set(item_id),
            quantity: ActiveValue::Set(values.quantity),
            equipped: ActiveValue::Set(values.equipped),
            notes: ActiveValue::Set(values.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        })
        .on_conflict(
            OnConflict::columns([
                entity::card_item::Column::CardId,
                entity::card_item::Column::ItemId,
            ])
            .update_columns([
                entity::card_item::Column::Quantity,
                entity::card_item::Column::Equipped,
                entity::card_item::Column::Notes,
                entity::card_item::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        self.find(card_id, item_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("card_item ({}, {})", card_id, item_id)))
    }

    /// Overwrites an existing row with `values`.
    pub async fn update(
        &self,
        card_id: i32,
        item_id: i32,
        values: CardItemValues,
    ) -> Result<CardItem, DbErr> {
        let entity = entity::card_item::ActiveModel {
            card_id: ActiveValue::Unchanged(card_id),
            item_id: ActiveValue::Unchanged(item_id),
            quantity: ActiveValue::Set(values.quantity),
            equipped: ActiveValue::Set(values.equipped),
            notes: ActiveValue::Set(values.notes),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(CardItem::from_entity(entity))
    }

    /// Removes an item from an inventory.
    ///
    /// # Returns
    /// - `Ok(true)` - Row removed
    /// - `Ok(false)` - The card did not carry the item
    pub async fn delete(&self, card_id: i32, item_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::CardItem::delete_by_id((card_id, item_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    async fn link(
        &self,
        rows: Vec<entity::card_item::Model>,
        other_side: fn(&entity::card_item::Model) -> i32,
    ) -> Result<Vec<LinkedCard>, DbErr> {
        let card_ids: Vec<i32> = rows.iter().map(other_side).collect();
        if card_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut cards: HashMap<i32, Card> = entity::prelude::Card::find()
            .filter(entity::card::Column::Id.is_in(card_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|card| Card::from_entity(card).map(|card| (card.id, card)))
            .collect::<Result<_, _>>()?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let card = cards.remove(&other_side(&row))?;
                Some(LinkedCard {
                    card,
                    card_item: CardItem::from_entity(row),
                })
            })
            .collect())
    }
}
