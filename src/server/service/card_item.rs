//! Card inventories.
//!
//! Inventory rows hang off the carrier card, so every operation is checked
//! against the carrier's view or edit permission.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::card::CardType,
    server::{
        data::{card::CardRepository, card_item::CardItemRepository},
        error::AppError,
        model::{
            access::{authorize, Action, Actor},
            card::{AddCardItemParams, CardItem, CardItemValues, LinkedCard, UpdateCardItemParams},
        },
        service::card::{denied, not_found},
    },
};

pub struct CardItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Items carried by a card the caller may view, in the order they were added.
    pub async fn get_items(&self, actor: &Actor, card_id: i32) -> Result<Vec<LinkedCard>, AppError> {
        let card = CardRepository::new(self.db)
            .find_by_id(card_id)
            .await?
            .ok_or_else(not_found)?;

        if !authorize(actor, Action::ViewCard(&card)) {
            return Err(denied(actor, "Нет доступа к этой карточке"));
        }

        Ok(CardItemRepository::new(self.db).get_items(card.id).await?)
    }

    /// Puts an item into a card's inventory.
    ///
    /// Adding an item the card already carries overwrites quantity, equipped
    /// flag and notes.
    ///
    /// # Returns
    /// - `Ok(CardItem)` - The stored inventory row
    /// - `Err(AppError::BadRequest)` - Missing item id, target is not an item card,
    ///   or quantity below 1
    /// - `Err(AppError::NotFound)` - Carrier or item card does not exist
    /// - `Err(AuthError::AccessDenied)` - Caller may not edit the carrier
    pub async fn add(&self, actor: &Actor, params: AddCardItemParams) -> Result<CardItem, AppError> {
        let Some(item_id) = params.item_id else {
            return Err(AppError::BadRequest("ID предмета обязателен".to_string()));
        };
        validate_quantity(params.values.quantity)?;

        let txn = self.db.begin().await?;
        let cards = CardRepository::new(&txn);

        let card = cards.find_by_id(params.card_id).await?.ok_or_else(not_found)?;
        if !authorize(actor, Action::EditCard(&card)) {
            return Err(denied(actor, "Нет прав на редактирование этой карточки"));
        }

        let item = cards
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Предмет не найден".to_string()))?;
        if item.card_type != CardType::Item {
            return Err(AppError::BadRequest(
                "Указанная карточка не является предметом".to_string(),
            ));
        }

        let card_item = CardItemRepository::new(&txn)
            .upsert(card.id, item.id, params.values)
            .await?;

        txn.commit().await?;

        Ok(card_item)
    }

    /// Patches an existing inventory row; absent values are kept.
    ///
    /// # Returns
    /// - `Ok(CardItem)` - The updated row
    /// - `Err(AppError::NotFound)` - Carrier missing or it does not carry the item
    /// - `Err(AppError::BadRequest)` - Quantity below 1
    /// - `Err(AuthError::AccessDenied)` - Caller may not edit the carrier
    pub async fn update(
        &self,
        actor: &Actor,
        params: UpdateCardItemParams,
    ) -> Result<CardItem, AppError> {
        let txn = self.db.begin().await?;

        let card = CardRepository::new(&txn)
            .find_by_id(params.card_id)
            .await?
            .ok_or_else(not_found)?;
        if !authorize(actor, Action::EditCard(&card)) {
            return Err(denied(actor, "Нет прав на редактирование этой карточки"));
        }

        let repo = CardItemRepository::new(&txn);
        let existing = repo
            .find(params.card_id, params.item_id)
            .await?
            .ok_or_else(item_not_carried)?;

        let values = CardItemValues {
            quantity: params.quantity.unwrap_or(existing.quantity),
            equipped: params.equipped.unwrap_or(existing.equipped),
            notes: params.notes.or(existing.notes),
        };
        validate_quantity(values.quantity)?;

        let card_item = repo.update(params.card_id, params.item_id, values).await?;
        txn.commit().await?;

        Ok(card_item)
    }

    /// Removes an item from a card's inventory.
    pub async fn remove(&self, actor: &Actor, card_id: i32, item_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let card = CardRepository::new(&txn)
            .find_by_id(card_id)
            .await?
            .ok_or_else(not_found)?;
        if !authorize(actor, Action::EditCard(&card)) {
            return Err(denied(actor, "Нет прав на редактирование этой карточки"));
        }

        if !CardItemRepository::new(&txn).delete(card_id, item_id).await? {
            return Err(item_not_carried());
        }

        txn.commit().await?;

        Ok(())
    }

    /// Cards carrying the given item.
    ///
    /// # Returns
    /// - `Ok(Vec<LinkedCard>)` - Carriers with their inventory rows
    /// - `Err(AppError::NotFound)` - No card with that id
    /// - `Err(AuthError::AccessDenied)` - Caller neither owns the item nor is a game master
    pub async fn get_usage(&self, actor: &Actor, item_id: i32) -> Result<Vec<LinkedCard>, AppError> {
        let item = CardRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Предмет не найден".to_string()))?;

        if !authorize(actor, Action::ViewItemUsage(&item)) {
            return Err(denied(actor, "Нет доступа к информации об использовании предмета"));
        }

        Ok(CardItemRepository::new(self.db).get_carriers(item.id).await?)
    }
}

fn validate_quantity(quantity: i32) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "Количество должно быть не меньше 1".to_string(),
        ));
    }

    Ok(())
}

fn item_not_carried() -> AppError {
    AppError::NotFound("Предмет не найден у этой карточки".to_string())
}
