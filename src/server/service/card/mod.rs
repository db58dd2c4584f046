//! Card store.
//!
//! Every operation resolves the card first (404), then checks the caller's
//! capability through [`authorize`] (403), then validates and writes inside a
//! transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::card::CardType,
    server::{
        data::{card::CardRepository, field::FieldRepository},
        error::{auth::AuthError, AppError},
        model::{
            access::{authorize, Action, Actor},
            card::{Card, CreateCardParams, UpdateCardParams},
        },
    },
};

pub mod content;

use content::validate_content;

pub struct CardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cards owned by the caller, newest first.
    pub async fn get_own(&self, actor: &Actor) -> Result<Vec<Card>, AppError> {
        Ok(CardRepository::new(self.db)
            .get_filtered(None, Some(actor.id()))
            .await?)
    }

    /// Cards of one type.
    ///
    /// Characters: the caller's own, or all of them for administrators and Dungeon
    /// Masters. NPCs and items: administrators and Dungeon Masters only.
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - Visible cards of that type
    /// - `Err(AuthError::AccessDenied)` - Caller may not list that type
    pub async fn get_by_type(&self, actor: &Actor, card_type: CardType) -> Result<Vec<Card>, AppError> {
        if !authorize(actor, Action::ListCards(card_type)) {
            return Err(denied(actor, "Нет доступа к карточкам этого типа"));
        }

        let owner = if authorize(actor, Action::ListAllCharacters) {
            None
        } else {
            Some(actor.id())
        };

        Ok(CardRepository::new(self.db)
            .get_filtered(Some(card_type), owner)
            .await?)
    }

    /// Gets a card the caller may view.
    ///
    /// # Returns
    /// - `Ok(Card)` - The card
    /// - `Err(AppError::NotFound)` - No card with that id
    /// - `Err(AuthError::AccessDenied)` - Caller may not view it
    pub async fn get_by_id(&self, actor: &Actor, card_id: i32) -> Result<Card, AppError> {
        let card = self.find(card_id).await?;

        if !authorize(actor, Action::ViewCard(&card)) {
            return Err(denied(actor, "Нет доступа к этой карточке"));
        }

        Ok(card)
    }

    /// Creates a card owned by the caller.
    ///
    /// # Returns
    /// - `Ok(Card)` - The created card
    /// - `Err(AppError::BadRequest)` - Empty name or invalid content
    /// - `Err(AuthError::AccessDenied)` - Caller may not create cards of that type
    pub async fn create(&self, actor: &Actor, params: CreateCardParams) -> Result<Card, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Имя карточки обязательно".to_string()));
        }
        if !authorize(actor, Action::CreateCard(params.card_type)) {
            return Err(denied(actor, "Нет прав на создание карточек этого типа"));
        }

        let txn = self.db.begin().await?;

        let fields = FieldRepository::new(&txn)
            .get_all(Some(params.card_type.into()))
            .await?;
        let content = validate_content(params.card_type, &fields, params.content)?;

        let card = CardRepository::new(&txn)
            .create(
                actor.id(),
                params.name,
                params.card_type,
                &content,
                params.is_public,
            )
            .await?;

        txn.commit().await?;

        Ok(card)
    }

    /// Updates name, visibility and/or content of a card.
    ///
    /// Supplied content replaces the whole map and is validated like on create.
    ///
    /// # Returns
    /// - `Ok(Card)` - The updated card
    /// - `Err(AppError::NotFound)` - No card with that id
    /// - `Err(AppError::BadRequest)` - Empty name or invalid content
    /// - `Err(AuthError::AccessDenied)` - Caller may not edit it
    pub async fn update(&self, actor: &Actor, params: UpdateCardParams) -> Result<Card, AppError> {
        let txn = self.db.begin().await?;
        let repo = CardRepository::new(&txn);

        let mut card = repo.find_by_id(params.id).await?.ok_or_else(not_found)?;
        if !authorize(actor, Action::EditCard(&card)) {
            return Err(denied(actor, "Нет прав на редактирование этой карточки"));
        }

        if let Some(name) = params.name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Имя карточки обязательно".to_string()));
            }
            card.name = name;
        }
        if let Some(is_public) = params.is_public {
            card.is_public = is_public;
        }
        if let Some(content) = params.content {
            let fields = FieldRepository::new(&txn)
                .get_all(Some(card.card_type.into()))
                .await?;
            card.content = validate_content(card.card_type, &fields, content)?;
        }

        let card = repo.update(&card).await?;
        txn.commit().await?;

        Ok(card)
    }

    /// Deletes a card with its inventory rows, links and group attachments.
    ///
    /// # Returns
    /// - `Ok(())` - Card deleted
    /// - `Err(AppError::NotFound)` - No card with that id
    /// - `Err(AuthError::AccessDenied)` - Caller may not delete it
    pub async fn delete(&self, actor: &Actor, card_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = CardRepository::new(&txn);

        let card = repo.find_by_id(card_id).await?.ok_or_else(not_found)?;
        if !authorize(actor, Action::DeleteCard(&card)) {
            return Err(denied(actor, "Нет прав на удаление этой карточки"));
        }

        repo.delete(card.id).await?;
        txn.commit().await?;

        Ok(())
    }

    async fn find(&self, card_id: i32) -> Result<Card, AppError> {
        CardRepository::new(self.db)
            .find_by_id(card_id)
            .await?
            .ok_or_else(not_found)
    }
}

pub(crate) fn not_found() -> AppError {
    AppError::NotFound("Карточка не найдена".to_string())
}

pub(crate) fn denied(actor: &Actor, reason: &str) -> AppError {
    AuthError::AccessDenied(actor.id(), reason.to_string()).into()
}
