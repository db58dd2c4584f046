//! Campaign groups, membership and attached cards.
//!
//! A missing group is reported as 404 before membership-based permissions are
//! evaluated.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::group::Position,
    server::{
        data::{card::CardRepository, group::GroupRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            access::{authorize, Action, Actor},
            group::{CreateGroupParams, Group, GroupDetail, MemberGroup, UpdateGroupParams},
        },
    },
};

pub struct GroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Groups the caller belongs to with the caller's own position.
    pub async fn get_for_user(&self, actor: &Actor) -> Result<Vec<MemberGroup>, AppError> {
        Ok(GroupRepository::new(self.db)
            .get_for_member(actor.id())
            .await?)
    }

    /// Gets a group with members and attached cards.
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - The group
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AuthError::AccessDenied)` - Caller is neither a member nor a game master
    pub async fn get_by_id(&self, actor: &Actor, group_id: i32) -> Result<GroupDetail, AppError> {
        let repo = GroupRepository::new(self.db);
        let group = find_group(self.db, group_id).await?;

        let position = repo.get_position(group.id, actor.id()).await?;
        if !authorize(actor, Action::ViewGroup(position)) {
            return Err(denied(actor, "У вас нет доступа к этой группе"));
        }

        let members = repo.get_members(group.id).await?;
        let cards = repo.get_cards(group.id).await?;

        Ok(GroupDetail {
            group,
            members,
            cards,
        })
    }

    /// Creates a group with the caller as its Dungeon Master.
    ///
    /// # Returns
    /// - `Ok(Group)` - The created group
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AuthError::AccessDenied)` - Caller is not a game master
    pub async fn create(&self, actor: &Actor, params: CreateGroupParams) -> Result<Group, AppError> {
        if !authorize(actor, Action::CreateGroup) {
            return Err(denied(actor, "У вас нет прав на создание групп"));
        }
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Название группы обязательно".to_string()));
        }

        let txn = self.db.begin().await?;
        let repo = GroupRepository::new(&txn);

        let group = repo.create(params.name, params.description).await?;
        repo.add_member(group.id, actor.id(), Position::DungeonMaster)
            .await?;

        txn.commit().await?;

        tracing::info!("User {} created group {} ({})", actor.id(), group.id, group.name);

        Ok(group)
    }

    /// Updates name and/or description.
    ///
    /// # Returns
    /// - `Ok(Group)` - The updated group
    /// - `Err(AppError::NotFound)` - No group with that id
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AuthError::AccessDenied)` - Caller is neither a game master nor the group's captain
    pub async fn update(&self, actor: &Actor, params: UpdateGroupParams) -> Result<Group, AppError> {
        let txn = self.db.begin().await?;

        let mut group = find_group(&txn, params.id).await?;
        ensure_can_manage(&txn, actor, group.id, "У вас нет прав на редактирование этой группы")
            .await?;

        if let Some(name) = params.name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Название группы обязательно".to_string()));
            }
            group.name = name;
        }
        if let Some(description) = params.description {
            group.description = description;
        }

        let group = GroupRepository::new(&txn).update(&group).await?;
        txn.commit().await?;

        Ok(group)
    }

    /// Adds a user to the group.
    ///
    /// # Arguments
    /// - `user_id` - User to add; `None` is rejected
    /// - `position` - In-group rank, `Member` when absent
    ///
    /// # Returns
    /// - `Ok(GroupDetail)` - The group after the change
    /// - `Err(AppError::BadRequest)` - Missing user id
    /// - `Err(AppError::NotFound)` - Group or user does not exist
    /// - `Err(AppError::Conflict)` - User is already a member
    /// - `Err(AuthError::AccessDenied)` - Caller may not manage the group
    pub async fn add_member(
        &self,
        actor: &Actor,
        group_id: i32,
        user_id: Option<i32>,
        position: Option<Position>,
    ) -> Result<GroupDetail, AppError> {
        let txn = self.db.begin().await?;
        let repo = GroupRepository::new(&txn);

        let group = find_group(&txn, group_id).await?;
        ensure_can_manage(
            &txn,
            actor,
            group.id,
            "У вас нет прав на добавление пользователей в эту группу",
        )
        .await?;

        let Some(user_id) = user_id else {
            return Err(AppError::BadRequest("ID пользователя обязателен".to_string()));
        };
        if UserRepository::new(&txn).find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("Пользователь не найден".to_string()));
        }
        if repo.get_position(group.id, user_id).await?.is_some() {
            return Err(AppError::Conflict(
                "Пользователь уже состоит в группе".to_string(),
            ));
        }

        repo.add_member(group.id, user_id, position.unwrap_or_default())
            .await?;

        let members = repo.get_members(group.id).await?;
        let cards = repo.get_cards(group.id).await?;

        txn.commit().await?;

        Ok(GroupDetail {
            group,
            members,
            cards,
        })
    }

    /// Attaches a card to the group's collection.
    ///
    /// # Returns
    /// - `Ok(())` - Card attached
    /// - `Err(AppError::BadRequest)` - Missing card id
    /// - `Err(AppError::NotFound)` - Group or card does not exist
    /// - `Err(AppError::Conflict)` - Card is already attached
    /// - `Err(AuthError::AccessDenied)` - Caller may not manage the group
    pub async fn attach_card(
        &self,
        actor: &Actor,
        group_id: i32,
        card_id: Option<i32>,
    ) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = GroupRepository::new(&txn);

        let group = find_group(&txn, group_id).await?;
        ensure_can_manage(&txn, actor, group.id, "У вас нет прав на редактирование этой группы")
            .await?;

        let Some(card_id) = card_id else {
            return Err(AppError::BadRequest("ID карточки обязателен".to_string()));
        };
        if CardRepository::new(&txn).find_by_id(card_id).await?.is_none() {
            return Err(AppError::NotFound("Карточка не найдена".to_string()));
        }
        if repo.has_card(group.id, card_id).await? {
            return Err(AppError::Conflict(
                "Карточка уже добавлена в группу".to_string(),
            ));
        }

        repo.attach_card(group.id, card_id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Removes a card from the group's collection.
    pub async fn detach_card(&self, actor: &Actor, group_id: i32, card_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let group = find_group(&txn, group_id).await?;
        ensure_can_manage(&txn, actor, group.id, "У вас нет прав на редактирование этой группы")
            .await?;

        if !GroupRepository::new(&txn).detach_card(group.id, card_id).await? {
            return Err(AppError::NotFound(
                "Карточка не прикреплена к группе".to_string(),
            ));
        }

        txn.commit().await?;

        Ok(())
    }

    /// Deletes a group with its memberships, card attachments and ledger.
    ///
    /// Administrators only.
    pub async fn delete(&self, actor: &Actor, group_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;

        let group = find_group(&txn, group_id).await?;
        if !authorize(actor, Action::DeleteGroup) {
            return Err(denied(actor, "У вас нет прав на удаление этой группы"));
        }

        GroupRepository::new(&txn).delete(group.id).await?;
        txn.commit().await?;

        tracing::info!("User {} deleted group {}", actor.id(), group.id);

        Ok(())
    }
}

pub(crate) async fn find_group<C: ConnectionTrait>(conn: &C, group_id: i32) -> Result<Group, AppError> {
    GroupRepository::new(conn)
        .find_by_id(group_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Группа не найдена".to_string()))
}

async fn ensure_can_manage<C: ConnectionTrait>(
    conn: &C,
    actor: &Actor,
    group_id: i32,
    reason: &str,
) -> Result<(), AppError> {
    let position = GroupRepository::new(conn)
        .get_position(group_id, actor.id())
        .await?;

    if !authorize(actor, Action::ManageGroup(position)) {
        return Err(denied(actor, reason));
    }

    Ok(())
}

fn denied(actor: &Actor, reason: &str) -> AppError {
    AuthError::AccessDenied(actor.id(), reason.to_string()).into()
}
