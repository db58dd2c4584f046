//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records and their
//! role assignments, converting entity models to the `User` domain model (with
//! roles attached) at the infrastructure boundary.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use std::collections::{HashMap, HashSet};

use crate::server::model::user::{UpsertUserParam, User};

/// Repository providing database operations for user management.
///
/// Generic over the connection so the same methods run against the pool or
/// inside a service-owned transaction.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user from a Discord login.
    ///
    /// Inserts a new user or refreshes an existing user's username, avatar and last
    /// login time. The admin column is only written when `force_admin` is set, so a
    /// login never clears admin status.
    ///
    /// # Arguments
    /// - `param` - Discord identity and whether to force the admin flag on
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user with roles
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![
            entity::user::Column::Username,
            entity::user::Column::Avatar,
            entity::user::Column::LastLogin,
        ];

        if param.force_admin {
            update_columns.push(entity::user::Column::IsAdmin);
        }

        let now = Utc::now();
        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            username: ActiveValue::Set(param.username),
            avatar: ActiveValue::Set(param.avatar),
            is_admin: ActiveValue::Set(param.force_admin),
            last_login: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::DiscordId)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        self.with_roles(entity).await
    }

    /// Finds a user by id, with roles.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(user_id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(Some(self.with_roles(entity).await?))
    }

    /// Gets all users ordered by username, with roles.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Every user (empty if none exist)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        self.attach_roles(entities).await
    }

    /// Gets the users with the given ids, ordered by username, with roles.
    pub async fn get_by_ids(&self, user_ids: Vec<i32>) -> Result<Vec<User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .order_by_asc(entity::user::Column::Username)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        self.attach_roles(entities).await
    }

    /// Sets a user's admin flag.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag written
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::IsAdmin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Counts administrators other than `user_id`.
    ///
    /// A user counts when they have the admin flag or hold the role `admin_role_id`.
    ///
    /// # Arguments
    /// - `user_id` - User excluded from the count
    /// - `admin_role_id` - Id of the Administrator role row, if it exists
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of distinct other administrators
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_other_admins(
        &self,
        user_id: i32,
        admin_role_id: Option<i32>,
    ) -> Result<u64, DbErr> {
        let mut admin_ids: HashSet<i32> = entity::prelude::User::find()
            .filter(entity::user::Column::IsAdmin.eq(true))
            .filter(entity::user::Column::Id.ne(user_id))
            .all(self.db)
            .await?
            .into_iter()
            .map(|user| user.id)
            .collect();

        if let Some(role_id) = admin_role_id {
            let holders = entity::prelude::UserRole::find()
                .filter(entity::user_role::Column::RoleId.eq(role_id))
                .filter(entity::user_role::Column::UserId.ne(user_id))
                .all(self.db)
                .await?;
            admin_ids.extend(holders.into_iter().map(|link| link.user_id));
        }

        Ok(admin_ids.len() as u64)
    }

    /// Counts all users.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    async fn with_roles(&self, entity: entity::user::Model) -> Result<User, DbErr> {
        let roles = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::UserId.eq(entity.id))
            .find_also_related(entity::prelude::Role)
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(_, role)| role)
            .collect();

        Ok(User::from_entity(entity, roles))
    }

    async fn attach_roles(&self, entities: Vec<entity::user::Model>) -> Result<Vec<User>, DbErr> {
        let user_ids: Vec<i32> = entities.iter().map(|user| user.id).collect();

        let mut roles_by_user: HashMap<i32, Vec<entity::role::Model>> = HashMap::new();
        if !user_ids.is_empty() {
            let links = entity::prelude::UserRole::find()
                .filter(entity::user_role::Column::UserId.is_in(user_ids))
                .find_also_related(entity::prelude::Role)
                .all(self.db)
                .await?;

            for (link, role) in links {
                if let Some(role) = role {
                    roles_by_user.entry(link.user_id).or_default().push(role);
                }
            }
        }

        Ok(entities
            .into_iter()
            .map(|user| {
                let roles = roles_by_user.remove(&user.id).unwrap_or_default();
                User::from_entity(user, roles)
            })
            .collect())
    }
}
