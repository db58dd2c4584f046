//! Role data repository.
//!
//! Covers the `role` table and the `user_role` assignment table.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::role::Role;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all roles ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Role>, DbErr> {
        let entities = entity::prelude::Role::find()
            .order_by_asc(entity::role::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Role::from_entity).collect())
    }

    pub async fn find_by_id(&self, role_id: i32) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find_by_id(role_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Role::from_entity))
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<Role>, DbErr> {
        let entity = entity::prelude::Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(Role::from_entity))
    }

    /// Creates a role.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(DbErr)` - Database error, including a unique violation on `name`
    pub async fn create(&self, name: String, description: String) -> Result<Role, DbErr> {
        let entity = entity::role::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Role::from_entity(entity))
    }

    /// Returns the role with `name`, creating it with `description` when missing.
    pub async fn find_or_create(&self, name: &str, description: &str) -> Result<Role, DbErr> {
        if let Some(role) = self.find_by_name(name).await? {
            return Ok(role);
        }

        self.create(name.to_string(), description.to_string()).await
    }

    /// Updates a role's name and/or description; absent values are kept.
    ///
    /// # Returns
    /// - `Ok(Role)` - The updated role
    /// - `Err(DbErr::RecordNotUpdated)` - No role with that id
    pub async fn update(
        &self,
        role_id: i32,
        name: Option<String>,
        description: Option<String>,
    ) -> Result<Role, DbErr> {
        let mut model = entity::role::ActiveModel {
            id: ActiveValue::Unchanged(role_id),
            ..Default::default()
        };
        if let Some(name) = name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = description {
            model.description = ActiveValue::Set(description);
        }

        if !model.is_changed() {
            return self
                .find_by_id(role_id)
                .await?
                .ok_or(DbErr::RecordNotUpdated);
        }

        let entity = model.update(self.db).await?;

        Ok(Role::from_entity(entity))
    }

    /// Deletes a role together with its assignments.
    pub async fn delete(&self, role_id: i32) -> Result<(), DbErr> {
        entity::prelude::UserRole::delete_many()
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;

        entity::prelude::Role::delete_by_id(role_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn is_assigned(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let link = entity::prelude::UserRole::find_by_id((user_id, role_id))
            .one(self.db)
            .await?;

        Ok(link.is_some())
    }

    pub async fn assign(&self, user_id: i32, role_id: i32) -> Result<(), DbErr> {
        entity::user_role::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            role_id: ActiveValue::Set(role_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes an assignment.
    ///
    /// # Returns
    /// - `Ok(true)` - Assignment removed
    /// - `Ok(false)` - User did not hold the role
    pub async fn unassign(&self, user_id: i32, role_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserRole::delete_by_id((user_id, role_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Ids of users holding the role.
    pub async fn get_holder_ids(&self, role_id: i32) -> Result<Vec<i32>, DbErr> {
        let links = entity::prelude::UserRole::find()
            .filter(entity::user_role::Column::RoleId.eq(role_id))
            .all(self.db)
            .await?;

        Ok(links.into_iter().map(|link| link.user_id).collect())
    }
}
