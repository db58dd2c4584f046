//! Role factory and role assignment helpers.

use crate::factory::helpers::next_id;
use entity::prelude::Role;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Names of the built-in roles, matching the seed migration.
pub const SYSTEM_ROLE_NAMES: [&str; 6] = [
    "Administrator",
    "Dungeon Master",
    "Card Creator",
    "Player",
    "Group Captain",
    "Group Vice-Captain",
];

/// Factory for creating custom roles.
pub struct RoleFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> RoleFactory<'a> {
    /// Defaults: name `"ROLE_{id}"`, empty description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("ROLE_{}", next_id()),
            description: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub async fn build(self) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a role with default values.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    RoleFactory::new(db).build().await
}

/// Inserts the six system roles, skipping any that already exist.
///
/// # Returns
/// - `Ok(Vec<entity::role::Model>)` - All system roles in declaration order
/// - `Err(DbErr)` - Database error during insert
pub async fn create_system_roles(
    db: &DatabaseConnection,
) -> Result<Vec<entity::role::Model>, DbErr> {
    let mut roles = Vec::with_capacity(SYSTEM_ROLE_NAMES.len());

    for name in SYSTEM_ROLE_NAMES {
        let existing = Role::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(db)
            .await?;

        let role = match existing {
            Some(role) => role,
            None => RoleFactory::new(db).name(name).build().await?,
        };
        roles.push(role);
    }

    Ok(roles)
}

/// Grants a role to a user.
pub async fn assign_role(
    db: &DatabaseConnection,
    user_id: i32,
    role_id: i32,
) -> Result<entity::user_role::Model, DbErr> {
    entity::user_role::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        role_id: ActiveValue::Set(role_id),
    }
    .insert(db)
    .await
}
