//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{UserDto, UserRefDto},
    server::model::role::RoleSummary,
};

/// User with Discord identity, admin flag and held roles.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    /// Roles ordered by name.
    pub roles: Vec<RoleSummary>,
}

impl User {
    /// Converts an entity model plus its role rows to a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `roles` - Role rows joined through `user_role`
    ///
    /// # Returns
    /// - `User` - Domain model with roles sorted by name
    pub fn from_entity(entity: entity::user::Model, roles: Vec<entity::role::Model>) -> Self {
        let mut roles: Vec<RoleSummary> = roles.into_iter().map(RoleSummary::from_entity).collect();
        roles.sort_by(|a, b| a.name.cmp(&b.name));

        Self {
            id: entity.id,
            discord_id: entity.discord_id,
            username: entity.username,
            avatar: entity.avatar,
            is_admin: entity.is_admin,
            last_login: entity.last_login,
            created_at: entity.created_at,
            roles,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            discord_id: self.discord_id,
            username: self.username,
            avatar: self.avatar,
            is_admin: self.is_admin,
            last_login: self.last_login,
            created_at: self.created_at,
            roles: self.roles.into_iter().map(RoleSummary::into_dto).collect(),
        }
    }
}

/// Public identity embedded in memberships and ledger entries.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRef {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}

impl UserRef {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            avatar: entity.avatar,
        }
    }

    pub fn into_dto(self) -> UserRefDto {
        UserRefDto {
            id: self.id,
            username: self.username,
            avatar: self.avatar,
        }
    }
}

/// Parameters for upserting a user after a Discord login.
///
/// Existing users get username, avatar and last login refreshed; the admin
/// flag is only ever raised, never cleared, by a login.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
    /// Forces the admin flag on when true.
    pub force_admin: bool,
}
