//! User service for business logic.
//!
//! Lists users for administrators and toggles admin status. Admin status is the
//! admin flag and the Administrator role together; both change in one transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::role::SystemRole,
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::AppError,
        model::user::User,
        service::role::ensure_other_admin_exists,
    },
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every user ordered by username.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db).get_all().await?)
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(User)` - User with roles
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Пользователь не найден".to_string()))
    }

    /// Grants or revokes admin status.
    ///
    /// Granting sets the flag and attaches the Administrator role (creating the role
    /// row if needed). Revoking clears both, unless the user is the last administrator.
    ///
    /// # Arguments
    /// - `user_id` - User to change
    /// - `is_admin` - Desired admin status; `None` leaves the user unchanged
    ///
    /// # Returns
    /// - `Ok(User)` - The user after the change
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AuthError::AccessDenied)` - Revoking the last administrator
    pub async fn set_admin(&self, user_id: i32, is_admin: Option<bool>) -> Result<User, AppError> {
        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);
        let role_repo = RoleRepository::new(&txn);

        let user = user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Пользователь не найден".to_string()))?;

        let admin = SystemRole::Administrator;
        match is_admin {
            Some(true) => {
                user_repo.set_admin(user.id, true).await?;
                let role = role_repo
                    .find_or_create(admin.as_str(), admin.description())
                    .await?;
                if !role_repo.is_assigned(user.id, role.id).await? {
                    role_repo.assign(user.id, role.id).await?;
                }
            }
            Some(false) => {
                let admin_role = role_repo.find_by_name(admin.as_str()).await?;
                let holds_role = match &admin_role {
                    Some(role) => role_repo.is_assigned(user.id, role.id).await?,
                    None => false,
                };

                if user.is_admin || holds_role {
                    ensure_other_admin_exists(&txn, user.id).await?;
                }

                user_repo.set_admin(user.id, false).await?;
                if let (Some(role), true) = (admin_role, holds_role) {
                    role_repo.unassign(user.id, role.id).await?;
                }
            }
            None => {}
        }

        let user = user_repo
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Пользователь не найден".to_string()))?;

        txn.commit().await?;

        Ok(user)
    }
}
