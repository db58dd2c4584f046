//! Role management and assignment.
//!
//! Assigning or removing the Administrator role also sets or clears the user's
//! admin flag, and no demotion may leave the system without an administrator.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::role::SystemRole,
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            role::{CreateRoleParams, Role, UpdateRoleParams},
            user::User,
        },
    },
};

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all roles ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Role>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }

    /// Creates a custom role.
    ///
    /// # Returns
    /// - `Ok(Role)` - The created role
    /// - `Err(AppError::BadRequest)` - Name is empty
    /// - `Err(AppError::Conflict)` - A role with that name exists
    pub async fn create(&self, params: CreateRoleParams) -> Result<Role, AppError> {
        if params.name.is_empty() {
            return Err(AppError::BadRequest("Название роли обязательно".to_string()));
        }

        let txn = self.db.begin().await?;
        let repo = RoleRepository::new(&txn);

        if repo.find_by_name(&params.name).await?.is_some() {
            return Err(AppError::Conflict(
                "Роль с таким названием уже существует".to_string(),
            ));
        }

        let role = repo.create(params.name, params.description).await?;
        txn.commit().await?;

        Ok(role)
    }

    /// Updates a role's name and/or description.
    ///
    /// System roles keep their names; only their description may change.
    ///
    /// # Returns
    /// - `Ok(Role)` - The updated role
    /// - `Err(AppError::NotFound)` - No role with that id
    /// - `Err(AppError::BadRequest)` - New name is empty
    /// - `Err(AppError::Conflict)` - Another role already has the new name
    /// - `Err(AuthError::AccessDenied)` - Attempt to rename a system role
    pub async fn update(&self, actor_id: i32, params: UpdateRoleParams) -> Result<Role, AppError> {
        let txn = self.db.begin().await?;
        let repo = RoleRepository::new(&txn);

        let role = repo
            .find_by_id(params.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Роль не найдена".to_string()))?;

        let name = params.name.filter(|name| *name != role.name);
        if let Some(name) = &name {
            if name.is_empty() {
                return Err(AppError::BadRequest("Название роли обязательно".to_string()));
            }
            if role.system_role().is_some() {
                return Err(AuthError::AccessDenied(
                    actor_id,
                    "Невозможно изменить название системной роли".to_string(),
                )
                .into());
            }
            if repo.find_by_name(name).await?.is_some() {
                return Err(AppError::Conflict(
                    "Роль с таким названием уже существует".to_string(),
                ));
            }
        }

        let role = repo.update(role.id, name, params.description).await?;
        txn.commit().await?;

        Ok(role)
    }

    /// Deletes a custom role and its assignments.
    ///
    /// # Returns
    /// - `Ok(())` - Role deleted
    /// - `Err(AppError::NotFound)` - No role with that id
    /// - `Err(AuthError::AccessDenied)` - Role is a system role
    pub async fn delete(&self, actor_id: i32, role_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let repo = RoleRepository::new(&txn);

        let role = repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Роль не найдена".to_string()))?;

        if role.system_role().is_some() {
            return Err(AuthError::AccessDenied(
                actor_id,
                "Невозможно удалить системную роль".to_string(),
            )
            .into());
        }

        repo.delete(role.id).await?;
        txn.commit().await?;

        Ok(())
    }

    /// Assigns a role to a user.
    ///
    /// # Returns
    /// - `Ok(())` - Role assigned; Administrator also sets the admin flag
    /// - `Err(AppError::NotFound)` - User or role missing
    /// - `Err(AppError::Conflict)` - User already holds the role
    pub async fn assign(&self, user_id: i32, role_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let role_repo = RoleRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("Пользователь не найден".to_string()));
        }
        let role = role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Роль не найдена".to_string()))?;

        if role_repo.is_assigned(user_id, role.id).await? {
            return Err(AppError::Conflict(
                "Пользователь уже имеет эту роль".to_string(),
            ));
        }

        role_repo.assign(user_id, role.id).await?;
        if role.system_role() == Some(SystemRole::Administrator) {
            user_repo.set_admin(user_id, true).await?;
        }

        txn.commit().await?;

        Ok(())
    }

    /// Removes a role from a user.
    ///
    /// # Returns
    /// - `Ok(())` - Role removed; Administrator also clears the admin flag
    /// - `Err(AppError::NotFound)` - User or role missing
    /// - `Err(AppError::Conflict)` - User does not hold the role
    /// - `Err(AuthError::AccessDenied)` - User is the last administrator
    pub async fn remove(&self, user_id: i32, role_id: i32) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let role_repo = RoleRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("Пользователь не найден".to_string()));
        }
        let role = role_repo
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Роль не найдена".to_string()))?;

        if !role_repo.is_assigned(user_id, role.id).await? {
            return Err(AppError::Conflict(
                "Пользователь не имеет этой роли".to_string(),
            ));
        }

        if role.system_role() == Some(SystemRole::Administrator) {
            ensure_other_admin_exists(&txn, user_id).await?;
            user_repo.set_admin(user_id, false).await?;
        }
        role_repo.unassign(user_id, role.id).await?;

        txn.commit().await?;

        Ok(())
    }

    /// Users holding a role, ordered by username.
    ///
    /// # Returns
    /// - `Ok(Vec<User>)` - Holders with their roles
    /// - `Err(AppError::NotFound)` - No role with that id
    pub async fn get_holders(&self, role_id: i32) -> Result<Vec<User>, AppError> {
        let role_repo = RoleRepository::new(self.db);

        if role_repo.find_by_id(role_id).await?.is_none() {
            return Err(AppError::NotFound("Роль не найдена".to_string()));
        }

        let user_ids = role_repo.get_holder_ids(role_id).await?;

        Ok(UserRepository::new(self.db).get_by_ids(user_ids).await?)
    }
}

/// Fails unless some user other than `user_id` is an administrator.
///
/// Counts users with the admin flag or the Administrator role. Run it on the
/// same transaction as the demotion it guards.
///
/// # Returns
/// - `Ok(())` - Another administrator exists
/// - `Err(AuthError::AccessDenied)` - `user_id` is the last administrator
pub async fn ensure_other_admin_exists<C: ConnectionTrait>(
    conn: &C,
    user_id: i32,
) -> Result<(), AppError> {
    let admin_role = RoleRepository::new(conn)
        .find_by_name(SystemRole::Administrator.as_str())
        .await?;

    let others = UserRepository::new(conn)
        .count_other_admins(user_id, admin_role.map(|role| role.id))
        .await?;

    if others == 0 {
        return Err(AuthError::AccessDenied(
            user_id,
            "Невозможно удалить последнего администратора системы".to_string(),
        )
        .into());
    }

    Ok(())
}
