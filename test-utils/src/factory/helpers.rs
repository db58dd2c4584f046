//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user holding the named system role.
///
/// Seeds the system roles first if the role is missing.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - System role name such as `"Dungeon Master"`
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user
/// - `Err(DbErr)` - Database error during creation
pub async fn create_user_with_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<entity::user::Model, DbErr> {
    let roles = crate::factory::role::create_system_roles(db).await?;
    let role = roles
        .into_iter()
        .find(|r| r.name == role_name)
        .ok_or_else(|| DbErr::RecordNotFound(format!("role {}", role_name)))?;

    let user = crate::factory::user::create_user(db).await?;
    crate::factory::role::assign_role(db, user.id, role.id).await?;

    Ok(user)
}
