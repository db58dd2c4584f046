use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(Actor) with the admin flag
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let admin = factory::user::UserFactory::new(db)
        .username("AdminUser")
        .admin(true)
        .build()
        .await?;
    let headers = bearer_for(db, &tokens, admin.id).await;

    let actor = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(actor.user.username, "AdminUser");
    assert!(actor.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Verifies that holding the Dungeon Master role does not satisfy an admin
/// requirement.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let headers = bearer_for(db, &tokens, dm.id).await;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests admin user passes every role requirement.
///
/// Expected: Ok(Actor) without holding any role
#[tokio::test]
async fn admin_passes_role_requirements() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let headers = bearer_for(db, &tokens, admin.id).await;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[
            Permission::Role(SystemRole::DungeonMaster),
            Permission::Role(SystemRole::CardCreator),
        ])
        .await;

    assert!(result.is_ok());

    Ok(())
}
