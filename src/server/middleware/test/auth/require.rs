use super::*;

mod require_admin;
mod require_role;
mod token;

/// Tests that every listed permission is checked.
///
/// Verifies that a user holding only one of two required roles is denied.
///
/// Expected: Err(AuthError::AccessDenied) naming the missing role
#[tokio::test]
async fn fails_if_any_permission_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let headers = bearer_for(db, &tokens, dm.id).await;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[
            Permission::Role(SystemRole::DungeonMaster),
            Permission::Role(SystemRole::CardCreator),
        ])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, dm.id);
            assert!(msg.contains("Card Creator"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|a| a.id())),
    }

    Ok(())
}

/// Tests empty permission list grants access.
///
/// Verifies that any authenticated user with a database record passes when
/// nothing else is required.
///
/// Expected: Ok(Actor) for the token's user
#[tokio::test]
async fn empty_permission_list_grants_access() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let user = factory::create_user(db).await?;
    let headers = bearer_for(db, &tokens, user.id).await;

    let actor = AuthGuard::new(db, &tokens, &headers).require(&[]).await?;

    assert_eq!(actor.id(), user.id);
    assert!(!actor.is_admin());

    Ok(())
}
