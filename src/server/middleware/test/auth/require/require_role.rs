use super::*;

/// Tests a single role requirement.
///
/// Expected: Ok(Actor) for a holder of the role
#[tokio::test]
async fn grants_access_to_role_holder() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let headers = bearer_for(db, &tokens, dm.id).await;

    let actor = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Role(SystemRole::DungeonMaster)])
        .await?;

    assert!(actor.has_role(SystemRole::DungeonMaster));

    Ok(())
}

/// Tests a role requirement for a user without the role.
///
/// Verifies that holding another system role does not pass and that the
/// denial names the missing role.
///
/// Expected: Err(AuthError::AccessDenied) mentioning "Dungeon Master"
#[tokio::test]
async fn denies_user_without_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let creator = factory::helpers::create_user_with_role(db, "Card Creator").await?;
    let headers = bearer_for(db, &tokens, creator.id).await;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Role(SystemRole::DungeonMaster)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, msg))) => {
            assert_eq!(user_id, creator.id);
            assert!(msg.contains("Dungeon Master"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|a| a.id())),
    }

    Ok(())
}

/// Tests that custom roles never satisfy a system role requirement.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn custom_role_is_not_a_system_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new(SECRET);

    let user = factory::create_user(db).await?;
    let role = factory::role::RoleFactory::new(db)
        .name("Dungeon Masters Club")
        .build()
        .await?;
    factory::assign_role(db, user.id, role.id).await?;
    let headers = bearer_for(db, &tokens, user.id).await;

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Permission::Role(SystemRole::DungeonMaster)])
        .await;

    assert!(result.is_err());

    Ok(())
}
