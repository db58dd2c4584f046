use super::*;

/// Tests a partial role update.
///
/// Verifies that only the provided description changes and the name is kept.
///
/// Expected: Ok with the old name and the new description
#[tokio::test]
async fn updates_only_given_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::role::RoleFactory::new(db)
        .name("Bard")
        .description("Sings")
        .build()
        .await?;

    let updated = RoleRepository::new(db)
        .update(role.id, None, Some("Plays the lute".to_string()))
        .await?;

    assert_eq!(updated.name, "Bard");
    assert_eq!(updated.description, "Plays the lute");

    Ok(())
}

/// Tests an update with nothing to change.
///
/// Expected: Ok with the role unchanged
#[tokio::test]
async fn empty_update_returns_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let role = factory::role::RoleFactory::new(db).name("Bard").build().await?;

    let updated = RoleRepository::new(db).update(role.id, None, None).await?;

    assert_eq!(updated.id, role.id);
    assert_eq!(updated.name, "Bard");

    Ok(())
}

/// Tests `find_or_create` for an existing role.
///
/// Expected: Ok with the existing row and no new role inserted
#[tokio::test]
async fn find_or_create_reuses_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roles = factory::create_system_roles(db).await?;
    let repo = RoleRepository::new(db);

    let found = repo.find_or_create("Administrator", "ignored").await?;

    assert_eq!(found.id, roles[0].id);
    assert_eq!(repo.get_all().await?.len(), roles.len());

    Ok(())
}
