use super::*;

/// Tests assigning and removing a role.
///
/// Verifies that `is_assigned` and `get_holder_ids` follow an assignment and
/// that `unassign` reports whether a row was removed.
///
/// Expected: Ok with the holder listed, then no holders after removal
#[tokio::test]
async fn assigns_and_unassigns_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_role(db).await?;
    let repo = RoleRepository::new(db);

    repo.assign(user.id, role.id).await?;

    assert!(repo.is_assigned(user.id, role.id).await?);
    assert_eq!(repo.get_holder_ids(role.id).await?, vec![user.id]);

    assert!(repo.unassign(user.id, role.id).await?);
    assert!(!repo.unassign(user.id, role.id).await?);
    assert!(repo.get_holder_ids(role.id).await?.is_empty());

    Ok(())
}

/// Tests deleting a role that is still assigned.
///
/// Expected: Ok with the role and its assignment both gone
#[tokio::test]
async fn delete_removes_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let role = factory::create_role(db).await?;
    factory::assign_role(db, user.id, role.id).await?;

    let repo = RoleRepository::new(db);
    repo.delete(role.id).await?;

    assert!(repo.find_by_id(role.id).await?.is_none());
    assert!(!repo.is_assigned(user.id, role.id).await?);

    Ok(())
}
