use super::*;

/// Tests toggling the admin flag.
///
/// Verifies that the flag is written and read back through `find_by_id`.
///
/// Expected: Ok(true) and the user reports the new flag
#[tokio::test]
async fn sets_and_clears_admin_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    assert!(repo.set_admin(user.id, true).await?);
    assert!(repo.find_by_id(user.id).await?.unwrap().is_admin);

    assert!(repo.set_admin(user.id, false).await?);
    assert!(!repo.find_by_id(user.id).await?.unwrap().is_admin);

    Ok(())
}

/// Tests setting the flag on a missing user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db).set_admin(999, true).await?;

    assert!(!updated);

    Ok(())
}
