use super::*;

/// Tests counting administrators other than a given user.
///
/// Verifies that users count through either the admin flag or the
/// Administrator role, that a user holding both counts once, and that the
/// excluded user never counts.
///
/// Expected: Ok(2) for two other administrators
#[tokio::test]
async fn counts_flag_and_role_holders_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let roles = factory::create_system_roles(db).await?;
    let admin_role = &roles[0];

    let me = factory::user::UserFactory::new(db).admin(true).build().await?;
    factory::assign_role(db, me.id, admin_role.id).await?;

    let flagged = factory::user::UserFactory::new(db).admin(true).build().await?;
    factory::assign_role(db, flagged.id, admin_role.id).await?;

    let role_only = factory::create_user(db).await?;
    factory::assign_role(db, role_only.id, admin_role.id).await?;

    factory::create_user(db).await?;

    let count = UserRepository::new(db)
        .count_other_admins(me.id, Some(admin_role.id))
        .await?;

    assert_eq!(count, 2);

    Ok(())
}

/// Tests the count when the Administrator role row does not exist.
///
/// Expected: Ok(0) for a lone flagged admin
#[tokio::test]
async fn lone_admin_has_no_others() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let me = factory::user::UserFactory::new(db).admin(true).build().await?;
    factory::create_user(db).await?;

    let count = UserRepository::new(db).count_other_admins(me.id, None).await?;

    assert_eq!(count, 0);

    Ok(())
}
