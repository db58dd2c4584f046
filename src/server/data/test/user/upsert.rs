use super::*;

fn param(discord_id: &str, username: &str, force_admin: bool) -> UpsertUserParam {
    UpsertUserParam {
        discord_id: discord_id.to_string(),
        username: username.to_string(),
        avatar: None,
        force_admin,
    }
}

/// Tests creating a new user from a Discord login.
///
/// Verifies that the first login inserts a user without the admin flag and
/// without roles.
///
/// Expected: Ok with a plain user
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.upsert(param("123456789", "Tester", false)).await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.username, "Tester");
    assert!(!user.is_admin);
    assert!(user.roles.is_empty());

    Ok(())
}

/// Tests a repeated login for the same Discord id.
///
/// Verifies that the existing row is refreshed instead of a second row being
/// inserted, and that the username and avatar are overwritten.
///
/// Expected: Ok with the same id and the new username
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(param("555", "OldName", false)).await?;
    let second = repo
        .upsert(UpsertUserParam {
            avatar: Some("abc".to_string()),
            ..param("555", "NewName", false)
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.username, "NewName");
    assert_eq!(second.avatar.as_deref(), Some("abc"));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests that a login never clears admin status.
///
/// Verifies that an upsert without `force_admin` leaves an existing admin
/// flag untouched.
///
/// Expected: Ok with the admin flag still set
#[tokio::test]
async fn keeps_admin_flag_on_plain_login() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("777")
        .admin(true)
        .build()
        .await?;

    let user = UserRepository::new(db)
        .upsert(param("777", "Admin", false))
        .await?;

    assert!(user.is_admin);

    Ok(())
}

/// Tests forcing the admin flag on login.
///
/// Expected: Ok with the admin flag set on an existing non-admin user
#[tokio::test]
async fn force_admin_sets_flag() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .discord_id("888")
        .build()
        .await?;

    let user = UserRepository::new(db)
        .upsert(param("888", "Boss", true))
        .await?;

    assert!(user.is_admin);

    Ok(())
}
