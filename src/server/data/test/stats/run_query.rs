use super::*;

/// Tests running a select over seeded rows.
///
/// Verifies that columns keep the select order and that rows hold values in
/// column order.
///
/// Expected: Ok with columns `[username, id]` and one row per user
#[tokio::test]
async fn returns_columns_in_select_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("Gandalf")
        .build()
        .await?;

    let result = StatsRepository::new(db)
        .run_query("SELECT username, id FROM user")
        .await?;

    assert_eq!(result.columns, vec!["username", "id"]);
    assert_eq!(result.rows, vec![vec![json!("Gandalf"), json!(user.id)]]);

    Ok(())
}

/// Tests computed columns.
///
/// Verifies that aggregates, literals and arithmetic keep their aliases and
/// that integer, real, text and null cells are all read.
///
/// Expected: Ok with every selected column present
#[tokio::test]
async fn keeps_computed_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let result = StatsRepository::new(db)
        .run_query(
            "SELECT count(*) AS total, 42 AS answer, 1 + 1 AS two, 2.5 AS half, \
             'x' AS label, NULL AS nothing FROM user",
        )
        .await?;

    assert_eq!(
        result.columns,
        vec!["total", "answer", "two", "half", "label", "nothing"]
    );
    assert_eq!(
        result.rows,
        vec![vec![
            json!(2),
            json!(42),
            json!(2),
            json!(2.5),
            json!("x"),
            json!(null)
        ]]
    );

    Ok(())
}

/// Tests a query matching no rows.
///
/// Expected: Ok with empty columns and rows
#[tokio::test]
async fn empty_result_has_no_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatsRepository::new(db)
        .run_query("SELECT id FROM user")
        .await?;

    assert!(result.columns.is_empty());
    assert!(result.rows.is_empty());

    Ok(())
}

/// Tests an invalid statement.
///
/// Expected: Err from the database
#[tokio::test]
async fn invalid_sql_is_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StatsRepository::new(db).run_query("SELECT nope FROM missing").await;

    assert!(result.is_err());

    Ok(())
}
