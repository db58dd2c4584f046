use super::*;

/// Tests ledger ordering.
///
/// Verifies that entries come back newest first and carry their creator.
///
/// Expected: Ok with amounts in reverse insertion order
#[tokio::test]
async fn lists_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dm = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    for amount in [500, -200, 150] {
        factory::create_bank_entry(db, group.id, dm.id, amount).await?;
    }

    let entries = GroupBankRepository::new(db).get_by_group(group.id).await?;
    let amounts: Vec<i64> = entries.iter().map(|entry| entry.amount).collect();

    assert_eq!(amounts, vec![150, -200, 500]);
    assert!(entries.iter().all(|entry| entry.created_by.id == dm.id));

    Ok(())
}

/// Tests that entries of other groups are not listed.
///
/// Expected: Ok with only the group's own entry
#[tokio::test]
async fn scopes_entries_to_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dm = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    let other = factory::create_group(db).await?;

    GroupBankRepository::new(db)
        .create(group.id, dm.id, "Loot".to_string(), 40, String::new())
        .await?;
    factory::create_bank_entry(db, other.id, dm.id, 10).await?;

    let entries = GroupBankRepository::new(db).get_by_group(group.id).await?;

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].title, "Loot");
    assert_eq!(entries[0].amount, 40);

    Ok(())
}
