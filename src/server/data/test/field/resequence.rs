use super::*;

/// Tests rewriting positions in a bucket.
///
/// Verifies that `resequence` assigns each id its index and that
/// `get_bucket_ids` then returns the ids in the new order.
///
/// Expected: Ok with the reversed order stored as 0, 1, 2
#[tokio::test]
async fn writes_dense_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let a = factory::field::FieldFactory::new(db).order(0).build().await?;
    let b = factory::field::FieldFactory::new(db).order(1).build().await?;
    let c = factory::field::FieldFactory::new(db).order(2).build().await?;

    let repo = FieldRepository::new(db);
    repo.resequence(&[c.id, b.id, a.id]).await?;

    let bucket = FieldBucket {
        category: "general".to_string(),
        card_type: FieldCardType::All,
    };
    assert_eq!(repo.get_bucket_ids(&bucket).await?, vec![c.id, b.id, a.id]);
    assert_eq!(repo.find_by_id(c.id).await?.unwrap().order, 0);
    assert_eq!(repo.find_by_id(a.id).await?.unwrap().order, 2);

    Ok(())
}

/// Tests that buckets are keyed by category and card type together.
///
/// Expected: Ok with only the matching field in the bucket
#[tokio::test]
async fn bucket_ids_respect_card_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let shared = factory::field::FieldFactory::new(db).build().await?;
    factory::field::FieldFactory::new(db).card_type("npc").build().await?;

    let ids = FieldRepository::new(db)
        .get_bucket_ids(&FieldBucket {
            category: "general".to_string(),
            card_type: FieldCardType::All,
        })
        .await?;

    assert_eq!(ids, vec![shared.id]);

    Ok(())
}

/// Tests key lookup.
///
/// Expected: true for a stored key, false otherwise
#[tokio::test]
async fn key_exists_matches_stored_key() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::field::FieldFactory::new(db).key("hit_points").build().await?;

    let repo = FieldRepository::new(db);

    assert!(repo.key_exists("hit_points").await?);
    assert!(!repo.key_exists("armor_class").await?);

    Ok(())
}
