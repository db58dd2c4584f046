use super::*;

fn values(quantity: i32, equipped: bool) -> CardItemValues {
    CardItemValues {
        quantity,
        equipped,
        notes: None,
    }
}

/// Tests adding the same item twice.
///
/// Verifies that the second upsert overwrites quantity and equipped instead of
/// inserting a second row.
///
/// Expected: Ok with a single row holding the latest values
#[tokio::test]
async fn overwrites_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hero = factory::create_card(db, user.id).await?;
    let potion = factory::card::CardFactory::new(db, user.id)
        .card_type("item")
        .build()
        .await?;

    let repo = CardItemRepository::new(db);
    repo.upsert(hero.id, potion.id, values(2, false)).await?;
    let stored = repo.upsert(hero.id, potion.id, values(5, true)).await?;

    assert_eq!(stored.quantity, 5);
    assert!(stored.equipped);

    let items = repo.get_items(hero.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].card_item.quantity, 5);

    Ok(())
}

/// Tests listing the carriers of an item.
///
/// Expected: Ok with each carrier card and its quantity
#[tokio::test]
async fn lists_carriers_of_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hero = factory::create_card(db, user.id).await?;
    let npc = factory::card::CardFactory::new(db, user.id)
        .card_type("npc")
        .build()
        .await?;
    let rope = factory::card::CardFactory::new(db, user.id)
        .card_type("item")
        .build()
        .await?;
    factory::create_card_item(db, hero.id, rope.id, 1).await?;
    factory::create_card_item(db, npc.id, rope.id, 3).await?;

    let carriers = CardItemRepository::new(db).get_carriers(rope.id).await?;
    let mut found: Vec<(i32, i32)> = carriers
        .iter()
        .map(|linked| (linked.card.id, linked.card_item.quantity))
        .collect();
    found.sort();

    assert_eq!(found, vec![(hero.id, 1), (npc.id, 3)]);

    Ok(())
}

/// Tests removing an item that is not carried.
///
/// Expected: Ok(false)
#[tokio::test]
async fn delete_reports_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hero = factory::create_card(db, user.id).await?;

    let removed = CardItemRepository::new(db).delete(hero.id, 999).await?;

    assert!(!removed);

    Ok(())
}
