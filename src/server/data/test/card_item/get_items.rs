use super::*;

/// Tests inventory ordering.
///
/// Verifies that items come back in the order they were added rather than by
/// name.
///
/// Expected: Ok with `Zweihander` before `Axe`
#[tokio::test]
async fn lists_items_in_insertion_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hero = factory::create_card(db, user.id).await?;
    let zweihander = factory::card::CardFactory::new(db, user.id)
        .name("Zweihander")
        .card_type("item")
        .build()
        .await?;
    let axe = factory::card::CardFactory::new(db, user.id)
        .name("Axe")
        .card_type("item")
        .build()
        .await?;
    factory::create_card_item(db, hero.id, zweihander.id, 1).await?;
    factory::create_card_item(db, hero.id, axe.id, 1).await?;

    let names: Vec<String> = CardItemRepository::new(db)
        .get_items(hero.id)
        .await?
        .into_iter()
        .map(|linked| linked.card.name)
        .collect();

    assert_eq!(names, vec!["Zweihander", "Axe"]);

    Ok(())
}
