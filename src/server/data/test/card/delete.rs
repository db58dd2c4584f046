use super::*;
use crate::server::data::{card_item::CardItemRepository, group::GroupRepository};

/// Tests deleting a card that is referenced elsewhere.
///
/// Verifies that inventory rows on both sides and group attachments are
/// removed along with the card.
///
/// Expected: Ok with no dangling rows left
#[tokio::test]
async fn removes_inventory_and_attachments() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let hero = factory::create_card(db, user.id).await?;
    let sword = factory::card::CardFactory::new(db, user.id)
        .card_type("item")
        .build()
        .await?;
    let shield = factory::card::CardFactory::new(db, user.id)
        .card_type("item")
        .build()
        .await?;
    factory::create_card_item(db, hero.id, sword.id, 1).await?;
    factory::create_card_item(db, hero.id, shield.id, 1).await?;

    let group = factory::create_group(db).await?;
    GroupRepository::new(db).attach_card(group.id, sword.id).await?;

    CardRepository::new(db).delete(sword.id).await?;

    assert!(CardRepository::new(db).find_by_id(sword.id).await?.is_none());

    let items = CardItemRepository::new(db).get_items(hero.id).await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].card.id, shield.id);

    assert!(!GroupRepository::new(db).has_card(group.id, sword.id).await?);

    Ok(())
}
