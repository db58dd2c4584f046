use super::*;
use crate::server::{
    model::card::{AddCardItemParams, CardItemValues, UpdateCardItemParams},
    service::card_item::CardItemService,
};

fn add(card_id: i32, item_id: i32, quantity: i32) -> AddCardItemParams {
    AddCardItemParams {
        card_id,
        item_id: Some(item_id),
        values: CardItemValues {
            quantity,
            equipped: false,
            notes: None,
        },
    }
}

/// Tests adding an item and listing the inventory.
///
/// Verifies that adding the same item again overwrites the quantity rather
/// than adding a second row.
///
/// Expected: Ok with one inventory row of quantity 3
#[tokio::test]
async fn add_then_readd_overwrites_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let hero = factory::create_card(db, owner.id).await?;
    let sword = factory::card::CardFactory::new(db, owner.id)
        .name("Sword")
        .card_type("item")
        .build()
        .await?;

    let actor = actor(db, owner.id).await;
    let service = CardItemService::new(db);
    service.add(&actor, add(hero.id, sword.id, 1)).await?;
    service.add(&actor, add(hero.id, sword.id, 3)).await?;

    let items = service.get_items(&actor, hero.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].card.name, "Sword");
    assert_eq!(items[0].card_item.quantity, 3);

    Ok(())
}

/// Tests adding a card that is not an item.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_non_item_target() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let hero = factory::create_card(db, owner.id).await?;
    let friend = factory::create_card(db, owner.id).await?;

    let result = CardItemService::new(db)
        .add(&actor(db, owner.id).await, add(hero.id, friend.id, 1))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests quantity validation.
///
/// Expected: Err(BadRequest) for a zero quantity
#[tokio::test]
async fn rejects_zero_quantity() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let hero = factory::create_card(db, owner.id).await?;
    let rope = factory::card::CardFactory::new(db, owner.id)
        .card_type("item")
        .build()
        .await?;

    let result = CardItemService::new(db)
        .add(&actor(db, owner.id).await, add(hero.id, rope.id, 0))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests editing another player's inventory.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn other_player_cannot_add_items() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let hero = factory::create_card(db, owner.id).await?;
    let rope = factory::card::CardFactory::new(db, other.id)
        .card_type("item")
        .build()
        .await?;

    let result = CardItemService::new(db)
        .add(&actor(db, other.id).await, add(hero.id, rope.id, 1))
        .await;

    assert!(is_denied(&result));

    Ok(())
}

/// Tests patching an inventory row.
///
/// Verifies that absent values keep their stored value.
///
/// Expected: Ok with the quantity kept and the item equipped
#[tokio::test]
async fn update_keeps_absent_values() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let hero = factory::create_card(db, owner.id).await?;
    let shield = factory::card::CardFactory::new(db, owner.id)
        .card_type("item")
        .build()
        .await?;
    factory::create_card_item(db, hero.id, shield.id, 2).await?;

    let updated = CardItemService::new(db)
        .update(
            &actor(db, owner.id).await,
            UpdateCardItemParams {
                card_id: hero.id,
                item_id: shield.id,
                quantity: None,
                equipped: Some(true),
                notes: None,
            },
        )
        .await?;

    assert_eq!(updated.quantity, 2);
    assert!(updated.equipped);

    Ok(())
}

/// Tests removing an item and then removing it again.
///
/// Expected: Ok, then Err(NotFound)
#[tokio::test]
async fn remove_twice_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let hero = factory::create_card(db, owner.id).await?;
    let rope = factory::card::CardFactory::new(db, owner.id)
        .card_type("item")
        .build()
        .await?;
    factory::create_card_item(db, hero.id, rope.id, 1).await?;

    let actor = actor(db, owner.id).await;
    let service = CardItemService::new(db);
    service.remove(&actor, hero.id, rope.id).await?;

    let result = service.remove(&actor, hero.id, rope.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests item usage visibility.
///
/// Verifies that a Dungeon Master sees every carrier of an item they do not
/// own while an unrelated player is refused.
///
/// Expected: Ok with one carrier for the DM, Err(AccessDenied) for the player
#[tokio::test]
async fn usage_is_visible_to_dungeon_master() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let player = factory::create_user(db).await?;
    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let hero = factory::create_card(db, owner.id).await?;
    let gem = factory::card::CardFactory::new(db, owner.id)
        .card_type("item")
        .build()
        .await?;
    factory::create_card_item(db, hero.id, gem.id, 1).await?;

    let service = CardItemService::new(db);
    let usage = service.get_usage(&actor(db, dm.id).await, gem.id).await?;
    assert_eq!(usage.len(), 1);
    assert_eq!(usage[0].card.id, hero.id);

    let result = service.get_usage(&actor(db, player.id).await, gem.id).await;
    assert!(is_denied(&result));

    Ok(())
}
