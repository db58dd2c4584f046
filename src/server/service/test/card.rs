use super::*;
use crate::server::{
    data::group::GroupRepository,
    model::card::{CreateCardParams, UpdateCardParams},
    service::card::CardService,
};

fn new_card(name: &str, card_type: CardType, content: serde_json::Value) -> CreateCardParams {
    CreateCardParams {
        name: name.to_string(),
        card_type,
        content: serde_json::from_value(content).unwrap(),
        is_public: false,
    }
}

/// Tests npc creation by a player.
///
/// Verifies that a caller with only the Player role may not create npc cards
/// and that nothing is stored.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn player_cannot_create_npc() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::helpers::create_user_with_role(db, "Player").await?;
    let actor = actor(db, player.id).await;

    let result = CardService::new(db)
        .create(&actor, new_card("Goblin", CardType::Npc, json!({})))
        .await;

    assert!(is_denied(&result));
    assert!(CardService::new(db).get_own(&actor).await?.is_empty());

    Ok(())
}

/// Tests npc creation by a card creator.
///
/// Expected: Ok with the card owned by the caller
#[tokio::test]
async fn card_creator_creates_npc() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let creator = factory::helpers::create_user_with_role(db, "Card Creator").await?;
    let actor = actor(db, creator.id).await;

    let card = CardService::new(db)
        .create(&actor, new_card("Goblin", CardType::Npc, json!({})))
        .await?;

    assert_eq!(card.card_type, CardType::Npc);
    assert_eq!(card.user_id, creator.id);

    Ok(())
}

/// Tests that created content is validated and completed from the schema.
///
/// Verifies that a missing field with a default is filled in and that an
/// unknown key is rejected.
///
/// Expected: Ok with the default applied, then Err(BadRequest)
#[tokio::test]
async fn create_applies_defaults_and_rejects_unknown_keys() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::field::FieldFactory::new(db)
        .key("hp")
        .field_type("number")
        .default_value(json!(10))
        .build()
        .await?;
    factory::field::FieldFactory::new(db)
        .key("loot")
        .card_type("npc")
        .build()
        .await?;

    let user = factory::create_user(db).await?;
    let actor = actor(db, user.id).await;
    let service = CardService::new(db);

    let card = service
        .create(&actor, new_card("Hero", CardType::Character, json!({})))
        .await?;
    assert_eq!(serde_json::to_value(&card.content).unwrap(), json!({ "hp": 10 }));

    let result = service
        .create(&actor, new_card("Hero", CardType::Character, json!({ "loot": "gold" })))
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a Dungeon Master deleting another user's character.
///
/// Expected: Err(AccessDenied) and the card still exists
#[tokio::test]
async fn dungeon_master_cannot_delete_foreign_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let character = factory::create_card(db, owner.id).await?;

    let service = CardService::new(db);
    let result = service.delete(&actor(db, dm.id).await, character.id).await;

    assert!(is_denied(&result));
    assert!(service
        .get_by_id(&actor(db, owner.id).await, character.id)
        .await
        .is_ok());

    Ok(())
}

/// Tests an administrator deleting another user's character.
///
/// Expected: Ok and the card is gone
#[tokio::test]
async fn admin_deletes_foreign_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let character = factory::create_card(db, owner.id).await?;

    let service = CardService::new(db);
    service.delete(&actor(db, admin.id).await, character.id).await?;

    let result = service.get_by_id(&actor(db, owner.id).await, character.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests an owner deleting a character attached to a group.
///
/// Verifies that deletion works with the card tables alone and clears the
/// attachment.
///
/// Expected: Ok, the card is gone and no longer attached
#[tokio::test]
async fn owner_deletes_attached_character() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let character = factory::create_card(db, owner.id).await?;
    let group = factory::create_group(db).await?;
    GroupRepository::new(db)
        .attach_card(group.id, character.id)
        .await?;

    let owner = actor(db, owner.id).await;
    let service = CardService::new(db);
    service.delete(&owner, character.id).await?;

    let result = service.get_by_id(&owner, character.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(!GroupRepository::new(db).has_card(group.id, character.id).await?);

    Ok(())
}

/// Tests listing characters by type.
///
/// Verifies that a player sees only their own characters while a Dungeon
/// Master sees every character.
///
/// Expected: Ok with one card for the player and two for the DM
#[tokio::test]
async fn character_listing_depends_on_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db).await?;
    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    factory::create_card(db, player.id).await?;
    factory::create_card(db, dm.id).await?;

    let service = CardService::new(db);
    let own = service
        .get_by_type(&actor(db, player.id).await, CardType::Character)
        .await?;
    let all = service
        .get_by_type(&actor(db, dm.id).await, CardType::Character)
        .await?;

    assert_eq!(own.len(), 1);
    assert_eq!(own[0].user_id, player.id);
    assert_eq!(all.len(), 2);

    let npcs = service
        .get_by_type(&actor(db, player.id).await, CardType::Npc)
        .await;
    assert!(is_denied(&npcs));

    Ok(())
}

/// Tests updating a card's name and visibility.
///
/// Expected: Ok with the new values and the content untouched
#[tokio::test]
async fn owner_updates_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let card = factory::card::CardFactory::new(db, owner.id)
        .content(json!({ "bio": "Elf" }))
        .build()
        .await?;

    let updated = CardService::new(db)
        .update(
            &actor(db, owner.id).await,
            UpdateCardParams {
                id: card.id,
                name: Some("Renamed".to_string()),
                content: None,
                is_public: Some(true),
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert!(updated.is_public);
    assert_eq!(serde_json::to_value(&updated.content).unwrap(), json!({ "bio": "Elf" }));

    Ok(())
}

/// Tests viewing a private card of another player.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn private_card_hidden_from_other_players() -> Result<(), AppError> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let card = factory::create_card(db, owner.id).await?;

    let result = CardService::new(db)
        .get_by_id(&actor(db, other.id).await, card.id)
        .await;

    assert!(is_denied(&result));

    Ok(())
}
