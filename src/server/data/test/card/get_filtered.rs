use super::*;

/// Tests filtering cards by type and owner.
///
/// Verifies that both filters apply independently and together.
///
/// Expected: Ok with only matching cards for each filter combination
#[tokio::test]
async fn filters_by_type_and_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;

    factory::create_card(db, alice.id).await?;
    factory::card::CardFactory::new(db, alice.id)
        .card_type("npc")
        .build()
        .await?;
    factory::create_card(db, bob.id).await?;

    let repo = CardRepository::new(db);

    assert_eq!(repo.get_filtered(None, None).await?.len(), 3);
    assert_eq!(
        repo.get_filtered(Some(CardType::Character), None).await?.len(),
        2
    );
    assert_eq!(repo.get_filtered(None, Some(alice.id)).await?.len(), 2);

    let own_characters = repo
        .get_filtered(Some(CardType::Character), Some(bob.id))
        .await?;
    assert_eq!(own_characters.len(), 1);
    assert_eq!(own_characters[0].user_id, bob.id);

    Ok(())
}

/// Tests that stored content is parsed into the domain model.
///
/// Expected: Ok with typed content values
#[tokio::test]
async fn parses_stored_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let card = factory::card::CardFactory::new(db, user.id)
        .content(serde_json::json!({ "hp": 12, "bio": "Elf" }))
        .build()
        .await?;

    let found = CardRepository::new(db).find_by_id(card.id).await?.unwrap();

    assert_eq!(found.content.len(), 2);
    assert_eq!(found.card_type, CardType::Character);

    Ok(())
}
