use super::*;

/// Tests filtering fields by card type.
///
/// Verifies that a concrete card type returns its own fields plus fields for
/// `all`, and never fields of another type.
///
/// Expected: Ok with the npc and shared fields only
#[tokio::test]
async fn filters_by_card_type_and_includes_shared() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::field::FieldFactory::new(db).key("shared").build().await?;
    factory::field::FieldFactory::new(db)
        .key("npc_only")
        .card_type("npc")
        .build()
        .await?;
    factory::field::FieldFactory::new(db)
        .key("item_only")
        .card_type("item")
        .build()
        .await?;

    let fields = FieldRepository::new(db)
        .get_all(Some(FieldCardType::Npc))
        .await?;
    let mut keys: Vec<&str> = fields.iter().map(|field| field.key.as_str()).collect();
    keys.sort();

    assert_eq!(keys, vec!["npc_only", "shared"]);

    Ok(())
}

/// Tests that the `all` filter behaves like no filter.
///
/// Expected: Ok with every field
#[tokio::test]
async fn all_filter_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::field::FieldFactory::new(db).card_type("npc").build().await?;
    factory::field::FieldFactory::new(db).card_type("item").build().await?;

    let repo = FieldRepository::new(db);

    assert_eq!(repo.get_all(Some(FieldCardType::All)).await?.len(), 2);
    assert_eq!(repo.get_all(None).await?.len(), 2);

    Ok(())
}

/// Tests list ordering.
///
/// Verifies that fields are sorted by category first and by position within
/// a category.
///
/// Expected: Ok with combat fields by order, then general
#[tokio::test]
async fn orders_by_category_then_position() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::field::FieldFactory::new(db)
        .key("notes")
        .category("general")
        .build()
        .await?;
    factory::field::FieldFactory::new(db)
        .key("ac")
        .category("combat")
        .order(1)
        .build()
        .await?;
    factory::field::FieldFactory::new(db)
        .key("hp")
        .category("combat")
        .order(0)
        .build()
        .await?;

    let fields = FieldRepository::new(db).get_all(None).await?;
    let keys: Vec<&str> = fields.iter().map(|field| field.key.as_str()).collect();

    assert_eq!(keys, vec!["hp", "ac", "notes"]);

    Ok(())
}
