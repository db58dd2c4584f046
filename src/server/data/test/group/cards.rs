use super::*;
use sea_orm::EntityTrait;

/// Tests attaching and detaching cards.
///
/// Verifies that attached cards are listed by name and that detaching reports
/// whether an attachment existed.
///
/// Expected: Ok with both cards listed, then one after a detach
#[tokio::test]
async fn attaches_and_detaches_cards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let zed = factory::card::CardFactory::new(db, user.id)
        .name("Zed")
        .build()
        .await?;
    let aria = factory::card::CardFactory::new(db, user.id)
        .name("Aria")
        .build()
        .await?;
    let group = factory::create_group(db).await?;

    let repo = GroupRepository::new(db);
    repo.attach_card(group.id, zed.id).await?;
    repo.attach_card(group.id, aria.id).await?;

    let names: Vec<String> = repo
        .get_cards(group.id)
        .await?
        .into_iter()
        .map(|card| card.name)
        .collect();
    assert_eq!(names, vec!["Aria", "Zed"]);

    assert!(repo.detach_card(group.id, zed.id).await?);
    assert!(!repo.detach_card(group.id, zed.id).await?);
    assert!(!repo.has_card(group.id, zed.id).await?);
    assert!(repo.has_card(group.id, aria.id).await?);

    Ok(())
}

/// Tests resolving the group of an attachment row.
///
/// Expected: Ok with the attachment paired with its group
#[tokio::test]
async fn attachment_resolves_its_group() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_card_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let card = factory::create_card(db, user.id).await?;
    let group = factory::create_group(db).await?;
    GroupRepository::new(db).attach_card(group.id, card.id).await?;

    let rows = entity::prelude::GroupCard::find()
        .find_also_related(entity::prelude::CampaignGroup)
        .all(db)
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.card_id, card.id);
    assert_eq!(rows[0].1.as_ref().map(|g| g.id), Some(group.id));

    Ok(())
}
