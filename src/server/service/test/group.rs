use super::*;
use crate::server::{
    model::group::{CreateGroupParams, UpdateGroupParams},
    service::group::GroupService,
};

/// Tests creating a group.
///
/// Verifies that the creator becomes the group's Dungeon Master.
///
/// Expected: Ok with the creator listed at position Dungeon Master
#[tokio::test]
async fn creator_becomes_dungeon_master() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let actor = actor(db, dm.id).await;
    let service = GroupService::new(db);

    let group = service
        .create(
            &actor,
            CreateGroupParams {
                name: "Fellowship".to_string(),
                description: String::new(),
            },
        )
        .await?;

    let groups = service.get_for_user(&actor).await?;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group.id, group.id);
    assert_eq!(groups[0].position, Position::DungeonMaster);

    Ok(())
}

/// Tests group creation by a player.
///
/// Expected: Err(AccessDenied)
#[tokio::test]
async fn player_cannot_create_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::helpers::create_user_with_role(db, "Player").await?;

    let result = GroupService::new(db)
        .create(
            &actor(db, player.id).await,
            CreateGroupParams {
                name: "Party".to_string(),
                description: String::new(),
            },
        )
        .await;

    assert!(is_denied(&result));

    Ok(())
}

/// Tests the order of existence and permission checks.
///
/// Verifies that a missing group is reported as not found even when the
/// caller would be denied for an existing group.
///
/// Expected: Err(NotFound) for a missing group, Err(AccessDenied) for an existing one
#[tokio::test]
async fn not_found_before_access_denied() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let player = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    let actor = actor(db, player.id).await;
    let service = GroupService::new(db);

    let missing = service.get_by_id(&actor, group.id + 100).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    let existing = service.get_by_id(&actor, group.id).await;
    assert!(is_denied(&existing));

    Ok(())
}

/// Tests adding members.
///
/// Verifies that a captain may add a member and that adding the same user
/// twice conflicts.
///
/// Expected: Ok with two members, then Err(Conflict)
#[tokio::test]
async fn captain_adds_member_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let captain = factory::create_user(db).await?;
    let recruit = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::add_member(db, group.id, captain.id, Position::Captain.as_str()).await?;

    let actor = actor(db, captain.id).await;
    let service = GroupService::new(db);

    let detail = service
        .add_member(&actor, group.id, Some(recruit.id), None)
        .await?;
    assert_eq!(detail.members.len(), 2);
    assert!(detail
        .members
        .iter()
        .any(|member| member.user.id == recruit.id && member.position == Position::Member));

    let again = service
        .add_member(&actor, group.id, Some(recruit.id), None)
        .await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests that ordinary members may not manage the group.
///
/// Expected: Err(AccessDenied) for an update by a plain member
#[tokio::test]
async fn member_cannot_update_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::add_member(db, group.id, member.id, Position::Member.as_str()).await?;

    let result = GroupService::new(db)
        .update(
            &actor(db, member.id).await,
            UpdateGroupParams {
                id: group.id,
                name: Some("Renamed".to_string()),
                description: None,
            },
        )
        .await;

    assert!(is_denied(&result));

    Ok(())
}

/// Tests attaching and detaching a card.
///
/// Expected: Ok, Err(Conflict) on a second attach, Ok on detach and
/// Err(NotFound) on a second detach
#[tokio::test]
async fn attach_and_detach_card() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let group = factory::create_group(db).await?;
    let npc = factory::card::CardFactory::new(db, dm.id)
        .card_type("npc")
        .build()
        .await?;

    let actor = actor(db, dm.id).await;
    let service = GroupService::new(db);

    service.attach_card(&actor, group.id, Some(npc.id)).await?;
    let detail = service.get_by_id(&actor, group.id).await?;
    assert_eq!(detail.cards.len(), 1);

    let again = service.attach_card(&actor, group.id, Some(npc.id)).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    service.detach_card(&actor, group.id, npc.id).await?;
    let missing = service.detach_card(&actor, group.id, npc.id).await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests group deletion rights.
///
/// Expected: Err(AccessDenied) for a Dungeon Master, Ok for an administrator
#[tokio::test]
async fn only_admin_deletes_group() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dm = factory::helpers::create_user_with_role(db, "Dungeon Master").await?;
    let admin = factory::user::UserFactory::new(db).admin(true).build().await?;
    let group = factory::create_group(db).await?;
    let service = GroupService::new(db);

    let result = service.delete(&actor(db, dm.id).await, group.id).await;
    assert!(is_denied(&result));

    service.delete(&actor(db, admin.id).await, group.id).await?;
    let gone = service.get_by_id(&actor(db, admin.id).await, group.id).await;
    assert!(matches!(gone, Err(AppError::NotFound(_))));

    Ok(())
}
