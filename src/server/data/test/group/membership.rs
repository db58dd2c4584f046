use super::*;

/// Tests listing a user's groups.
///
/// Verifies that only groups the user belongs to are returned, ordered by
/// name, each with the user's position.
///
/// Expected: Ok with two groups in name order
#[tokio::test]
async fn lists_groups_for_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let zeta = factory::group::GroupFactory::new(db).name("Zeta").build().await?;
    let alpha = factory::group::GroupFactory::new(db).name("Alpha").build().await?;
    factory::group::GroupFactory::new(db).name("Other").build().await?;

    let repo = GroupRepository::new(db);
    repo.add_member(zeta.id, user.id, Position::Member).await?;
    repo.add_member(alpha.id, user.id, Position::Captain).await?;

    let groups = repo.get_for_member(user.id).await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group.name, "Alpha");
    assert_eq!(groups[0].position, Position::Captain);
    assert_eq!(groups[1].group.name, "Zeta");

    Ok(())
}

/// Tests reading members and positions.
///
/// Expected: Ok with the stored position per member and None for outsiders
#[tokio::test]
async fn reads_members_and_positions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let dm = factory::create_user(db).await?;
    let captain = factory::create_user(db).await?;
    let outsider = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::add_member(db, group.id, dm.id, "Dungeon Master").await?;
    factory::add_member(db, group.id, captain.id, "Капитан Группы").await?;

    let repo = GroupRepository::new(db);
    let members = repo.get_members(group.id).await?;

    assert_eq!(members.len(), 2);
    assert_eq!(
        repo.get_position(group.id, captain.id).await?,
        Some(Position::Captain)
    );
    assert_eq!(
        repo.get_position(group.id, dm.id).await?,
        Some(Position::DungeonMaster)
    );
    assert_eq!(repo.get_position(group.id, outsider.id).await?, None);

    Ok(())
}

/// Tests deleting a group with dependants.
///
/// Expected: Ok with the group, its members and its ledger gone
#[tokio::test]
async fn delete_removes_dependants() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let group = factory::create_group(db).await?;
    factory::add_member(db, group.id, user.id, "Участник").await?;
    factory::create_bank_entry(db, group.id, user.id, 100).await?;

    GroupRepository::new(db).delete(group.id).await?;

    assert!(GroupRepository::new(db).find_by_id(group.id).await?.is_none());
    assert!(GroupRepository::new(db).get_for_member(user.id).await?.is_empty());
    assert!(GroupBankRepository::new(db).get_by_group(group.id).await?.is_empty());

    Ok(())
}
