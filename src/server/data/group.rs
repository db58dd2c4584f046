//! Group repository: groups, memberships and attached cards.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::group::Position,
    server::{
        model::{
            card::Card,
            group::{Group, GroupMember, MemberGroup},
        },
        util::parse::parse_stored,
    },
};

pub struct GroupRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: String, description: String) -> Result<Group, DbErr> {
        let now = Utc::now();
        let entity = entity::campaign_group::ActiveModel {
            name: ActiveValue::Set(name),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    pub async fn find_by_id(&self, group_id: i32) -> Result<Option<Group>, DbErr> {
        let entity = entity::prelude::CampaignGroup::find_by_id(group_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Group::from_entity))
    }

    /// Writes name and description of an existing group and bumps `updated_at`.
    pub async fn update(&self, group: &Group) -> Result<Group, DbErr> {
        let entity = entity::campaign_group::ActiveModel {
            id: ActiveValue::Unchanged(group.id),
            name: ActiveValue::Set(group.name.clone()),
            description: ActiveValue::Set(group.description.clone()),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(Group::from_entity(entity))
    }

    /// Deletes a group with its memberships, ledger entries and card attachments.
    pub async fn delete(&self, group_id: i32) -> Result<(), DbErr> {
        entity::prelude::GroupMember::delete_many()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        entity::prelude::GroupCard::delete_many()
            .filter(entity::group_card::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        entity::prelude::GroupBankEntry::delete_many()
            .filter(entity::group_bank_entry::Column::GroupId.eq(group_id))
            .exec(self.db)
            .await?;

        entity::prelude::CampaignGroup::delete_by_id(group_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Groups `user_id` belongs to, ordered by name, with the user's position.
    pub async fn get_for_member(&self, user_id: i32) -> Result<Vec<MemberGroup>, DbErr> {
        let rows = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::CampaignGroup)
            .all(self.db)
            .await?;

        let mut groups = rows
            .into_iter()
            .filter_map(|(membership, group)| group.map(|group| (membership, group)))
            .map(|(membership, group)| {
                Ok(MemberGroup {
                    group: Group::from_entity(group),
                    position: parse_stored("group_member.position", &membership.position)?,
                })
            })
            .collect::<Result<Vec<_>, DbErr>>()?;

        groups.sort_by(|a, b| a.group.name.cmp(&b.group.name));

        Ok(groups)
    }

    /// Position of `user_id` in the group, or `None` when not a member.
    pub async fn get_position(
        &self,
        group_id: i32,
        user_id: i32,
    ) -> Result<Option<Position>, DbErr> {
        entity::prelude::GroupMember::find_by_id((group_id, user_id))
            .one(self.db)
            .await?
            .map(|membership| parse_stored("group_member.position", &membership.position))
            .transpose()
    }

    /// Members of the group in join order.
    pub async fn get_members(&self, group_id: i32) -> Result<Vec<GroupMember>, DbErr> {
        let rows = entity::prelude::GroupMember::find()
            .filter(entity::group_member::Column::GroupId.eq(group_id))
            .order_by_asc(entity::group_member::Column::CreatedAt)
            .order_by_asc(entity::group_member::Column::UserId)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(membership, user)| user.map(|user| (membership, user)))
            .map(|(membership, user)| GroupMember::from_entity(membership, user))
            .collect()
    }

    /// Adds a member; the pair must not exist yet.
    pub async fn add_member(
        &self,
        group_id: i32,
        user_id: i32,
        position: Position,
    ) -> Result<(), DbErr> {
        entity::group_member::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            user_id: ActiveValue::Set(user_id),
            position: ActiveValue::Set(position.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Cards attached to the group, ordered by name.
    pub async fn get_cards(&self, group_id: i32) -> Result<Vec<Card>, DbErr> {
        let rows = entity::prelude::GroupCard::find()
            .filter(entity::group_card::Column::GroupId.eq(group_id))
            .find_also_related(entity::prelude::Card)
            .all(self.db)
            .await?;

        let mut cards = rows
            .into_iter()
            .filter_map(|(_, card)| card)
            .map(Card::from_entity)
            .collect::<Result<Vec<_>, DbErr>>()?;

        cards.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(cards)
    }

    pub async fn has_card(&self, group_id: i32, card_id: i32) -> Result<bool, DbErr> {
        let row = entity::prelude::GroupCard::find_by_id((group_id, card_id))
            .one(self.db)
            .await?;

        Ok(row.is_some())
    }

    pub async fn attach_card(&self, group_id: i32, card_id: i32) -> Result<(), DbErr> {
        entity::group_card::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            card_id: ActiveValue::Set(card_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Detaches a card.
    ///
    /// # Returns
    /// - `Ok(true)` - Attachment removed
    /// - `Ok(false)` - Card was not attached
    pub async fn detach_card(&self, group_id: i32, card_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::GroupCard::delete_by_id((group_id, card_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::CampaignGroup::find().count(self.db).await
    }
}
