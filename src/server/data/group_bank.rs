//! Group ledger repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::group::BankEntry;

pub struct GroupBankRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GroupBankRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Appends a ledger entry.
    ///
    /// # Arguments
    /// - `group_id` - Group the entry belongs to
    /// - `created_by_id` - User recording the entry
    /// - `title` - Entry title
    /// - `amount` - Signed amount; negative for withdrawals
    /// - `description` - Free text
    ///
    /// # Returns
    /// - `Ok(BankEntry)` - The stored entry with its creator
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        group_id: i32,
        created_by_id: i32,
        title: String,
        amount: i64,
        description: String,
    ) -> Result<BankEntry, DbErr> {
        let entry = entity::group_bank_entry::ActiveModel {
            group_id: ActiveValue::Set(group_id),
            title: ActiveValue::Set(title),
            amount: ActiveValue::Set(amount),
            description: ActiveValue::Set(description),
            created_by_id: ActiveValue::Set(created_by_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let creator = entity::prelude::User::find_by_id(created_by_id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {}", created_by_id)))?;

        Ok(BankEntry::from_entity(entry, creator))
    }

    /// Entries of a group, newest first; ties broken by descending id.
    pub async fn get_by_group(&self, group_id: i32) -> Result<Vec<BankEntry>, DbErr> {
        let rows = entity::prelude::GroupBankEntry::find()
            .filter(entity::group_bank_entry::Column::GroupId.eq(group_id))
            .order_by_desc(entity::group_bank_entry::Column::CreatedAt)
            .order_by_desc(entity::group_bank_entry::Column::Id)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(entry, creator)| creator.map(|creator| BankEntry::from_entity(entry, creator)))
            .collect())
    }
}
