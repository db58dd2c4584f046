//! Group, membership and ledger factories.

use crate::factory::helpers::next_id;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating campaign groups.
pub struct GroupFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
}

impl<'a> GroupFactory<'a> {
    /// Defaults: name `"Group {id}"`, empty description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Group {}", next_id()),
            description: String::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub async fn build(self) -> Result<entity::campaign_group::Model, DbErr> {
        let now = Utc::now();
        entity::campaign_group::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a group with default values.
pub async fn create_group(
    db: &DatabaseConnection,
) -> Result<entity::campaign_group::Model, DbErr> {
    GroupFactory::new(db).build().await
}

/// Adds a user to a group with the given position label.
pub async fn add_member(
    db: &DatabaseConnection,
    group_id: i32,
    user_id: i32,
    position: &str,
) -> Result<entity::group_member::Model, DbErr> {
    entity::group_member::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        user_id: ActiveValue::Set(user_id),
        position: ActiveValue::Set(position.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Records a ledger entry stamped `now + counter` seconds, so entries created
/// later in a test always sort as newer.
pub async fn create_bank_entry(
    db: &DatabaseConnection,
    group_id: i32,
    created_by_id: i32,
    amount: i64,
) -> Result<entity::group_bank_entry::Model, DbErr> {
    let id = next_id();
    entity::group_bank_entry::ActiveModel {
        group_id: ActiveValue::Set(group_id),
        title: ActiveValue::Set(format!("Entry {}", id)),
        amount: ActiveValue::Set(amount),
        description: ActiveValue::Set(String::new()),
        created_by_id: ActiveValue::Set(created_by_id),
        created_at: ActiveValue::Set(Utc::now() + Duration::seconds(id as i64)),
        ..Default::default()
    }
    .insert(db)
    .await
}
