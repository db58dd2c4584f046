use sea_orm::entity::prelude::*;

/// Immutable ledger entry; the group balance is the sum of `amount`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_bank_entry")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub title: String,
    pub amount: i64,
    pub description: String,
    pub created_by_id: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campaign_group::Entity",
        from = "Column::GroupId",
        to = "super::campaign_group::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CampaignGroup,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatedById",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    CreatedBy,
}

impl Related<super::campaign_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampaignGroup.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreatedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
