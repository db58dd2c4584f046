use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campaign_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group_member::Entity")]
    GroupMember,
    #[sea_orm(has_many = "super::group_card::Entity")]
    GroupCard,
    #[sea_orm(has_many = "super::group_bank_entry::Entity")]
    GroupBankEntry,
}

impl Related<super::group_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupMember.def()
    }
}

impl Related<super::group_card::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupCard.def()
    }
}

impl Related<super::group_bank_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupBankEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
