use sea_orm::entity::prelude::*;

/// Admin-defined content field.
///
/// `field_type` is one of `text`, `number`, `select`, `checkbox`, `textarea`;
/// `card_type` is one of `character`, `npc`, `item`, `all`. `sort_order` is
/// dense within each (`category`, `card_type`) bucket.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "field")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub key: String,
    pub field_type: String,
    pub category: String,
    pub sort_order: i32,
    /// JSON array of strings, only meaningful for `select` fields.
    pub options: Json,
    pub default_value: Option<Json>,
    pub required: bool,
    pub card_type: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
