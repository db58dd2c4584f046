use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000006_create_card_table::Card;
use super::m20250303_000009_create_campaign_group_table::CampaignGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupCard::Table)
                    .if_not_exists()
                    .col(integer(GroupCard::GroupId))
                    .col(integer(GroupCard::CardId))
                    .primary_key(
                        Index::create()
                            .name("pk_group_card")
                            .col(GroupCard::GroupId)
                            .col(GroupCard::CardId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_card_group_id")
                            .from(GroupCard::Table, GroupCard::GroupId)
                            .to(CampaignGroup::Table, CampaignGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_card_card_id")
                            .from(GroupCard::Table, GroupCard::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupCard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupCard {
    Table,
    GroupId,
    CardId,
}
