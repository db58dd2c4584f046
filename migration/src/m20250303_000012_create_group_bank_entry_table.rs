use sea_orm_migration::{prelude::*, schema::*};

use super::m20250301_000001_create_user_table::User;
use super::m20250303_000009_create_campaign_group_table::CampaignGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupBankEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupBankEntry::Id))
                    .col(integer(GroupBankEntry::GroupId))
                    .col(string(GroupBankEntry::Title))
                    .col(big_integer(GroupBankEntry::Amount))
                    .col(text(GroupBankEntry::Description).default(""))
                    .col(integer(GroupBankEntry::CreatedById))
                    .col(
                        timestamp_with_time_zone(GroupBankEntry::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_bank_entry_group_id")
                            .from(GroupBankEntry::Table, GroupBankEntry::GroupId)
                            .to(CampaignGroup::Table, CampaignGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_bank_entry_created_by_id")
                            .from(GroupBankEntry::Table, GroupBankEntry::CreatedById)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GroupBankEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupBankEntry {
    Table,
    Id,
    GroupId,
    Title,
    Amount,
    Description,
    CreatedById,
    CreatedAt,
}
