use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CampaignGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(CampaignGroup::Id))
                    .col(string(CampaignGroup::Name))
                    .col(text(CampaignGroup::Description).default(""))
                    .col(
                        timestamp_with_time_zone(CampaignGroup::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CampaignGroup::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampaignGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CampaignGroup {
    Table,
    Id,
    Name,
    Description,
    CreatedAt,
    UpdatedAt,
}
