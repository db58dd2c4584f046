use sea_orm_migration::{prelude::*, schema::*};

use super::m20250302_000006_create_card_table::Card;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CardItem::Table)
                    .if_not_exists()
                    .col(integer(CardItem::CardId))
                    .col(integer(CardItem::ItemId))
                    .col(integer(CardItem::Quantity).default(1))
                    .col(boolean(CardItem::Equipped).default(false))
                    .col(text_null(CardItem::Notes))
                    .col(
                        timestamp_with_time_zone(CardItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(CardItem::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_card_item")
                            .col(CardItem::CardId)
                            .col(CardItem::ItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_item_card_id")
                            .from(CardItem::Table, CardItem::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_item_item_id")
                            .from(CardItem::Table, CardItem::ItemId)
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
            .drop_table(Table::drop().table(CardItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardItem {
    Table,
    CardId,
    ItemId,
    Quantity,
    Equipped,
    Notes,
    CreatedAt,
    UpdatedAt,
}
