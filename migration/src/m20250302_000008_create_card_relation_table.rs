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
                    .table(CardRelation::Table)
                    .if_not_exists()
                    .col(integer(CardRelation::CardId))
                    .col(integer(CardRelation::LinkedCardId))
                    .primary_key(
                        Index::create()
                            .name("pk_card_relation")
                            .col(CardRelation::CardId)
                            .col(CardRelation::LinkedCardId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_relation_card_id")
                            .from(CardRelation::Table, CardRelation::CardId)
                            .to(Card::Table, Card::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_card_relation_linked_card_id")
                            .from(CardRelation::Table, CardRelation::LinkedCardId)
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
            .drop_table(Table::drop().table(CardRelation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CardRelation {
    Table,
    CardId,
    LinkedCardId,
}
