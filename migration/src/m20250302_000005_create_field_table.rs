use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Field::Table)
                    .if_not_exists()
                    .col(pk_auto(Field::Id))
                    .col(string(Field::Name))
                    .col(string_uniq(Field::Key))
                    .col(string(Field::FieldType))
                    .col(string(Field::Category))
                    .col(integer(Field::SortOrder).default(0))
                    .col(json(Field::Options))
                    .col(json_null(Field::DefaultValue))
                    .col(boolean(Field::Required).default(false))
                    .col(string(Field::CardType).default("all"))
                    .col(
                        timestamp_with_time_zone(Field::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Field::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_field_bucket_order")
                    .table(Field::Table)
                    .col(Field::Category)
                    .col(Field::CardType)
                    .col(Field::SortOrder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Field::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Field {
    Table,
    Id,
    Name,
    Key,
    FieldType,
    Category,
    SortOrder,
    Options,
    DefaultValue,
    Required,
    CardType,
    CreatedAt,
    UpdatedAt,
}
