use sea_orm_migration::prelude::*;

use super::m20250301_000002_create_role_table::Role;

/// Built-in roles. Names are matched verbatim by the permission checks.
const SYSTEM_ROLES: &[(&str, &str)] = &[
    ("Administrator", "Полный доступ ко всем функциям системы"),
    ("Dungeon Master", "Создание и редактирование NPC, настройка групп"),
    ("Card Creator", "Создание и редактирование карточек"),
    ("Player", "Базовые права игрока"),
    ("Group Captain", "Капитан группы с расширенными правами"),
    ("Group Vice-Captain", "Заместитель капитана группы"),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Role::Table)
            .columns([Role::Name, Role::Description])
            .on_conflict(OnConflict::column(Role::Name).do_nothing().to_owned());

        for (name, description) in SYSTEM_ROLES {
            insert.values_panic([(*name).into(), (*description).into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = SYSTEM_ROLES.iter().map(|(name, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Role::Table)
                    .and_where(Expr::col(Role::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}
