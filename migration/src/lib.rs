pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_role_table;
mod m20250301_000003_create_user_role_table;
mod m20250301_000004_seed_system_roles;
mod m20250302_000005_create_field_table;
mod m20250302_000006_create_card_table;
mod m20250302_000007_create_card_item_table;
mod m20250302_000008_create_card_relation_table;
mod m20250303_000009_create_campaign_group_table;
mod m20250303_000010_create_group_member_table;
mod m20250303_000011_create_group_card_table;
mod m20250303_000012_create_group_bank_entry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_role_table::Migration),
            Box::new(m20250301_000003_create_user_role_table::Migration),
            Box::new(m20250301_000004_seed_system_roles::Migration),
            Box::new(m20250302_000005_create_field_table::Migration),
            Box::new(m20250302_000006_create_card_table::Migration),
            Box::new(m20250302_000007_create_card_item_table::Migration),
            Box::new(m20250302_000008_create_card_relation_table::Migration),
            Box::new(m20250303_000009_create_campaign_group_table::Migration),
            Box::new(m20250303_000010_create_group_member_table::Migration),
            Box::new(m20250303_000011_create_group_card_table::Migration),
            Box::new(m20250303_000012_create_group_bank_entry_table::Migration),
        ]
    }
}
