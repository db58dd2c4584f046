//! SeaORM entity definitions for the card keeper database.
//!
//! One module per table. Enumerated columns (card type, field type, group
//! position) are stored as plain strings here and converted to closed enums
//! at the repository boundary in the server crate.

pub mod prelude;

pub mod campaign_group;
pub mod card;
pub mod card_item;
pub mod card_relation;
pub mod field;
pub mod group_bank_entry;
pub mod group_card;
pub mod group_member;
pub mod role;
pub mod user;
pub mod user_role;
