use crate::server::{data::card_item::CardItemRepository, model::card::CardItemValues};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_items;
mod upsert;
