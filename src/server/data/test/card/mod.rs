use crate::{model::card::CardType, server::data::card::CardRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod get_filtered;
