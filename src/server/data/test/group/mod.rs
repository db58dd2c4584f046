use crate::{
    model::group::Position,
    server::data::{group::GroupRepository, group_bank::GroupBankRepository},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod bank;
mod cards;
mod membership;
