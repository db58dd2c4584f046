use crate::{
    model::field::FieldCardType,
    server::{data::field::FieldRepository, model::field::FieldBucket},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_all;
mod resequence;
