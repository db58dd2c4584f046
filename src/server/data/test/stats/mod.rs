use crate::server::data::stats::StatsRepository;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod run_query;
