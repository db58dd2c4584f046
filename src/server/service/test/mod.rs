use crate::{
    model::{card::CardType, field::FieldCardType, group::Position},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::access::Actor,
    },
};
use sea_orm::DatabaseConnection;
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod card;
mod card_item;
mod group;

/// Loads a stored user with roles as the acting caller.
async fn actor(db: &DatabaseConnection, user_id: i32) -> Actor {
    let user = UserRepository::new(db)
        .find_by_id(user_id)
        .await
        .unwrap()
        .unwrap();

    Actor::new(user)
}

fn is_denied<T>(result: &Result<T, AppError>) -> bool {
    matches!(result, Err(AppError::AuthErr(AuthError::AccessDenied(_, _))))
}
