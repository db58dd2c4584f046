use crate::{
    model::role::SystemRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::auth::{AuthGuard, Permission},
        service::token::TokenService,
    },
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

mod require;

const SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// Headers carrying a freshly issued token for `user_id`.
async fn bearer_for(db: &DatabaseConnection, tokens: &TokenService, user_id: i32) -> HeaderMap {
    let user = UserRepository::new(db)
        .find_by_id(user_id)
        .await
        .unwrap()
        .unwrap();
    let token = tokens.issue(&user).unwrap();

    bearer(&token)
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
