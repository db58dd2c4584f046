use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::role::SystemRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::access::Actor,
        service::token::TokenService,
    },
};

/// Route-level requirement checked by [`AuthGuard::require`].
///
/// Administrators pass every requirement.
pub enum Permission {
    Admin,
    Role(SystemRole),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Resolves the bearer token to the acting user and checks `permissions`.
    ///
    /// # Returns
    /// - `Ok(Actor)` - Authenticated user with roles
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken | ExpiredToken)` - Token failed verification
    /// - `Err(AuthError::UserNotInDatabase)` - Token subject no longer exists
    /// - `Err(AuthError::AccessDenied)` - A permission is not satisfied
    pub async fn require(&self, permissions: &[Permission]) -> Result<Actor, AppError> {
        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(claims.sub).into());
        };

        let actor = Actor::new(user);
        if actor.is_admin() {
            return Ok(actor);
        }

        for permission in permissions {
            let allowed = match permission {
                Permission::Admin => false,
                Permission::Role(role) => actor.has_role(*role),
            };

            if !allowed {
                return Err(AuthError::AccessDenied(actor.id(), denial_message(permission)).into());
            }
        }

        Ok(actor)
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn denial_message(permission: &Permission) -> String {
    match permission {
        Permission::Admin => "Требуются права администратора".to_string(),
        Permission::Role(role) => format!("Требуется роль {}", role),
    }
}
