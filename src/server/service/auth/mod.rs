//! Discord login and session issuing.
//!
//! The OAuth2 code exchange and profile request live in `callback`; turning a
//! Discord identity into a stored user and a session token is
//! [`DiscordAuthService::complete_login`], which needs no network access.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::role::SystemRole,
    server::{
        data::{role::RoleRepository, user::UserRepository},
        error::AppError,
        model::user::{UpsertUserParam, User},
        service::token::TokenService,
        state::OAuth2Client,
    },
};

pub mod callback;
pub mod login;

/// Identity fields taken from a Discord profile.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordIdentity {
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
}

pub struct DiscordAuthService<'a> {
    pub db: &'a DatabaseConnection,
    pub http_client: &'a reqwest::Client,
    pub oauth_client: &'a OAuth2Client,
    pub tokens: &'a TokenService,
    /// Discord id that is made administrator on every login.
    pub admin_discord_id: Option<&'a str>,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        tokens: &'a TokenService,
        admin_discord_id: Option<&'a str>,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            tokens,
            admin_discord_id,
        }
    }

    /// Stores the Discord identity and issues a session token.
    ///
    /// New users are created without roles; existing users get username, avatar and
    /// last login refreshed. The bootstrap admin gets the admin flag and the
    /// Administrator role (the role row is created if missing). Admin status is
    /// never removed here.
    ///
    /// # Arguments
    /// - `identity` - Identity from the Discord profile
    ///
    /// # Returns
    /// - `Ok((String, User))` - Session token and the stored user with roles
    /// - `Err(AppError)` - Database or token signing error
    pub async fn complete_login(&self, identity: DiscordIdentity) -> Result<(String, User), AppError> {
        let force_admin = self.admin_discord_id == Some(identity.discord_id.as_str());

        let txn = self.db.begin().await?;
        let user_repo = UserRepository::new(&txn);

        let mut user = user_repo
            .upsert(UpsertUserParam {
                discord_id: identity.discord_id,
                username: identity.username,
                avatar: identity.avatar,
                force_admin,
            })
            .await?;

        if force_admin {
            let role_repo = RoleRepository::new(&txn);
            let admin = SystemRole::Administrator;
            let role = role_repo
                .find_or_create(admin.as_str(), admin.description())
                .await?;

            if !role_repo.is_assigned(user.id, role.id).await? {
                role_repo.assign(user.id, role.id).await?;
                tracing::info!("Granted {} to bootstrap admin user {}", admin, user.id);

                user = user_repo.find_by_id(user.id).await?.unwrap_or(user);
            }
        }

        txn.commit().await?;

        let token = self.tokens.issue(&user)?;

        Ok((token, user))
    }
}
