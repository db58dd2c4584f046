use oauth2::{
    basic::BasicTokenType, AuthorizationCode, EmptyExtraTokenFields, StandardTokenResponse,
    TokenResponse,
};
use serenity::all::User as DiscordUser;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::auth::{DiscordAuthService, DiscordIdentity},
};

const DISCORD_PROFILE_URL: &str = "https://discord.com/api/users/@me";

impl<'a> DiscordAuthService<'a> {
    /// Exchanges a Discord authorization code and logs the user in.
    ///
    /// # Arguments
    /// - `authorization_code` - Code Discord appended to the redirect URL
    ///
    /// # Returns
    /// - `Ok((String, User))` - Session token and stored user
    /// - `Err(AppError::AuthErr)` - Discord rejected the code or the profile request failed
    /// - `Err(AppError)` - Database or signing error
    pub async fn callback(&self, authorization_code: String) -> Result<(String, User), AppError> {
        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::DiscordTokenExchange(e.to_string()))?;

        let profile = self.fetch_discord_user(&token).await?;

        self.complete_login(DiscordIdentity {
            discord_id: profile.id.get().to_string(),
            username: profile.name,
            avatar: profile.avatar.map(|hash| hash.to_string()),
        })
        .await
    }

    /// Retrieves a Discord user's information using provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<DiscordUser, AuthError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get(DISCORD_PROFILE_URL)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<DiscordUser>()
            .await?;

        Ok(user_info)
    }
}
