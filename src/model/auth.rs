use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Body of `POST /api/auth/discord`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct DiscordLoginDto {
    /// Authorization code returned by Discord to the redirect URL.
    #[serde(default)]
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponseDto {
    /// Bearer token valid for seven days.
    pub token: String,
    pub user: UserDto,
}

/// Discord authorize URL plus the state value embedded in it.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginUrlDto {
    pub url: String,
    pub state: String,
}
