use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::role::RoleSummaryDto;

/// A user together with the roles they hold.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub discord_id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub is_admin: bool,
    pub last_login: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub roles: Vec<RoleSummaryDto>,
}

/// Public identity of a user as embedded in other resources.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserRefDto {
    pub id: i32,
    pub username: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    pub is_admin: Option<bool>,
}
