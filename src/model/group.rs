use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::{card::CardDto, user::UserRefDto, UnknownVariant};

/// In-group rank. Distinct from global roles; persisted as its label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Position {
    #[serde(rename = "Dungeon Master")]
    DungeonMaster,
    #[serde(rename = "Капитан Группы")]
    Captain,
    #[serde(rename = "Вице-капитан Группы")]
    ViceCaptain,
    #[default]
    #[serde(rename = "Участник")]
    Member,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::DungeonMaster => "Dungeon Master",
            Position::Captain => "Капитан Группы",
            Position::ViceCaptain => "Вице-капитан Группы",
            Position::Member => "Участник",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            Position::DungeonMaster,
            Position::Captain,
            Position::ViceCaptain,
            Position::Member,
        ]
        .into_iter()
        .find(|p| p.as_str() == s)
        .ok_or_else(|| UnknownVariant::new("group position", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A group as seen from the caller's membership list.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MemberGroupDto {
    #[serde(flatten)]
    pub group: GroupDto,
    pub position: Position,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupMemberDto {
    #[serde(flatten)]
    pub user: UserRefDto,
    pub position: Position,
    pub joined_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GroupDetailDto {
    #[serde(flatten)]
    pub group: GroupDto,
    pub members: Vec<GroupMemberDto>,
    pub cards: Vec<CardDto>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateGroupDto {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateGroupDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddMemberDto {
    pub user_id: Option<i32>,
    pub position: Option<Position>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttachCardDto {
    pub card_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BankEntryDto {
    pub id: i32,
    pub group_id: i32,
    pub title: String,
    /// Signed amount; negative values are withdrawals.
    pub amount: i64,
    pub description: String,
    pub created_by: UserRefDto,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LedgerDto {
    /// Newest first.
    pub entries: Vec<BankEntryDto>,
    pub total_balance: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBankEntryDto {
    #[serde(default)]
    pub title: String,
    pub amount: Option<i64>,
    pub description: Option<String>,
}
