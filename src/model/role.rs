use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

use crate::model::UnknownVariant;

/// Built-in roles. Only these grant capabilities; admin-created roles are
/// labels without effect on access checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum SystemRole {
    #[serde(rename = "Administrator")]
    Administrator,
    #[serde(rename = "Dungeon Master")]
    DungeonMaster,
    #[serde(rename = "Card Creator")]
    CardCreator,
    #[serde(rename = "Player")]
    Player,
    #[serde(rename = "Group Captain")]
    GroupCaptain,
    #[serde(rename = "Group Vice-Captain")]
    GroupViceCaptain,
}

impl SystemRole {
    pub const ALL: [SystemRole; 6] = [
        SystemRole::Administrator,
        SystemRole::DungeonMaster,
        SystemRole::CardCreator,
        SystemRole::Player,
        SystemRole::GroupCaptain,
        SystemRole::GroupViceCaptain,
    ];

    /// Role name as stored in the `role` table.
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemRole::Administrator => "Administrator",
            SystemRole::DungeonMaster => "Dungeon Master",
            SystemRole::CardCreator => "Card Creator",
            SystemRole::Player => "Player",
            SystemRole::GroupCaptain => "Group Captain",
            SystemRole::GroupViceCaptain => "Group Vice-Captain",
        }
    }

    /// Description stored with the role when it is created.
    pub fn description(&self) -> &'static str {
        match self {
            SystemRole::Administrator => "Полный доступ ко всем функциям системы",
            SystemRole::DungeonMaster => "Создание и редактирование NPC, настройка групп",
            SystemRole::CardCreator => "Создание и редактирование карточек",
            SystemRole::Player => "Базовые права игрока",
            SystemRole::GroupCaptain => "Капитан группы с расширенными правами",
            SystemRole::GroupViceCaptain => "Заместитель капитана группы",
        }
    }

    /// Returns `Some` only for exact matches of a built-in role name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.as_str() == name)
    }
}

impl fmt::Display for SystemRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SystemRole {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownVariant::new("system role", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RoleDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Built-in roles cannot be renamed or deleted.
    pub is_system: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RoleSummaryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoleDto {
    #[serde(default)]
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleDto {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignRoleDto {
    pub user_id: Option<i32>,
    pub role_id: Option<i32>,
}
