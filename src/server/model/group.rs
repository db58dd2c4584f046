//! Group, membership and ledger domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::group::{
        BankEntryDto, CreateBankEntryDto, CreateGroupDto, GroupDetailDto, GroupDto,
        GroupMemberDto, LedgerDto, MemberGroupDto, Position, UpdateGroupDto,
    },
    server::{
        model::{card::Card, user::UserRef},
        util::parse::parse_stored,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Group {
    pub fn from_entity(entity: entity::campaign_group::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> GroupDto {
        GroupDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A group from the point of view of one of its members.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberGroup {
    pub group: Group,
    pub position: Position,
}

impl MemberGroup {
    pub fn into_dto(self) -> MemberGroupDto {
        MemberGroupDto {
            group: self.group.into_dto(),
            position: self.position,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub user: UserRef,
    pub position: Position,
    pub joined_at: DateTime<Utc>,
}

impl GroupMember {
    /// Converts a membership row and its user to a domain model.
    ///
    /// # Returns
    /// - `Ok(GroupMember)` - Converted member
    /// - `Err(DbErr::Custom)` - Stored position label is unknown
    pub fn from_entity(
        entity: entity::group_member::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            user: UserRef::from_entity(user),
            position: parse_stored("group_member.position", &entity.position)?,
            joined_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> GroupMemberDto {
        GroupMemberDto {
            user: self.user.into_dto(),
            position: self.position,
            joined_at: self.joined_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroupDetail {
    pub group: Group,
    /// Ordered by join time.
    pub members: Vec<GroupMember>,
    pub cards: Vec<Card>,
}

impl GroupDetail {
    pub fn into_dto(self) -> GroupDetailDto {
        GroupDetailDto {
            group: self.group.into_dto(),
            members: self.members.into_iter().map(GroupMember::into_dto).collect(),
            cards: self.cards.into_iter().map(Card::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGroupParams {
    pub name: String,
    pub description: String,
}

impl CreateGroupParams {
    pub fn from_dto(dto: CreateGroupDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGroupParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateGroupParams {
    pub fn from_dto(id: i32, dto: UpdateGroupDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
        }
    }
}

/// One immutable ledger line.
#[derive(Debug, Clone, PartialEq)]
pub struct BankEntry {
    pub id: i32,
    pub group_id: i32,
    pub title: String,
    pub amount: i64,
    pub description: String,
    pub created_by: UserRef,
    pub created_at: DateTime<Utc>,
}

impl BankEntry {
    pub fn from_entity(entity: entity::group_bank_entry::Model, creator: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            group_id: entity.group_id,
            title: entity.title,
            amount: entity.amount,
            description: entity.description,
            created_by: UserRef::from_entity(creator),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BankEntryDto {
        BankEntryDto {
            id: self.id,
            group_id: self.group_id,
            title: self.title,
            amount: self.amount,
            description: self.description,
            created_by: self.created_by.into_dto(),
            created_at: self.created_at,
        }
    }
}

/// All entries of a group, newest first, and their sum.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pub entries: Vec<BankEntry>,
    pub total_balance: i64,
}

impl Ledger {
    /// Builds the ledger, or `None` when the balance does not fit an `i64`.
    pub fn from_entries(entries: Vec<BankEntry>) -> Option<Self> {
        let total_balance = balance_of(&entries)?;

        Some(Self {
            entries,
            total_balance,
        })
    }

    pub fn into_dto(self) -> LedgerDto {
        LedgerDto {
            entries: self.entries.into_iter().map(BankEntry::into_dto).collect(),
            total_balance: self.total_balance,
        }
    }
}

/// Sum of the entry amounts, `None` on overflow.
pub fn balance_of(entries: &[BankEntry]) -> Option<i64> {
    entries
        .iter()
        .try_fold(0i64, |balance, entry| balance.checked_add(entry.amount))
}

#[derive(Debug, Clone)]
pub struct CreateBankEntryParams {
    pub group_id: i32,
    pub title: String,
    pub amount: Option<i64>,
    pub description: String,
}

impl CreateBankEntryParams {
    pub fn from_dto(group_id: i32, dto: CreateBankEntryDto) -> Self {
        Self {
            group_id,
            title: dto.title.trim().to_string(),
            amount: dto.amount,
            description: dto.description.unwrap_or_default(),
        }
    }
}
