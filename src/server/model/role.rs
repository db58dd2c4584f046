//! Role domain models and parameters.

use crate::model::role::{CreateRoleDto, RoleDto, RoleSummaryDto, SystemRole, UpdateRoleDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl Role {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
        }
    }

    /// Built-in role this row represents, if any.
    pub fn system_role(&self) -> Option<SystemRole> {
        SystemRole::from_name(&self.name)
    }

    pub fn into_dto(self) -> RoleDto {
        RoleDto {
            is_system: self.system_role().is_some(),
            id: self.id,
            name: self.name,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleSummary {
    pub id: i32,
    pub name: String,
}

impl RoleSummary {
    pub fn from_entity(entity: entity::role::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> RoleSummaryDto {
        RoleSummaryDto {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleParams {
    pub name: String,
    pub description: String,
}

impl CreateRoleParams {
    pub fn from_dto(dto: CreateRoleDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateRoleParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
}

impl UpdateRoleParams {
    pub fn from_dto(id: i32, dto: UpdateRoleDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            description: dto.description,
        }
    }
}
