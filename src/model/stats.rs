use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountStatDto {
    pub count: u64,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TypeStatDto {
    pub total: u64,
    /// Number of distinct content maps among cards of this type.
    pub unique: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CardTypeStatsDto {
    pub character: TypeStatDto,
    pub npc: TypeStatDto,
    pub item: TypeStatDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CardStatsDto {
    pub count: u64,
    pub unique_count: u64,
    pub types: CardTypeStatsDto,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DbStatsDto {
    pub users: CountStatDto,
    pub cards: CardStatsDto,
    pub groups: CountStatDto,
    pub fields: CountStatDto,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExecuteQueryDto {
    #[serde(default)]
    pub query: String,
}

/// Result of a read-only query: column names and one array per row.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct QueryResultDto {
    pub columns: Vec<String>,
    #[schema(value_type = Vec<Vec<Object>>)]
    pub rows: Vec<Vec<serde_json::Value>>,
}
