//! Database statistics and read-only query results.

use chrono::{DateTime, Utc};

use crate::model::{
    card::CardType,
    stats::{CardStatsDto, CardTypeStatsDto, CountStatDto, DbStatsDto, QueryResultDto, TypeStatDto},
};

/// Card counts for one card type.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TypeStat {
    pub total: u64,
    /// Distinct content maps among the cards of this type.
    pub unique: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardStats {
    pub count: u64,
    pub unique_count: u64,
    pub character: TypeStat,
    pub npc: TypeStat,
    pub item: TypeStat,
}

impl CardStats {
    pub fn for_type(&self, card_type: CardType) -> TypeStat {
        match card_type {
            CardType::Character => self.character,
            CardType::Npc => self.npc,
            CardType::Item => self.item,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DbStats {
    pub users: u64,
    pub groups: u64,
    pub fields: u64,
    pub cards: CardStats,
    pub generated_at: DateTime<Utc>,
}

impl DbStats {
    pub fn into_dto(self) -> DbStatsDto {
        let at = self.generated_at;
        let count = |count| CountStatDto {
            count,
            last_updated: at,
        };
        let type_stat = |stat: TypeStat| TypeStatDto {
            total: stat.total,
            unique: stat.unique,
        };

        DbStatsDto {
            users: count(self.users),
            groups: count(self.groups),
            fields: count(self.fields),
            cards: CardStatsDto {
                count: self.cards.count,
                unique_count: self.cards.unique_count,
                types: CardTypeStatsDto {
                    character: type_stat(self.cards.character),
                    npc: type_stat(self.cards.npc),
                    item: type_stat(self.cards.item),
                },
                last_updated: at,
            },
        }
    }
}

/// Rows of a read-only query as positional values under the selected column names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

impl QueryResult {
    pub fn into_dto(self) -> QueryResultDto {
        QueryResultDto {
            columns: self.columns,
            rows: self.rows,
        }
    }
}
