//! Database statistics and the administrator query runner.

use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::card::CardType,
    server::{
        data::{
            card::CardRepository, field::FieldRepository, group::GroupRepository,
            stats::StatsRepository, user::UserRepository,
        },
        error::AppError,
        model::stats::{CardStats, DbStats, QueryResult, TypeStat},
    },
};

/// Statement prefixes accepted by [`StatsService::execute_query`].
const READ_ONLY_PREFIXES: [&str; 4] = ["select", "with", "explain", "values"];

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Row counts per table plus per-type card counts.
    pub async fn get_stats(&self) -> Result<DbStats, AppError> {
        let users = UserRepository::new(self.db).count().await?;
        let groups = GroupRepository::new(self.db).count().await?;
        let fields = FieldRepository::new(self.db).count().await?;
        let contents = CardRepository::new(self.db).get_all_contents().await?;

        Ok(DbStats {
            users,
            groups,
            fields,
            cards: card_stats(&contents),
            generated_at: Utc::now(),
        })
    }

    /// Runs one read-only statement and discards any side effect.
    ///
    /// The statement runs inside a transaction that is always rolled back.
    ///
    /// # Returns
    /// - `Ok(QueryResult)` - Column names in select order and positional rows
    /// - `Err(AppError::BadRequest)` - Empty, multi-statement or non-read-only SQL,
    ///   or the database rejected the statement
    pub async fn execute_query(&self, sql: &str) -> Result<QueryResult, AppError> {
        let statement = read_only_statement(sql)?;

        let txn = self.db.begin().await?;
        let result = StatsRepository::new(&txn).run_query(statement).await;
        txn.rollback().await?;

        result.map_err(|err| {
            tracing::debug!("Rejected query {:?}: {}", statement, err);
            AppError::BadRequest(format!("Ошибка выполнения запроса: {}", err))
        })
    }
}

/// Validates `sql` as a single read-only statement.
///
/// A single trailing `;` is allowed and stripped.
fn read_only_statement(sql: &str) -> Result<&str, AppError> {
    let statement = sql.trim();
    let statement = statement.strip_suffix(';').unwrap_or(statement).trim_end();

    if statement.is_empty() {
        return Err(AppError::BadRequest("SQL запрос обязателен".to_string()));
    }
    if statement.contains(';') {
        return Err(AppError::BadRequest(
            "Допускается только один SQL запрос".to_string(),
        ));
    }

    let keyword: String = statement
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect::<String>()
        .to_ascii_lowercase();
    if !READ_ONLY_PREFIXES.contains(&keyword.as_str()) {
        return Err(AppError::BadRequest(
            "Разрешены только запросы на чтение".to_string(),
        ));
    }

    Ok(statement)
}

fn card_stats(contents: &[(String, serde_json::Value)]) -> CardStats {
    let type_stat = |card_type: CardType| {
        let rows: Vec<&serde_json::Value> = contents
            .iter()
            .filter(|(stored_type, _)| stored_type == card_type.as_str())
            .map(|(_, content)| content)
            .collect();

        TypeStat {
            total: rows.len() as u64,
            unique: distinct(rows.into_iter()),
        }
    };

    CardStats {
        count: contents.len() as u64,
        unique_count: distinct(contents.iter().map(|(_, content)| content)),
        character: type_stat(CardType::Character),
        npc: type_stat(CardType::Npc),
        item: type_stat(CardType::Item),
    }
}

/// Counts distinct content maps by their canonical JSON text.
fn distinct<'v>(contents: impl Iterator<Item = &'v serde_json::Value>) -> u64 {
    contents
        .map(|content| content.to_string())
        .collect::<HashSet<_>>()
        .len() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_read_only_statements() {
        assert_eq!(read_only_statement(" SELECT 1; ").unwrap(), "SELECT 1");
        assert!(read_only_statement("with t as (select 1) select * from t").is_ok());
        assert!(read_only_statement("EXPLAIN QUERY PLAN SELECT * FROM card").is_ok());
        assert!(read_only_statement("values (1)").is_ok());
    }

    #[test]
    fn rejects_writes_and_multiple_statements() {
        for sql in [
            "",
            ";",
            "DELETE FROM card",
            "update user set is_admin = 1",
            "select 1; drop table card",
            "selectx 1",
        ] {
            assert!(
                matches!(read_only_statement(sql), Err(AppError::BadRequest(_))),
                "accepted {:?}",
                sql
            );
        }
    }

    #[test]
    fn counts_distinct_contents_per_type() {
        let contents = vec![
            ("character".to_string(), json!({ "hp": 10 })),
            ("character".to_string(), json!({ "hp": 10 })),
            ("npc".to_string(), json!({ "hp": 10 })),
            ("item".to_string(), json!({})),
        ];

        let stats = card_stats(&contents);

        assert_eq!(stats.count, 4);
        assert_eq!(stats.unique_count, 2);
        assert_eq!(stats.for_type(CardType::Character), TypeStat { total: 2, unique: 1 });
        assert_eq!(stats.for_type(CardType::Npc), TypeStat { total: 1, unique: 1 });
        assert_eq!(stats.for_type(CardType::Item), TypeStat { total: 1, unique: 1 });
    }
}
