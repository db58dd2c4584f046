//! Reporting queries used by the database statistics endpoints.

use sea_orm::{ConnectionTrait, DbErr, JsonValue, Statement};

use crate::server::model::stats::QueryResult;

pub struct StatsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Runs a statement and returns its rows as positional values.
    ///
    /// Columns come from the first row in select order, so computed columns such
    /// as `count(*)` or literals are kept. Callers are responsible for only
    /// passing read-only statements and for rolling back the surrounding
    /// transaction.
    ///
    /// # Returns
    /// - `Ok(QueryResult)` - Columns and rows, both empty when nothing matched
    /// - `Err(DbErr)` - Statement failed
    pub async fn run_query(&self, sql: &str) -> Result<QueryResult, DbErr> {
        let backend = self.db.get_database_backend();
        let rows = self
            .db
            .query_all_raw(Statement::from_string(backend, sql))
            .await?;

        let Some(first) = rows.first() else {
            return Ok(QueryResult::default());
        };
        let columns = first.column_names();

        let rows = rows
            .iter()
            .map(|row| (0..columns.len()).map(|index| cell_value(row, index)).collect())
            .collect();

        Ok(QueryResult { columns, rows })
    }
}

/// Reads one cell as integer, then real, then text; anything else is `null`.
fn cell_value(row: &sea_orm::QueryResult, index: usize) -> JsonValue {
    if let Ok(value) = row.try_get_by_index::<Option<i64>>(index) {
        return value.map(JsonValue::from).unwrap_or(JsonValue::Null);
    }
    if let Ok(Some(value)) = row.try_get_by_index::<Option<f64>>(index) {
        return JsonValue::from(value);
    }
    if let Ok(Some(value)) = row.try_get_by_index::<Option<String>>(index) {
        return JsonValue::from(value);
    }

    JsonValue::Null
}
