use sea_orm::DbErr;
use serde::de::DeserializeOwned;
use std::str::FromStr;

use crate::model::UnknownVariant;

/// Parses a closed enumeration stored as a string column.
///
/// # Arguments
/// - `column` - Table and column name used in the error message
/// - `value` - The stored string
///
/// # Returns
/// - `Ok(T)` - Value matched one of the enumeration's labels
/// - `Err(DbErr::Custom)` - Stored value matches no label
pub fn parse_stored<T>(column: &str, value: &str) -> Result<T, DbErr>
where
    T: FromStr<Err = UnknownVariant>,
{
    value
        .parse::<T>()
        .map_err(|e| DbErr::Custom(format!("Invalid value in {}: {}", column, e)))
}

/// Deserializes a JSON column into its typed representation.
///
/// # Arguments
/// - `column` - Table and column name used in the error message
/// - `value` - The stored JSON value
///
/// # Returns
/// - `Ok(T)` - JSON had the expected shape
/// - `Err(DbErr::Custom)` - JSON could not be deserialized into `T`
pub fn decode_stored_json<T>(column: &str, value: serde_json::Value) -> Result<T, DbErr>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value)
        .map_err(|e| DbErr::Custom(format!("Malformed JSON in {}: {}", column, e)))
}

/// Serializes a value for a JSON column.
pub fn encode_json<T: serde::Serialize>(column: &str, value: &T) -> Result<serde_json::Value, DbErr> {
    serde_json::to_value(value)
        .map_err(|e| DbErr::Custom(format!("Failed to encode {}: {}", column, e)))
}
