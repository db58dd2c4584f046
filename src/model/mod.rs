//! Wire types shared by the HTTP API.
//!
//! Everything here is (de)serialized as camelCase JSON and documented for
//! OpenAPI through `utoipa::ToSchema`. Server-side domain models live in
//! `crate::server::model` and convert into these at the controller boundary.

pub mod api;
pub mod auth;
pub mod card;
pub mod field;
pub mod group;
pub mod role;
pub mod stats;
pub mod user;

/// Returned by `FromStr` on the closed wire enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
