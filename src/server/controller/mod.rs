//! HTTP handlers, one module per resource family.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service parameters, call one service and convert the
//! result back into a DTO. Capability checks beyond admin-only routes live in
//! the services.

pub mod auth;
pub mod card;
pub mod card_item;
pub mod field;
pub mod group;
pub mod role;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;
