//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They are
//! responsible for:
//!
//! - **Business Logic**: validation and the capability checks in
//!   [`crate::server::model::access`]
//! - **Orchestration**: coordinating several repositories and external clients
//! - **Domain Models**: working with domain models rather than DTOs or entity models
//! - **Transaction Management**: every multi-row write runs in one transaction

pub mod auth;
pub mod bank;
pub mod card;
pub mod card_item;
pub mod field;
pub mod group;
pub mod role;
pub mod stats;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
