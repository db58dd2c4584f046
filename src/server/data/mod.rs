//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM entity queries for one area each and return domain
//! models from `server::model`. Every repository is generic over
//! `sea_orm::ConnectionTrait`, so services can hand them either the pool or an
//! open transaction.

pub mod card;
pub mod card_item;
pub mod field;
pub mod group;
pub mod group_bank;
pub mod role;
pub mod stats;
pub mod user;

#[cfg(test)]
mod test;
