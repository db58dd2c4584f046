//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Enumerated columns are parsed into
//! the closed wire enums here, so services never compare raw strings.

pub mod access;
pub mod card;
pub mod field;
pub mod group;
pub mod role;
pub mod stats;
pub mod user;
