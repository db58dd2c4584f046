//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*`
//! shorthand for default creation. Factories never create their foreign-key
//! parents; pass the owning ids explicitly.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::UserFactory::new(&db)
//!     .discord_id("987654321")
//!     .username("CustomUser")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let npc = factory::card::CardFactory::new(&db, user.id)
//!     .card_type("npc")
//!     .build()
//!     .await?;
//! ```

pub mod card;
pub mod field;
pub mod group;
pub mod helpers;
pub mod role;
pub mod user;

pub use card::{create_card, create_card_item};
pub use field::create_field;
pub use group::{add_member, create_bank_entry, create_group};
pub use role::{assign_role, create_role, create_system_roles};
pub use user::create_user;
