//! Factory methods for creating test data.
//!
//! Factories insert rows with sensible defaults, reducing boilerplate in tests. Each
//! table has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let owner = factory::create_entity(db).await?;
//!     let location = factory::create_location(db).await?;
//!     factory::create_entity_address(db, owner.id, location.id, 0).await?;
//!
//!     // Or all at once
//!     let (owner, locations) = factory::helpers::create_entity_with_addresses(db, 2).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let location = factory::location::LocationFactory::new(&db)
//!     .city("Chatham")
//!     .zip("62629")
//!     .build()
//!     .await?;
//! ```

pub mod base_entity;
pub mod entity_address;
pub mod helpers;
pub mod location;
pub mod user;

pub use base_entity::create_entity;
pub use entity_address::create_entity_address;
pub use location::create_location;
pub use user::create_user;
