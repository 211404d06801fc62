//! Test support for the catalyst core server.
//!
//! `TestBuilder` opens an in-memory SQLite database with the tables a test asks for,
//! and `factory` inserts entities, users, locations and address links with defaults.
//!
//! ```rust,ignore
//! let mut test = TestBuilder::new().with_address_tables().build().await?;
//! let db = test.database().await?;
//! let (owner, locations) = factory::helpers::create_entity_with_addresses(db, 2).await?;
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
