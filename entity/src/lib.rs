//! SeaORM entity definitions for the catalyst core tables.

pub mod prelude;

pub mod base_entity;
pub mod entity_address;
pub mod location;
pub mod user;
