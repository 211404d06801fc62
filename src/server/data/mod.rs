//! Database repository layer.
//!
//! Repositories wrap SeaORM entity models and return domain models so the rest of the
//! server never touches rows directly. Every repository is generic over
//! `ConnectionTrait`, so the same code runs against the pool or inside a
//! `DatabaseTransaction` opened by a service.

pub mod address;
pub mod entity;
pub mod location;
pub mod user;

#[cfg(test)]
mod test;
