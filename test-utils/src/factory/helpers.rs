//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating rows together
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an entity with `count` linked locations at positions `0..count`.
///
/// All rows use default values. Use the individual factories to customize.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of addresses to link
///
/// # Returns
/// - `Ok((entity, locations))` - The owner and its locations in list order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_entity_with_addresses(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::base_entity::Model, Vec<entity::location::Model>), DbErr> {
    let owner = crate::factory::base_entity::create_entity(db).await?;

    let mut locations = Vec::with_capacity(count);
    for idx in 0..count {
        let location = crate::factory::location::create_location(db).await?;
        crate::factory::entity_address::create_entity_address(db, owner.id, location.id, idx as i32)
            .await?;
        locations.push(location);
    }

    Ok((owner, locations))
}
