//! Factory for `entity_addresses` link rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Links a location into an owner's address list at position `idx`, unlabelled.
///
/// # Arguments
/// - `db` - Database connection
/// - `entity_id` - Internal id of the owning entity
/// - `location_id` - Id of the linked location
/// - `idx` - Position in the owner's list
///
/// # Returns
/// - `Ok(entity::entity_address::Model)` - The created link
/// - `Err(DbErr)` - Database error during insert
pub async fn create_entity_address(
    db: &DatabaseConnection,
    entity_id: i32,
    location_id: i32,
    idx: i32,
) -> Result<entity::entity_address::Model, DbErr> {
    entity::entity_address::ActiveModel {
        id: ActiveValue::NotSet,
        entity_id: ActiveValue::Set(entity_id),
        location_id: ActiveValue::Set(location_id),
        idx: ActiveValue::Set(idx),
        label: ActiveValue::Set(None),
    }
    .insert(db)
    .await
}
