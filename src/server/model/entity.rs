//! Base entity domain model.
//!
//! Every owned resource (users included) is backed by an `entities` row carrying its
//! public identifier, owner and visibility. The internal `id` never leaves the server.

use chrono::{DateTime, Utc};

/// Row shared by every owned resource.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// Internal identifier, used for joins only.
    pub id: i32,
    /// Public identifier exposed through the API.
    pub pub_id: String,
    pub owner_id: Option<i32>,
    pub owner_pub_id: Option<String>,
    pub publicly_readable: bool,
    pub last_updated: DateTime<Utc>,
}

impl Entity {
    /// Converts an entity row, given the owner's public id resolved separately.
    pub fn from_entity(
        entity: entity::base_entity::Model,
        owner_pub_id: Option<String>,
    ) -> Self {
        Self {
            id: entity.id,
            pub_id: entity.pub_id,
            owner_id: entity.owner_id,
            owner_pub_id,
            publicly_readable: entity.publicly_readable,
            last_updated: entity.last_updated,
        }
    }
}

/// Parameters for creating an `entities` row.
#[derive(Debug, Clone, Default)]
pub struct CreateEntityParam {
    /// Public id of the owning entity. Unknown ids leave the entity unowned.
    pub owner_pub_id: Option<String>,
    pub publicly_readable: bool,
}
