//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Geocoding capability used to complete addresses

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::geocode::Geocoder;

/// Application state containing shared resources and dependencies.
///
/// Both fields are cheap to clone: `DatabaseConnection` is a pool whose clones share
/// connections, and the geocoder sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Forward geocoder used by address completion.
    ///
    /// The Google client in production; services only see the trait.
    pub geocoder: Arc<dyn Geocoder>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `geocoder` - Geocoding capability
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, geocoder: Arc<dyn Geocoder>) -> Self {
        Self { db, geocoder }
    }
}
