use std::sync::Arc;

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::AppError,
    geocode::{Geocoder, GoogleGeocoder},
};

/// Connects to the MySQL database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up-to-date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client shared by outbound API calls.
///
/// Redirects are disabled; the geocoding API never redirects.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))
}

/// Builds the Google geocoder from configuration.
pub fn build_geocoder(config: &Config, http_client: reqwest::Client) -> Arc<dyn Geocoder> {
    Arc::new(GoogleGeocoder::new(
        http_client,
        config.google_maps_api_key.clone(),
        config.geocode_url.clone(),
    ))
}

/// CORS layer for non-production environments.
///
/// # Returns
/// - `Some(CorsLayer)` - Any origin may call `GET`, `POST`, `PUT` and `OPTIONS`
/// - `None` - Production; no cross-origin access
pub fn cors_layer(config: &Config) -> Option<CorsLayer> {
    if config.is_production() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
    )
}
