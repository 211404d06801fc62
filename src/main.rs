mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let geocoder = startup::build_geocoder(&config, http_client);

    let mut app = router::router().with_state(AppState::new(db, geocoder));
    if let Some(cors) = startup::cors_layer(&config) {
        app = app.layer(cors);
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        "Starting server on {} ({} environment)",
        address,
        config.environment
    );

    axum::serve(listener, app).await?;

    Ok(())
}
