use crate::server::{
    error::{config::ConfigError, AppError},
    geocode::google::GOOGLE_GEOCODE_URL,
};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ENVIRONMENT: &str = "test";

pub struct Config {
    pub database_url: String,
    pub google_maps_api_key: String,
    pub geocode_url: String,

    /// Deployment purpose: `production`, `development` or `test`.
    pub environment: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let port = match var("PORT") {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidEnvVar {
                name: "PORT".to_string(),
                value,
            })?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            google_maps_api_key: required("CATALYST_CORE_API_GOOGLE_MAPS_API_KEY")?,
            geocode_url: var("GEOCODE_API_URL").unwrap_or_else(|| GOOGLE_GEOCODE_URL.to_string()),
            environment: var("NODE_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string()),
            port,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Test and development servers only listen on the loopback interface.
    pub fn bind_address(&self) -> String {
        match self.environment.as_str() {
            "test" | "development" => format!("localhost:{}", self.port),
            _ => format!("0.0.0.0:{}", self.port),
        }
    }
}
