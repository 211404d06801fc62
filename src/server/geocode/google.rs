//! Google Maps Geocoding API client.

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::{
    error::geocode::GeocodeError,
    geocode::{AddressComponent, GeocodeMatch, Geocoder, LatLng},
};

pub const GOOGLE_GEOCODE_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    address_components: Vec<GeocodeComponent>,
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct GeocodeComponent {
    long_name: String,
    short_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: GeometryLocation,
}

#[derive(Debug, Deserialize)]
struct GeometryLocation {
    lat: f64,
    lng: f64,
}

impl GeocodeResponse {
    /// Maps the API envelope onto matches.
    ///
    /// `ZERO_RESULTS` is a valid, empty answer; any other non-`OK` status is
    /// a failure of the API call itself.
    fn into_matches(self) -> Result<Vec<GeocodeMatch>, GeocodeError> {
        match self.status.as_str() {
            "OK" => Ok(self.results.into_iter().map(GeocodeResult::into_match).collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(GeocodeError::Status {
                status: self.status,
                message: self.error_message.unwrap_or_default(),
            }),
        }
    }
}

impl GeocodeResult {
    fn into_match(self) -> GeocodeMatch {
        GeocodeMatch {
            coordinates: LatLng {
                lat: self.geometry.location.lat,
                lng: self.geometry.location.lng,
            },
            components: self
                .address_components
                .into_iter()
                .map(|c| AddressComponent {
                    types: c.types,
                    short_name: c.short_name,
                    long_name: c.long_name,
                })
                .collect(),
        }
    }
}

/// Geocoder backed by the Google Maps Geocoding API.
///
/// Holds a shared `reqwest::Client`; cloning is cheap.
#[derive(Clone)]
pub struct GoogleGeocoder {
    http_client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleGeocoder {
    /// Creates a client for the given API key.
    ///
    /// # Arguments
    /// - `http_client` - Shared HTTP client
    /// - `api_key` - Google Maps API key
    /// - `endpoint` - Geocoding endpoint, normally `GOOGLE_GEOCODE_URL`
    pub fn new(http_client: reqwest::Client, api_key: String, endpoint: String) -> Self {
        Self {
            http_client,
            api_key,
            endpoint,
        }
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError> {
        let response: GeocodeResponse = self
            .http_client
            .get(&self.endpoint)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .into_matches()
            .inspect_err(|e| tracing::warn!("Geocoding '{}' failed: {}", address, e))
    }
}
