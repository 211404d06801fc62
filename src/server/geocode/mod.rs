//! Forward geocoding capability.
//!
//! The resolver only ever sees the `Geocoder` trait; the Google Maps client is built once
//! at startup and injected through application state, and tests substitute a stub.

pub mod google;
#[cfg(test)]
pub mod stub;

use async_trait::async_trait;

use crate::server::error::geocode::GeocodeError;

pub use google::GoogleGeocoder;

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One structured piece of a geocoded address, e.g. the postal code.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressComponent {
    /// Type tags such as `locality` and `political`.
    pub types: Vec<String>,
    pub short_name: String,
    pub long_name: String,
}

impl AddressComponent {
    /// True iff the component has at least one type tag and every one of its
    /// tags is in `accepted`.
    pub fn has_only_types(&self, accepted: &[&str]) -> bool {
        !self.types.is_empty() && self.types.iter().all(|t| accepted.contains(&t.as_str()))
    }
}

/// A single candidate match for a geocoded address.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeMatch {
    pub coordinates: LatLng,
    pub components: Vec<AddressComponent>,
}

/// Resolves a single-line address string to candidate matches.
///
/// Implementations perform at most one request per call and never retry;
/// callers wanting a deadline wrap the call themselves.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError>;
}
