//! Deterministic geocoder for tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::server::{
    error::geocode::GeocodeError,
    geocode::{AddressComponent, GeocodeMatch, Geocoder, LatLng},
};

enum Reply {
    Matches(Vec<GeocodeMatch>),
    Status(&'static str),
}

/// Returns the same canned reply for every request and records each address
/// it was asked about.
pub struct StubGeocoder {
    reply: Reply,
    requests: Mutex<Vec<String>>,
}

impl StubGeocoder {
    pub fn with_matches(matches: Vec<GeocodeMatch>) -> Self {
        Self {
            reply: Reply::Matches(matches),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request with the given API status.
    pub fn failing(status: &'static str) -> Self {
        Self {
            reply: Reply::Status(status),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Vec<GeocodeMatch>, GeocodeError> {
        self.requests.lock().unwrap().push(address.to_string());

        match &self.reply {
            Reply::Matches(matches) => Ok(matches.clone()),
            Reply::Status(status) => Err(GeocodeError::Status {
                status: status.to_string(),
                message: String::new(),
            }),
        }
    }
}

pub fn component(types: &[&str], short_name: &str, long_name: &str) -> AddressComponent {
    AddressComponent {
        types: types.iter().map(|t| t.to_string()).collect(),
        short_name: short_name.to_string(),
        long_name: long_name.to_string(),
    }
}

/// A match shaped like a Google result for a US street address.
pub fn street_match(
    number: &str,
    route: &str,
    city: &str,
    state: &str,
    zip: &str,
    coordinates: LatLng,
) -> GeocodeMatch {
    GeocodeMatch {
        coordinates,
        components: vec![
            component(&["street_number"], number, number),
            component(&["route"], route, route),
            component(&["locality", "political"], city, city),
            component(
                &["administrative_area_level_2", "political"],
                "Sangamon County",
                "Sangamon County",
            ),
            component(&["administrative_area_level_1", "political"], state, state),
            component(&["country", "political"], "US", "United States"),
            component(&["postal_code"], zip, zip),
        ],
    }
}

/// Springfield, IL city hall.
pub fn springfield_match(city: &str) -> GeocodeMatch {
    street_match(
        "1",
        "Main St",
        city,
        "IL",
        "62701",
        LatLng {
            lat: 39.7990,
            lng: -89.6440,
        },
    )
}
