use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::geocode::GeocodeError};

/// Failures while classifying, formatting, resolving or persisting a location.
///
/// None of these are retried; they abort the operation that raised them.
#[derive(Error, Debug)]
pub enum LocationError {
    /// Location is neither address-complete with empty coordinates nor
    /// coordinate-complete with an empty address.
    #[error("Location must fully define address or coordinates, with the other entirely undefined.")]
    AmbiguousLocationState,

    /// Coordinates were given without an address. Reverse geocoding is not
    /// implemented.
    #[error("Reverse geocoding is not supported.")]
    ReverseGeocodeUnsupported,

    /// The geocoder returned no match for the formatted address.
    #[error("No geocoding result found for the given address.")]
    NoGeocodeResult,

    /// The geocoder returned more than one match for the formatted address.
    #[error("Geocoding results ambiguous for the given address ({0} matches).")]
    AmbiguousGeocodeResult(usize),

    /// Address components still do not form a complete address after
    /// reconciliation against the geocoder's match.
    #[error("Could not fully determine address from coordinates.")]
    AddressResolutionIncomplete,

    /// An address string was requested from a location whose address
    /// components are not all present.
    #[error("Cannot generate address string from incomplete address components.")]
    IncompleteAddress,

    /// Attempted to persist a location that is not complete. Completion must
    /// run before persistence.
    #[error("Only complete locations may be persisted; run location completion first.")]
    IncompleteLocation,

    /// The geocoding capability failed.
    #[error(transparent)]
    Geocoder(#[from] GeocodeError),
}

impl LocationError {
    /// Status code for this failure.
    ///
    /// Geocoder transport failures are an upstream problem (502); everything
    /// else is a problem with the submitted location (422).
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Geocoder(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

/// Converts location errors into HTTP responses.
///
/// Resolution failures are caused by the submitted data, so their message is
/// returned as-is. Geocoder failures are logged and reported generically.
impl IntoResponse for LocationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error = match self {
            Self::Geocoder(err) => {
                tracing::error!("Geocoder failure: {}", err);
                "Address lookup is currently unavailable, please try again.".to_string()
            }
            err => err.to_string(),
        };

        (status, Json(ErrorDto { error })).into_response()
    }
}

/// Failure while completing an ordered list of addresses.
///
/// Entries before `position` may already have been completed (and mutated);
/// `some_changed` reports whether any of them were.
#[derive(Error, Debug)]
#[error("{source} (address {})", .position + 1)]
pub struct AddressCompletionError {
    /// Zero-based position of the address that failed.
    pub position: usize,
    /// Whether any earlier address was changed before the failure.
    pub some_changed: bool,
    /// The failure raised for the address at `position`.
    #[source]
    pub source: LocationError,
}

impl IntoResponse for AddressCompletionError {
    fn into_response(self) -> Response {
        let status = self.source.status_code();
        if status == StatusCode::BAD_GATEWAY {
            return self.source.into_response();
        }

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
