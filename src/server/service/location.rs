//! Location completion against the geocoder.
//!
//! `LocationService::complete_location` is a small state machine over a location's
//! completeness: complete locations are left alone, address-only locations are forward
//! geocoded and reconciled against the canonical match, and every other combination is
//! rejected. Completion always runs before any persistence starts.

use crate::server::{
    error::location::{AddressCompletionError, LocationError},
    geocode::{AddressComponent, GeocodeMatch, Geocoder},
    model::location::{Address, AddressField, Location},
};

/// Canonical address values read from a geocoder match.
///
/// City, state and zip are kept in the order the geocoder listed their components,
/// so reconciliation records changes in that order. Street number and route only
/// combine into address1, which is reconciled last.
#[derive(Debug, Default)]
struct CanonicalAddress {
    fields: Vec<(AddressField, String)>,
    street_number: Option<String>,
    route: Option<String>,
}

impl CanonicalAddress {
    /// Classifies components by type tag. The first matching kind wins and
    /// unrecognised components are ignored.
    fn from_components(components: &[AddressComponent]) -> Self {
        let mut canonical = Self::default();

        for component in components {
            if component.has_only_types(&["street_number"]) {
                canonical.street_number = Some(component.short_name.clone());
            } else if component.has_only_types(&["route"]) {
                canonical.route = Some(component.short_name.clone());
            } else if component.has_only_types(&["locality", "political"]) {
                canonical
                    .fields
                    .push((AddressField::City, component.short_name.clone()));
            } else if component.has_only_types(&["administrative_area_level_1", "political"]) {
                canonical
                    .fields
                    .push((AddressField::State, component.short_name.clone()));
            } else if component.has_only_types(&["postal_code"]) {
                canonical
                    .fields
                    .push((AddressField::Zip, component.long_name.clone()));
            }
        }

        canonical
    }

    /// `"<number> <route>"`, only when both parts were returned.
    fn address1(&self) -> Option<String> {
        match (&self.street_number, &self.route) {
            (Some(number), Some(route)) if !number.is_empty() && !route.is_empty() => {
                Some(format!("{} {}", number, route))
            }
            _ => None,
        }
    }

    fn into_fields(self) -> Vec<(AddressField, String)> {
        let address1 = self.address1();
        let mut fields = self.fields;
        fields.extend(address1.map(|value| (AddressField::Address1, value)));

        fields
    }
}

/// Service completing locations through an injected geocoder.
pub struct LocationService<'a> {
    geocoder: &'a dyn Geocoder,
}

impl<'a> LocationService<'a> {
    /// Creates a new LocationService instance.
    ///
    /// # Arguments
    /// - `geocoder` - Geocoding capability used for forward lookups
    pub fn new(geocoder: &'a dyn Geocoder) -> Self {
        Self { geocoder }
    }

    /// Fills in whichever half of the location is missing.
    ///
    /// | State                                 | Result                          |
    /// |---------------------------------------|---------------------------------|
    /// | complete                              | `Ok(false)`, untouched          |
    /// | address complete, coordinates empty   | forward geocode, `Ok(true)`     |
    /// | coordinates complete, address empty   | `ReverseGeocodeUnsupported`     |
    /// | anything else                         | `AmbiguousLocationState`        |
    ///
    /// Issues at most one geocoder request.
    ///
    /// # Returns
    /// - `Ok(true)` - Coordinates were filled in (and possibly address fields reconciled)
    /// - `Ok(false)` - Location was already complete
    /// - `Err(LocationError)` - Location could not be completed
    pub async fn complete_location(&self, location: &mut Location) -> Result<bool, LocationError> {
        if location.is_complete() {
            return Ok(false);
        }

        if location.is_address_complete() && location.is_coordinates_empty() {
            self.forward_geocode(location).await?;
            Ok(true)
        } else if location.is_coordinates_complete() && location.is_address_empty() {
            Err(LocationError::ReverseGeocodeUnsupported)
        } else {
            Err(LocationError::AmbiguousLocationState)
        }
    }

    async fn forward_geocode(&self, location: &mut Location) -> Result<(), LocationError> {
        let address = location.format_address()?;
        let found = single_match(self.geocoder.geocode(&address).await?)?;

        location.lat = Some(found.coordinates.lat);
        location.lng = Some(found.coordinates.lng);

        for (field, canonical) in CanonicalAddress::from_components(&found.components).into_fields()
        {
            location.reconcile(field, canonical);
        }

        if !location.is_address_complete() {
            return Err(LocationError::AddressResolutionIncomplete);
        }

        tracing::debug!(
            "Geocoded '{}' with {} reconciled field(s)",
            address,
            location.change_log.len()
        );

        Ok(())
    }

    /// Completes every address in list order, stopping at the first failure.
    ///
    /// Addresses before the failing one keep their changes; nothing has been
    /// persisted yet so there is nothing to roll back at this layer.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one address was changed
    /// - `Ok(false)` - Every address was already complete
    /// - `Err(AddressCompletionError)` - Position, accumulated change flag and cause of the
    ///   first failure
    pub async fn complete_addresses(
        &self,
        addresses: &mut [Address],
    ) -> Result<bool, AddressCompletionError> {
        self.complete_selected(addresses, |_| true).await
    }

    /// Like `complete_addresses`, but only touches addresses whose location still
    /// has to be created.
    ///
    /// Addresses referencing a stored location are linked by id alone, so their
    /// fields are neither checked nor geocoded. Error positions index the full list.
    pub async fn complete_new_addresses(
        &self,
        addresses: &mut [Address],
    ) -> Result<bool, AddressCompletionError> {
        self.complete_selected(addresses, Location::is_new).await
    }

    async fn complete_selected<F>(
        &self,
        addresses: &mut [Address],
        selected: F,
    ) -> Result<bool, AddressCompletionError>
    where
        F: Fn(&Location) -> bool,
    {
        let mut some_changed = false;

        for (position, address) in addresses.iter_mut().enumerate() {
            if !selected(&address.location) {
                continue;
            }

            match self.complete_location(&mut address.location).await {
                Ok(changed) => some_changed |= changed,
                Err(source) => {
                    tracing::debug!("Failed to complete address {}: {}", position + 1, source);
                    return Err(AddressCompletionError {
                        position,
                        some_changed,
                        source,
                    });
                }
            }
        }

        Ok(some_changed)
    }
}

fn single_match(mut matches: Vec<GeocodeMatch>) -> Result<GeocodeMatch, LocationError> {
    match matches.len() {
        0 => Err(LocationError::NoGeocodeResult),
        1 => Ok(matches.remove(0)),
        n => Err(LocationError::AmbiguousGeocodeResult(n)),
    }
}
