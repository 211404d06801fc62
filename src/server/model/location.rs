//! Location and address domain models.
//!
//! A `Location` is an address/coordinate record with its own persistence identity. Every
//! field is optional: `None` means the field was never given, which is distinct from an
//! empty string or `0.0`. The completeness checks below are driven purely by presence.
//!
//! An `Address` is a location placed at a position in an owner's ordered address list,
//! optionally labelled ("home", "work", ...).

use crate::{
    model::location::{AddressDto, LocationDto},
    server::error::location::LocationError,
};

/// Address/coordinate pair with optional persistence identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    /// Persisted row id. `None` or negative means not yet persisted.
    pub id: Option<i32>,
    pub address1: Option<String>,
    /// Never considered by completeness checks.
    pub address2: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    /// Human readable records of fields overwritten during resolution, in the
    /// order they were applied. Only ever appended to.
    pub change_log: Vec<String>,
}

/// Address component that can be reconciled against a canonical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressField {
    Address1,
    City,
    State,
    Zip,
}

impl AddressField {
    /// Field name used in change records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Address1 => "address1",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
        }
    }
}

impl Location {
    fn address_components(&self) -> [bool; 4] {
        [
            self.address1.is_some(),
            self.city.is_some(),
            self.state.is_some(),
            self.zip.is_some(),
        ]
    }

    fn coordinate_components(&self) -> [bool; 2] {
        [self.lat.is_some(), self.lng.is_some()]
    }

    /// True iff every address component and both coordinates are present.
    pub fn is_complete(&self) -> bool {
        self.is_address_complete() && self.is_coordinates_complete()
    }

    /// True iff address1, city, state and zip are all present.
    pub fn is_address_complete(&self) -> bool {
        self.address_components().iter().all(|present| *present)
    }

    /// True iff none of address1, city, state or zip is present.
    pub fn is_address_empty(&self) -> bool {
        !self.address_components().iter().any(|present| *present)
    }

    pub fn is_coordinates_complete(&self) -> bool {
        self.coordinate_components().iter().all(|present| *present)
    }

    pub fn is_coordinates_empty(&self) -> bool {
        !self.coordinate_components().iter().any(|present| *present)
    }

    /// Whether this location still has to be written as a new row.
    ///
    /// Absent and negative ids are both creation sentinels.
    pub fn is_new(&self) -> bool {
        self.id.map_or(true, |id| id < 0)
    }

    /// Builds the single-line address handed to the geocoder.
    ///
    /// Format: `address1[; address2], city, state zip`, with address2 only
    /// included when present.
    ///
    /// # Returns
    /// - `Ok(String)` - The formatted address
    /// - `Err(LocationError::IncompleteAddress)` - An address component is absent
    pub fn format_address(&self) -> Result<String, LocationError> {
        let (Some(address1), Some(city), Some(state), Some(zip)) =
            (&self.address1, &self.city, &self.state, &self.zip)
        else {
            return Err(LocationError::IncompleteAddress);
        };

        let mut formatted = address1.clone();
        if let Some(address2) = &self.address2 {
            formatted.push_str("; ");
            formatted.push_str(address2);
        }
        formatted.push_str(&format!(", {}, {} {}", city, state, zip));

        Ok(formatted)
    }

    fn field_mut(&mut self, field: AddressField) -> &mut Option<String> {
        match field {
            AddressField::Address1 => &mut self.address1,
            AddressField::City => &mut self.city,
            AddressField::State => &mut self.state,
            AddressField::Zip => &mut self.zip,
        }
    }

    /// Overwrites `field` with `canonical` if it differs from the stored value.
    ///
    /// A differing value is recorded in the change log as
    /// `Changed '<field>' from '<old>' to '<new>'.`; a matching value is left
    /// alone and nothing is recorded.
    ///
    /// # Returns
    /// - `true` - The field was overwritten
    /// - `false` - The stored value already matched
    pub fn reconcile(&mut self, field: AddressField, canonical: String) -> bool {
        let slot = self.field_mut(field);
        if slot.as_deref() == Some(canonical.as_str()) {
            return false;
        }

        let previous = slot.replace(canonical.clone()).unwrap_or_default();
        self.change_log.push(format!(
            "Changed '{}' from '{}' to '{}'.",
            field.name(),
            previous,
            canonical
        ));

        true
    }

    /// Extracts the values needed to insert a `locations` row.
    ///
    /// # Returns
    /// - `Ok(CreateLocationParam)` - The location is complete
    /// - `Err(LocationError::IncompleteLocation)` - Any completion field is absent
    pub fn to_create_param(&self) -> Result<CreateLocationParam, LocationError> {
        match (
            &self.address1,
            &self.city,
            &self.state,
            &self.zip,
            self.lat,
            self.lng,
        ) {
            (Some(address1), Some(city), Some(state), Some(zip), Some(lat), Some(lng)) => {
                Ok(CreateLocationParam {
                    address1: address1.clone(),
                    address2: self.address2.clone(),
                    city: city.clone(),
                    state: state.clone(),
                    zip: zip.clone(),
                    lat,
                    lng,
                })
            }
            _ => Err(LocationError::IncompleteLocation),
        }
    }

    /// Converts a persisted row into a location. The change log starts empty.
    pub fn from_entity(entity: entity::location::Model) -> Self {
        Self {
            id: Some(entity.id),
            address1: Some(entity.address1),
            address2: entity.address2,
            city: Some(entity.city),
            state: Some(entity.state),
            zip: Some(entity.zip),
            lat: Some(entity.lat),
            lng: Some(entity.lng),
            change_log: Vec::new(),
        }
    }

    /// Converts a request payload into a location.
    ///
    /// Any change descriptions sent by the client are discarded; the change log
    /// only ever holds records produced by resolution.
    pub fn from_dto(dto: LocationDto) -> Self {
        Self {
            id: dto.location_id,
            address1: dto.address1,
            address2: dto.address2,
            city: dto.city,
            state: dto.state,
            zip: dto.zip,
            lat: dto.lat,
            lng: dto.lng,
            change_log: Vec::new(),
        }
    }

    pub fn into_dto(self) -> LocationDto {
        LocationDto {
            location_id: self.id,
            address1: self.address1,
            address2: self.address2,
            city: self.city,
            state: self.state,
            zip: self.zip,
            lat: self.lat,
            lng: self.lng,
            change_desc: self.change_log,
        }
    }
}

/// Values for inserting a new `locations` row. Only constructible from a
/// complete location.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateLocationParam {
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub lat: f64,
    pub lng: f64,
}

/// A location at a position in an owner's ordered address list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Address {
    pub location: Location,
    /// Position in the owning list. Assigned from list order when written;
    /// whatever the client sent is ignored.
    pub idx: Option<i32>,
    pub label: Option<String>,
}

impl Address {
    pub fn new(location: Location, label: Option<String>) -> Self {
        Self {
            location,
            idx: None,
            label,
        }
    }

    /// Converts a link row joined with its location.
    pub fn from_entity(
        link: entity::entity_address::Model,
        location: entity::location::Model,
    ) -> Self {
        Self {
            location: Location::from_entity(location),
            idx: Some(link.idx),
            label: link.label,
        }
    }

    pub fn from_dto(dto: AddressDto) -> Self {
        Self {
            location: Location::from_dto(dto.location),
            idx: dto.idx,
            label: dto.label,
        }
    }

    pub fn into_dto(self) -> AddressDto {
        AddressDto {
            location: self.location.into_dto(),
            idx: self.idx,
            label: self.label,
        }
    }
}

/// Appends each address's change records to `change_descs`, tagged with the
/// address's one-based position in the list.
///
/// `Changed 'city' from 'A' to 'B'.` on the second address becomes
/// `Changed 'city' from 'A' to 'B' on address 2.`
pub fn promote_changes(addresses: &[Address], mut change_descs: Vec<String>) -> Vec<String> {
    for (position, address) in addresses.iter().enumerate() {
        for change in &address.location.change_log {
            change_descs.push(format!(
                "{} on address {}.",
                change.strip_suffix('.').unwrap_or(change),
                position + 1
            ));
        }
    }

    change_descs
}
