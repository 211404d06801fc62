use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocationDto {
    /// Negative or absent for locations that have not been persisted yet.
    #[serde(default)]
    pub location_id: Option<i32>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub change_desc: Vec<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressDto {
    #[serde(flatten)]
    pub location: LocationDto,
    #[serde(default)]
    pub idx: Option<i32>,
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddressListDto {
    pub addresses: Vec<AddressDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub change_desc: Vec<String>,
}
