use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::location::AddressDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[serde(default)]
    pub owner_pub_id: Option<String>,
    #[serde(default)]
    pub publicly_readable: Option<bool>,
    #[serde(rename = "authID", default)]
    pub auth_id: Option<String>,
    #[serde(rename = "legalID", default)]
    pub legal_id: Option<String>,
    #[serde(rename = "legalIDType", default)]
    pub legal_id_type: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub addresses: Vec<AddressDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub pub_id: String,
    pub owner_pub_id: Option<String>,
    pub publicly_readable: bool,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "authID")]
    pub auth_id: Option<String>,
    #[serde(rename = "legalID")]
    pub legal_id: Option<String>,
    #[serde(rename = "legalIDType")]
    pub legal_id_type: Option<String>,
    pub active: bool,
    pub addresses: Vec<AddressDto>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub change_desc: Vec<String>,
}
