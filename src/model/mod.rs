//! Serializable request and response shapes for the HTTP API.

pub mod api;
pub mod location;
pub mod user;
