//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They are responsible for:
//!
//! - **Completion**: resolving locations against the geocoder before anything is written
//! - **Orchestration**: coordinating repositories inside one transaction
//! - **Domain Models**: working with domain models rather than DTOs or entity models

pub mod address_list;
pub mod entity;
pub mod location;
pub mod user;
