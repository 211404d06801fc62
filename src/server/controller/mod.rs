//! HTTP request handlers.
//!
//! Controllers convert DTOs to domain parameters, call the service layer and convert the
//! results back to DTOs. Errors propagate as `AppError` and are turned into responses by
//! its `IntoResponse` implementation.

pub mod entity;
pub mod health;
pub mod user;
