//! Error hierarchy of the server and its mapping onto HTTP responses.
//!
//! Location and address completion errors are client-visible (422, or 502 when the
//! geocoder itself failed). Storage and database failures are logged and answered
//! with a generic 500.

pub mod config;
pub mod geocode;
pub mod location;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError,
        location::{AddressCompletionError, LocationError},
        storage::StorageError,
    },
};

/// Error returned by every service and handler.
#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment variable at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Location classification, resolution or persistence precondition failure.
    ///
    /// Delegates to `LocationError::into_response()` (422, or 502 for geocoder
    /// failures).
    #[error(transparent)]
    LocationErr(#[from] LocationError),

    /// Failure while completing an ordered address list.
    ///
    /// Delegates to `AddressCompletionError::into_response()`.
    #[error(transparent)]
    AddressCompletionErr(#[from] AddressCompletionError),

    /// Address list synchronization statement failure, tagged with its step.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// SeaORM failure outside an address list write.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unknown user or entity public id. 404.
    #[error("{0}")]
    NotFound(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` variant
/// - 422 / 502 - For location errors, delegated to their own response mapping
/// - 500 Internal Server Error - For all other error types (DbErr, StorageErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::LocationErr(err) => err.into_response(),
            Self::AddressCompletionErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
