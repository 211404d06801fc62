use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::location::{AddressDto, AddressListDto},
    server::{
        error::AppError, model::location::Address, service::entity::EntityService,
        state::AppState,
    },
};

/// GET /api/entities/{pub_id}/addresses - Get an entity's address list
///
/// # Returns
/// - `200 OK`: `AddressListDto` ordered by `idx`
/// - `404 Not Found`: no entity with that public id
pub async fn get_addresses(
    State(state): State<AppState>,
    Path(pub_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entity_service = EntityService::new(&state.db, state.geocoder.as_ref());
    let addresses = entity_service.get_addresses(&pub_id).await?;

    Ok((
        StatusCode::OK,
        Json(AddressListDto {
            addresses: addresses.into_iter().map(Address::into_dto).collect(),
            change_desc: Vec::new(),
        }),
    ))
}

/// PUT /api/entities/{pub_id}/addresses - Replace an entity's address list
///
/// The submitted list fully determines the stored one: order gives `idx`, entries with
/// a negative or missing `locationId` are completed and stored as new locations, and
/// entries with an existing `locationId` are linked as given.
///
/// # Request Body
/// - JSON array of `AddressDto`
///
/// # Returns
/// - `200 OK`: the stored `AddressListDto`, with `changeDesc` listing canonical values
///   that replaced submitted ones
/// - `404 Not Found`: no entity with that public id
/// - `422 Unprocessable Entity`: an address could not be completed
/// - `502 Bad Gateway`: geocoder failure
pub async fn replace_addresses(
    State(state): State<AppState>,
    Path(pub_id): Path<String>,
    Json(payload): Json<Vec<AddressDto>>,
) -> Result<impl IntoResponse, AppError> {
    let addresses = payload.into_iter().map(Address::from_dto).collect();

    let entity_service = EntityService::new(&state.db, state.geocoder.as_ref());
    let (stored, change_desc) = entity_service.replace_addresses(&pub_id, addresses).await?;

    Ok((
        StatusCode::OK,
        Json(AddressListDto {
            addresses: stored.into_iter().map(Address::into_dto).collect(),
            change_desc,
        }),
    ))
}
