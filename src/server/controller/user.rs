use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::CreateUserDto,
    server::{
        error::AppError, model::user::CreateUserParam, service::user::UserService,
        state::AppState,
    },
};

/// POST /api/users - Create a user with its address list
///
/// Addresses are completed against the geocoder before anything is written. Any
/// canonical values that replaced submitted ones are listed in `changeDesc`.
///
/// # Request Body
/// - `CreateUserDto`: user fields and an optional ordered `addresses` list
///
/// # Returns
/// - `201 Created`: the created `UserDto` with its stored addresses
/// - `422 Unprocessable Entity`: an address could not be completed
/// - `502 Bad Gateway`: the geocoder could not be reached or refused the request
/// - `500 Internal Server Error`: database error
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let (param, addresses) = CreateUserParam::from_dto(payload);

    let user_service = UserService::new(&state.db, state.geocoder.as_ref());
    let (user, addresses) = user_service.create_user(param, addresses).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto(addresses))))
}

/// GET /api/users/{pub_id} - Get a user with its address list
///
/// # Path Parameters
/// - `pub_id`: public id of the user
///
/// # Returns
/// - `200 OK`: `UserDto` with addresses in list order
/// - `404 Not Found`: no user with that public id
/// - `500 Internal Server Error`: database error
pub async fn get_user(
    State(state): State<AppState>,
    Path(pub_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db, state.geocoder.as_ref());

    let (user, addresses) = user_service
        .get_user(&pub_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", pub_id)))?;

    Ok((StatusCode::OK, Json(user.into_dto(addresses))))
}
