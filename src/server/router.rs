use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        entity::{get_addresses, replace_addresses},
        health::ping,
        user::{create_user, get_user},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping))
        .route("/api/users", post(create_user))
        .route("/api/users/{pub_id}", get(get_user))
        .route(
            "/api/entities/{pub_id}/addresses",
            get(get_addresses).put(replace_addresses),
        )
}
