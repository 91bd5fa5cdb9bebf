// src/presentation/http/controllers/registrations.rs
use crate::application::{
    commands::events::{CancelRegistrationCommand, RegisterForEventCommand},
    dto::RegistrationDto,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde_json::json;

/// # Errors
///
/// 404 for an unknown event, 409 when already registered.
pub async fn register(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(event_id): PathParam<i64>,
) -> HttpResult<(StatusCode, Json<RegistrationDto>)> {
    let registration = state
        .services
        .event_commands
        .register_for_event(&user, RegisterForEventCommand { event_id })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(registration)))
}

/// # Errors
///
/// 400 for a non-numeric id; a missing registration is not an error.
pub async fn cancel(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(event_id): PathParam<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .event_commands
        .cancel_registration(&user, CancelRegistrationCommand { event_id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "cancelled" })))
}

/// # Errors
///
/// Store failures surface as 500.
pub async fn list_registrations(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<RegistrationDto>>> {
    state
        .services
        .registration_queries
        .list_registrations()
        .await
        .into_http()
        .map(Json)
}
