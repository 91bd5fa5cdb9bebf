// src/presentation/http/controllers/events.rs
use crate::application::{
    commands::events::{CreateEventCommand, DeleteEventCommand, UpdateEventCommand},
    dto::EventDto,
    queries::events::GetEventByIdQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, PathParam};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

/// Body for both create and update. Unknown fields (an `owner_id` included) are ignored.
#[derive(Debug, Deserialize)]
pub struct EventRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "date")]
    pub date_time: DateTime<Utc>,
    pub location: String,
}

/// # Errors
///
/// Store failures surface as 500.
pub async fn list_events(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<EventDto>>> {
    state
        .services
        .event_queries
        .list_events()
        .await
        .into_http()
        .map(Json)
}

/// # Errors
///
/// 404 for an unknown id, 400 for a non-numeric one.
pub async fn get_event(
    Extension(state): Extension<HttpState>,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<EventDto>> {
    state
        .services
        .event_queries
        .get_event_by_id(GetEventByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

/// # Errors
///
/// 400 when a field is missing or blank.
pub async fn create_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<EventRequest>,
) -> HttpResult<(StatusCode, Json<EventDto>)> {
    let command = CreateEventCommand {
        name: payload.name,
        description: payload.description,
        date_time: payload.date_time,
        location: payload.location,
    };

    let event = state
        .services
        .event_commands
        .create_event(&user, command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(event)))
}

/// # Errors
///
/// 404 for an unknown event, 403 when the caller is not its owner.
pub async fn update_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
    JsonBody(payload): JsonBody<EventRequest>,
) -> HttpResult<Json<EventDto>> {
    let command = UpdateEventCommand {
        id,
        name: payload.name,
        description: payload.description,
        date_time: payload.date_time,
        location: payload.location,
    };

    state
        .services
        .event_commands
        .update_event(&user, command)
        .await
        .into_http()
        .map(Json)
}

/// # Errors
///
/// 404 for an unknown event, 403 when the caller is not its owner.
pub async fn delete_event(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    PathParam(id): PathParam<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .event_commands
        .delete_event(&user, DeleteEventCommand { id })
        .await
        .into_http()?;

    Ok(Json(json!({ "status": "deleted" })))
}
