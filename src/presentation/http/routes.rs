// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{auth, events, registrations};
use crate::presentation::http::middleware::require_authentication;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    handler::Handler,
    http::Method,
    middleware,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[must_use]
pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    // The gate wraps individual handlers, so a path mixing public and protected
    // methods keeps one method router and unknown methods still answer 405.
    Router::new()
        .route("/health", get(health))
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/users", get(auth::list_users))
        .route(
            "/events",
            get(events::list_events).post(
                events::create_event.layer(middleware::from_fn(require_authentication)),
            ),
        )
        .route(
            "/events/{id}",
            get(events::get_event)
                .put(events::update_event.layer(middleware::from_fn(require_authentication)))
                .delete(events::delete_event.layer(middleware::from_fn(require_authentication))),
        )
        .route(
            "/events/{id}/register",
            post(registrations::register.layer(middleware::from_fn(require_authentication)))
                .delete(registrations::cancel.layer(middleware::from_fn(require_authentication))),
        )
        .route("/registrations", get(registrations::list_registrations))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[allow(clippy::unused_async)]
pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
