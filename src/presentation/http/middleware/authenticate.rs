// src/presentation/http/middleware/authenticate.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    extract::Request,
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};
use tracing::Instrument;

/// Gate for protected routes: verifies the bearer token and binds the resulting
/// `AuthenticatedUser` to the request before any handler runs.
///
/// Usage: `post(handler.layer(axum::middleware::from_fn(require_authentication)))`
pub async fn require_authentication(mut req: Request, next: Next) -> Response {
    let Some(state) = req.extensions().get::<HttpState>().cloned() else {
        return HttpError::from_error(ApplicationError::infrastructure(
            "application state missing",
        ))
        .into_response();
    };

    let Some(token) = bearer_token(req.headers()) else {
        tracing::debug!("request rejected: missing Authorization header");
        return HttpError::from_error(ApplicationError::unauthorized("not authorized"))
            .into_response();
    };

    match state.services.authenticate(&token).await {
        Ok(user) => {
            let span = tracing::info_span!(
                "authenticated",
                user_id = %user.id,
                email = %user.email,
                token_expires_at = %user.expires_at,
            );
            req.extensions_mut().insert(user);
            next.run(req).instrument(span).await
        }
        Err(err) => HttpError::from_error(err).into_response(),
    }
}

/// `Authorization: Bearer <token>`; a bare token is also accepted for older clients.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    if let Some(header) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(header.token().to_string());
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
