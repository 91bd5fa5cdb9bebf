// src/presentation/http/extractors.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationError};
use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
};

use super::error::HttpError;

/// Identity bound by the authentication middleware. Rejects with 401 when the
/// route was not wrapped by it, so a handler can never run anonymously by mistake.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(Self)
            .ok_or_else(|| HttpError::from_error(ApplicationError::unauthorized("not authorized")))
    }
}

/// JSON body whose rejections use the service's error format.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// Path parameters whose rejections use the service's error format.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(HttpError))]
pub struct PathParam<T>(pub T);
