// src/infrastructure/security/claims.rs
use crate::application::dto::AuthenticatedUser;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload segment of an access token. `exp` is seconds since the Unix epoch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub email: String,
    pub uid: i64,
    pub exp: i64,
}

/// Why a token was rejected. Callers only ever see "invalid token"; this is for logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,
    #[error("signing algorithm {0} is not accepted")]
    UnsupportedAlgorithm(String),
    #[error("signature does not match")]
    SignatureMismatch,
    #[error("token expired")]
    Expired,
    #[error("token could not be signed: {0}")]
    Signing(String),
}

/// # Errors
///
/// `TokenError::Malformed` when `uid` is not a valid user id or `exp` is out of range.
pub fn parse_claims(claims: TokenClaims) -> Result<AuthenticatedUser, TokenError> {
    let id = UserId::new(claims.uid).map_err(|_| TokenError::Malformed)?;
    let expires_at = DateTime::<Utc>::from_timestamp(claims.exp, 0).ok_or(TokenError::Malformed)?;

    Ok(AuthenticatedUser {
        id,
        email: claims.email,
        expires_at,
    })
}
