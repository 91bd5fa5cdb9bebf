// src/infrastructure/security/token.rs
use super::claims::{TokenClaims, TokenError, parse_claims};
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::{security::TokenManager, time::Clock},
};
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, decode_header, encode,
    errors::ErrorKind,
};
use std::{fmt, str::FromStr, sync::Arc, time::Duration};

/// Only the symmetric HMAC family is accepted on verification.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

/// How the `exp` claim is judged against the current instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpiryPolicy {
    /// `exp` must be after now.
    #[default]
    Strict,
    /// Legacy rule: `exp` must be after one hour before now, so tokens live up
    /// to an extra hour past their stated expiry.
    Lenient,
}

impl ExpiryPolicy {
    #[must_use]
    pub fn accepts(self, exp: i64, now: DateTime<Utc>) -> bool {
        let cutoff = match self {
            Self::Strict => now,
            Self::Lenient => now - TimeDelta::hours(1),
        };
        exp > cutoff.timestamp()
    }
}

impl FromStr for ExpiryPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown token expiry policy '{other}'")),
        }
    }
}

impl fmt::Display for ExpiryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        })
    }
}

/// HS256 JSON Web Tokens signed with a process-wide shared secret.
#[derive(Clone)]
pub struct JwtTokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: TimeDelta,
    expiry_policy: ExpiryPolicy,
    clock: Arc<dyn Clock>,
}

impl JwtTokenManager {
    /// # Errors
    ///
    /// Fails on an empty secret or a TTL too large to represent.
    pub fn new(
        secret: &[u8],
        ttl: Duration,
        expiry_policy: ExpiryPolicy,
        clock: Arc<dyn Clock>,
    ) -> ApplicationResult<Self> {
        if secret.is_empty() {
            return Err(ApplicationError::infrastructure("token secret cannot be empty"));
        }
        let ttl = TimeDelta::from_std(ttl)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
            expiry_policy,
            clock,
        })
    }

    /// Full verification: header algorithm, signature, then expiry.
    ///
    /// # Errors
    ///
    /// Returns the first [`TokenError`] encountered in that order.
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let header = decode_header(token).map_err(|_| TokenError::Malformed)?;
        if !ACCEPTED_ALGORITHMS.contains(&header.alg) {
            return Err(TokenError::UnsupportedAlgorithm(format!("{:?}", header.alg)));
        }

        let mut validation = Validation::new(header.alg);
        // expiry is judged below against the injected clock
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(
            |err| match err.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                ErrorKind::InvalidAlgorithm => {
                    TokenError::UnsupportedAlgorithm(format!("{:?}", header.alg))
                }
                _ => TokenError::Malformed,
            },
        )?;

        if !self.expiry_policy.accepts(data.claims.exp, self.clock.now()) {
            return Err(TokenError::Expired);
        }

        Ok(data.claims)
    }

    fn sign(&self, claims: &TokenClaims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|err| TokenError::Signing(err.to_string()))
    }
}

#[async_trait]
impl TokenManager for JwtTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = self.clock.now();
        let exp = (issued_at + self.ttl).timestamp();
        let expires_at = DateTime::<Utc>::from_timestamp(exp, 0)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let claims = TokenClaims {
            email: subject.email,
            uid: i64::from(subject.user_id),
            exp,
        };
        let token = self
            .sign(&claims)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(AuthTokenDto {
            token,
            issued_at,
            expires_at,
            expires_in: self.ttl.num_seconds(),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.decode(token).and_then(parse_claims).map_err(|err| {
            if err == TokenError::Expired {
                tracing::debug!(reason = %err, "token rejected");
            } else {
                tracing::warn!(reason = %err, "token rejected");
            }
            ApplicationError::unauthorized("invalid token")
        })
    }
}
