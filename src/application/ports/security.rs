use crate::application::{
    ApplicationResult,
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
};
use async_trait::async_trait;

#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Salted one-way hash. A failure here must abort whatever was about to persist it.
    async fn hash(&self, password: &str) -> ApplicationResult<String>;

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unreadable.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool>;
}

#[async_trait]
pub trait TokenManager: Send + Sync {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto>;

    /// Every rejection surfaces as the same `Unauthorized("invalid token")`.
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
