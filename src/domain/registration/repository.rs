use crate::domain::errors::DomainResult;
use crate::domain::event::EventId;
use crate::domain::registration::entity::{NewRegistration, Registration};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the pair is already registered.
    async fn insert(&self, registration: NewRegistration) -> DomainResult<Registration>;

    /// Returns the number of rows removed; zero is not an error.
    async fn delete(&self, event_id: EventId, user_id: UserId) -> DomainResult<u64>;

    async fn list(&self) -> DomainResult<Vec<Registration>>;
}
