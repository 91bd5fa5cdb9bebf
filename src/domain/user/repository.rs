use super::entity::{NewUser, User};
use super::value_objects::Email;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `DomainError::Conflict` when the email is already taken.
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn list(&self) -> DomainResult<Vec<User>>;
}
