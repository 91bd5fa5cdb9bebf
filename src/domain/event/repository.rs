use crate::domain::errors::DomainResult;
use crate::domain::event::entity::{Event, EventUpdate, NewEvent};
use crate::domain::event::value_objects::EventId;
use async_trait::async_trait;

#[async_trait]
pub trait EventWriteRepository: Send + Sync {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event>;
    async fn update(&self, update: EventUpdate) -> DomainResult<Event>;
    /// Removes the event and, through the store's cascade, its registrations.
    async fn delete(&self, id: EventId) -> DomainResult<()>;
}

#[async_trait]
pub trait EventReadRepository: Send + Sync {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>>;
    async fn list(&self) -> DomainResult<Vec<Event>>;
}
