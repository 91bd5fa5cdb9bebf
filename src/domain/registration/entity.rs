use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::EventId;
use crate::domain::user::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistrationId(i64);

impl RegistrationId {
    /// # Errors
    ///
    /// Returns `DomainError::Validation` unless `id` is positive.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::validation("registration id must be positive"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<RegistrationId> for i64 {
    fn from(value: RegistrationId) -> Self {
        value.0
    }
}

/// A user's intent to attend an event. At most one per (user, event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: RegistrationId,
    pub user_id: UserId,
    pub event_id: EventId,
}

#[derive(Debug, Clone, Copy)]
pub struct NewRegistration {
    pub user_id: UserId,
    pub event_id: EventId,
}
