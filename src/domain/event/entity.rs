use crate::domain::event::value_objects::{EventDescription, EventId, EventLocation, EventName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// The mutable part of an event. Updates overwrite all of it at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub name: EventName,
    pub description: EventDescription,
    pub date_time: DateTime<Utc>,
    pub location: EventLocation,
}

#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub details: EventDetails,
    pub owner_id: UserId,
}

impl Event {
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewEvent {
    pub details: EventDetails,
    pub owner_id: UserId,
}

impl NewEvent {
    #[must_use]
    pub const fn new(details: EventDetails, owner_id: UserId) -> Self {
        Self { details, owner_id }
    }
}

/// Full overwrite of an existing event's details. The owner is not part of it.
#[derive(Debug, Clone)]
pub struct EventUpdate {
    pub id: EventId,
    pub details: EventDetails,
}
