use super::{EventCommandService, details::build_details};
use crate::{
    application::{
        dto::{AuthenticatedUser, EventDto},
        error::ApplicationResult,
    },
    domain::event::NewEvent,
};
use chrono::{DateTime, Utc};

/// There is no owner field: the caller always becomes the owner.
pub struct CreateEventCommand {
    pub name: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
}

impl EventCommandService {
    /// # Errors
    ///
    /// Fails on blank fields or when the store rejects the insert.
    pub async fn create_event(
        &self,
        actor: &AuthenticatedUser,
        command: CreateEventCommand,
    ) -> ApplicationResult<EventDto> {
        let details = build_details(
            command.name,
            command.description,
            command.date_time,
            command.location,
        )?;

        let created = self
            .write_repo
            .insert(NewEvent::new(details, actor.id))
            .await?;

        tracing::info!(event_id = %created.id, owner_id = %actor.id, "event created");
        Ok(created.into())
    }
}
