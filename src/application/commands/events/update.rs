use super::{EventCommandService, details::build_details};
use crate::{
    application::{
        dto::{AuthenticatedUser, EventDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::event::{EventId, EventUpdate, specifications::CanModifyEventSpec},
};
use chrono::{DateTime, Utc};

pub struct UpdateEventCommand {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
}

impl EventCommandService {
    /// # Errors
    ///
    /// `NotFound` for an unknown event, `Forbidden` when `actor` is not its owner,
    /// validation errors for blank fields.
    pub async fn update_event(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateEventCommand,
    ) -> ApplicationResult<EventDto> {
        let id = EventId::new(command.id)?;
        let event = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;

        if !CanModifyEventSpec::new(&event, actor.id).is_satisfied() {
            tracing::warn!(event_id = %id, actor_id = %actor.id, "update rejected: not the owner");
            return Err(ApplicationError::forbidden(
                "only the event owner can update it",
            ));
        }

        let details = build_details(
            command.name,
            command.description,
            command.date_time,
            command.location,
        )?;

        let updated = self.write_repo.update(EventUpdate { id, details }).await?;
        tracing::info!(event_id = %id, "event updated");
        Ok(updated.into())
    }
}
