use super::EventCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::event::{EventId, specifications::CanModifyEventSpec},
};

#[derive(Debug, Clone, Copy)]
pub struct DeleteEventCommand {
    pub id: i64,
}

impl EventCommandService {
    /// # Errors
    ///
    /// `NotFound` for an unknown event, `Forbidden` when `actor` is not its owner.
    pub async fn delete_event(
        &self,
        actor: &AuthenticatedUser,
        command: DeleteEventCommand,
    ) -> ApplicationResult<()> {
        let id = EventId::new(command.id)?;
        let event = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;

        if !CanModifyEventSpec::new(&event, actor.id).is_satisfied() {
            tracing::warn!(event_id = %id, actor_id = %actor.id, "delete rejected: not the owner");
            return Err(ApplicationError::forbidden(
                "only the event owner can delete it",
            ));
        }

        self.write_repo.delete(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }
}
