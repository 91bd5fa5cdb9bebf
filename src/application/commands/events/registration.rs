use super::EventCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, RegistrationDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{errors::DomainError, event::EventId, registration::NewRegistration},
};

#[derive(Debug, Clone, Copy)]
pub struct RegisterForEventCommand {
    pub event_id: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct CancelRegistrationCommand {
    pub event_id: i64,
}

impl EventCommandService {
    /// Any authenticated user may register for any existing event, once.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown event, `Conflict` for a repeated registration.
    pub async fn register_for_event(
        &self,
        actor: &AuthenticatedUser,
        command: RegisterForEventCommand,
    ) -> ApplicationResult<RegistrationDto> {
        let event_id = EventId::new(command.event_id)?;
        if self.read_repo.find_by_id(event_id).await?.is_none() {
            return Err(ApplicationError::not_found("event not found"));
        }

        let registration = self
            .registration_repo
            .insert(NewRegistration {
                user_id: actor.id,
                event_id,
            })
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => {
                    ApplicationError::conflict("already registered for this event")
                }
                // the event vanished between the lookup and the insert
                DomainError::NotFound(_) => ApplicationError::not_found("event not found"),
                other => other.into(),
            })?;

        tracing::info!(event_id = %event_id, user_id = %actor.id, "registered for event");
        Ok(registration.into())
    }

    /// Removing a registration that does not exist is a no-op.
    ///
    /// # Errors
    ///
    /// Fails only on an invalid id or a store error.
    pub async fn cancel_registration(
        &self,
        actor: &AuthenticatedUser,
        command: CancelRegistrationCommand,
    ) -> ApplicationResult<()> {
        let event_id = EventId::new(command.event_id)?;
        let removed = self.registration_repo.delete(event_id, actor.id).await?;
        tracing::info!(event_id = %event_id, user_id = %actor.id, removed, "registration cancelled");
        Ok(())
    }
}
