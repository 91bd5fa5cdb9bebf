use super::EventQueryService;
use crate::{
    application::{
        dto::EventDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::event::EventId,
};

#[derive(Debug, Clone, Copy)]
pub struct GetEventByIdQuery {
    pub id: i64,
}

impl EventQueryService {
    /// # Errors
    ///
    /// `NotFound` when no event has the id.
    pub async fn get_event_by_id(&self, query: GetEventByIdQuery) -> ApplicationResult<EventDto> {
        let id = EventId::new(query.id)?;
        let event = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("event not found"))?;
        Ok(event.into())
    }
}
