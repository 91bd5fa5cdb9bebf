use super::EventQueryService;
use crate::application::{dto::EventDto, error::ApplicationResult};

impl EventQueryService {
    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list_events(&self) -> ApplicationResult<Vec<EventDto>> {
        let events = self.read_repo.list().await?;
        Ok(events.into_iter().map(EventDto::from).collect())
    }
}
