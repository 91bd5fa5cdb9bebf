use crate::domain::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "date")]
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub owner_id: i64,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        let Event {
            id,
            details,
            owner_id,
        } = event;
        Self {
            id: id.into(),
            name: details.name.into(),
            description: details.description.into(),
            date_time: details.date_time,
            location: details.location.into(),
            owner_id: owner_id.into(),
        }
    }
}
