use crate::{
    application::error::ApplicationResult,
    domain::event::{EventDescription, EventDetails, EventLocation, EventName},
};
use chrono::{DateTime, Utc};

pub(super) fn build_details(
    name: String,
    description: String,
    date_time: DateTime<Utc>,
    location: String,
) -> ApplicationResult<EventDetails> {
    Ok(EventDetails {
        name: EventName::new(name)?,
        description: EventDescription::new(description)?,
        date_time,
        location: EventLocation::new(location)?,
    })
}
