pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Event, EventDetails, EventUpdate, NewEvent};
pub use repository::{EventReadRepository, EventWriteRepository};
pub use value_objects::{EventDescription, EventId, EventLocation, EventName};
