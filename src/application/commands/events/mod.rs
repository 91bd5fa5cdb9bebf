mod create;
mod delete;
mod details;
mod registration;
mod service;
mod update;

pub use create::CreateEventCommand;
pub use delete::DeleteEventCommand;
pub use registration::{CancelRegistrationCommand, RegisterForEventCommand};
pub use service::EventCommandService;
pub use update::UpdateEventCommand;
