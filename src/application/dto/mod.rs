pub mod auth;
pub mod events;
pub mod registrations;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use events::EventDto;
pub use registrations::RegistrationDto;
pub use users::UserDto;
