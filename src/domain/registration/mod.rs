pub mod entity;
pub mod repository;

pub use entity::{NewRegistration, Registration, RegistrationId};
pub use repository::RegistrationRepository;
