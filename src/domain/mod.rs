pub mod errors;
pub mod event;
pub mod registration;
pub mod user;
