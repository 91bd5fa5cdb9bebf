// tests/support/mocks/mod.rs
pub mod security;
pub mod time;

pub use security::*;
pub use time::*;
