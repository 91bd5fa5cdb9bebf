// src/presentation/http/middleware/mod.rs
pub mod authenticate;

pub use authenticate::require_authentication;
