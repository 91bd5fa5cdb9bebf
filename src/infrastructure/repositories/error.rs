// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

/// Translate a store failure into the domain taxonomy. The original message is kept
/// so it can be logged; the HTTP layer decides what the caller sees.
#[must_use]
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                return DomainError::Conflict(db_err.message().to_string());
            }
            if db_err.is_foreign_key_violation() {
                return DomainError::NotFound("referenced record not found".into());
            }
            DomainError::persistence(db_err.message())
        }
        other => DomainError::persistence(other.to_string()),
    }
}
