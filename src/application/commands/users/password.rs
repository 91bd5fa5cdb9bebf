use crate::application::error::{ApplicationError, ApplicationResult};

/// Presence check only; strength rules are not enforced.
pub(super) fn validate_password(password: &str) -> ApplicationResult<()> {
    if password.is_empty() {
        return Err(ApplicationError::validation("password is required"));
    }
    Ok(())
}
