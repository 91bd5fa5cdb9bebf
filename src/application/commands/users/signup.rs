use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        user::{Email, NewUser, PasswordHash},
    },
};

pub struct SignupUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// # Errors
    ///
    /// Validation errors for empty fields, `Conflict` for a taken email, and
    /// `PasswordHashing` when hashing fails (nothing is stored in that case).
    pub async fn signup(&self, command: SignupUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        // The hash must exist before anything touches the store.
        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;

        let user = self
            .user_repo
            .insert(NewUser::new(email, password_hash))
            .await
            .map_err(|err| match err {
                DomainError::Conflict(_) => ApplicationError::conflict("email already registered"),
                other => other.into(),
            })?;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user.into())
    }
}
