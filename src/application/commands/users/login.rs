use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthTokenDto, TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, User},
};

const INVALID_CREDENTIALS: &str = "invalid credentials";

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub struct LoginResult {
    pub token: AuthTokenDto,
    pub user: UserDto,
}

impl UserCommandService {
    /// # Errors
    ///
    /// `Unauthorized("invalid credentials")` whenever the credentials do not check out.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<LoginResult> {
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        let user = self
            .find_and_authenticate_user(&email, &command.password)
            .await?;

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: user.id,
                email: user.email.to_string(),
            })
            .await?;

        tracing::info!(user_id = %user.id, "user logged in");
        Ok(LoginResult {
            token,
            user: user.into(),
        })
    }

    /// Unknown email, wrong password and an unreadable stored hash all produce the
    /// same error, and each path runs the hasher once.
    async fn find_and_authenticate_user(
        &self,
        email: &Email,
        password: &str,
    ) -> ApplicationResult<User> {
        let Some(user) = self.user_repo.find_by_email(email).await? else {
            // equalise timing with the verify path; the result is irrelevant
            if let Err(err) = self.password_hasher.hash(password).await {
                tracing::warn!(error = %err, "dummy hash failed");
            }
            tracing::debug!("login rejected: unknown email");
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        match self
            .password_hasher
            .verify(password, user.password_hash.as_str())
            .await
        {
            Ok(true) => Ok(user),
            Ok(false) => {
                tracing::debug!(user_id = %user.id, "login rejected: password mismatch");
                Err(ApplicationError::unauthorized(INVALID_CREDENTIALS))
            }
            Err(err) => {
                tracing::error!(user_id = %user.id, error = %err, "stored password hash unusable");
                Err(ApplicationError::unauthorized(INVALID_CREDENTIALS))
            }
        }
    }
}
