// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{events::EventCommandService, users::UserCommandService},
        dto::AuthenticatedUser,
        ports::security::{PasswordHasher, TokenManager},
        queries::{
            events::EventQueryService, registrations::RegistrationQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        event::{EventReadRepository, EventWriteRepository},
        registration::RegistrationRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub event_commands: Arc<EventCommandService>,
    pub event_queries: Arc<EventQueryService>,
    pub registration_queries: Arc<RegistrationQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    #[must_use]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        event_write_repo: Arc<dyn EventWriteRepository>,
        event_read_repo: Arc<dyn EventReadRepository>,
        registration_repo: Arc<dyn RegistrationRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn TokenManager>,
    ) -> Self {
        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&user_repo),
            password_hasher,
            Arc::clone(&token_manager),
        ));
        let user_queries = Arc::new(UserQueryService::new(user_repo));

        let event_commands = Arc::new(EventCommandService::new(
            event_write_repo,
            Arc::clone(&event_read_repo),
            Arc::clone(&registration_repo),
        ));
        let event_queries = Arc::new(EventQueryService::new(event_read_repo));
        let registration_queries = Arc::new(RegistrationQueryService::new(registration_repo));

        Self {
            user_commands,
            user_queries,
            event_commands,
            event_queries,
            registration_queries,
            token_manager,
        }
    }

    /// Verify a raw bearer token and return the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Unauthorized` for any token that fails verification.
    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
