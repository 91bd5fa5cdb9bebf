use std::sync::Arc;

use crate::{
    application::{dto::UserDto, error::ApplicationResult},
    domain::user::UserRepository,
};

pub struct UserQueryService {
    user_repo: Arc<dyn UserRepository>,
}

impl UserQueryService {
    #[must_use]
    pub const fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list_users(&self) -> ApplicationResult<Vec<UserDto>> {
        let users = self.user_repo.list().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}
