use std::sync::Arc;

use crate::{
    application::{dto::RegistrationDto, error::ApplicationResult},
    domain::registration::RegistrationRepository,
};

pub struct RegistrationQueryService {
    registration_repo: Arc<dyn RegistrationRepository>,
}

impl RegistrationQueryService {
    #[must_use]
    pub const fn new(registration_repo: Arc<dyn RegistrationRepository>) -> Self {
        Self { registration_repo }
    }

    /// # Errors
    ///
    /// Propagates store failures.
    pub async fn list_registrations(&self) -> ApplicationResult<Vec<RegistrationDto>> {
        let registrations = self.registration_repo.list().await?;
        Ok(registrations
            .into_iter()
            .map(RegistrationDto::from)
            .collect())
    }
}
