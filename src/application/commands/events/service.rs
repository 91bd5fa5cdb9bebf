use std::sync::Arc;

use crate::domain::{
    event::{EventReadRepository, EventWriteRepository},
    registration::RegistrationRepository,
};

pub struct EventCommandService {
    pub(super) write_repo: Arc<dyn EventWriteRepository>,
    pub(super) read_repo: Arc<dyn EventReadRepository>,
    pub(super) registration_repo: Arc<dyn RegistrationRepository>,
}

impl EventCommandService {
    #[must_use]
    pub const fn new(
        write_repo: Arc<dyn EventWriteRepository>,
        read_repo: Arc<dyn EventReadRepository>,
        registration_repo: Arc<dyn RegistrationRepository>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            registration_repo,
        }
    }
}
