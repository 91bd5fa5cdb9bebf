use std::sync::Arc;

use crate::domain::event::EventReadRepository;

pub struct EventQueryService {
    pub(super) read_repo: Arc<dyn EventReadRepository>,
}

impl EventQueryService {
    #[must_use]
    pub const fn new(read_repo: Arc<dyn EventReadRepository>) -> Self {
        Self { read_repo }
    }
}
