use crate::domain::event::entity::Event;
use crate::domain::user::UserId;

/// Only the recorded owner may update or delete an event.
pub struct CanModifyEventSpec<'a> {
    event: &'a Event,
    user_id: UserId,
}

impl<'a> CanModifyEventSpec<'a> {
    #[must_use]
    pub const fn new(event: &'a Event, user_id: UserId) -> Self {
        Self { event, user_id }
    }

    #[must_use]
    pub fn is_satisfied(&self) -> bool {
        self.event.is_owned_by(self.user_id)
    }
}
