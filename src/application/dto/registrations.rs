use crate::domain::registration::Registration;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegistrationDto {
    pub id: i64,
    pub user_id: i64,
    pub event_id: i64,
}

impl From<Registration> for RegistrationDto {
    fn from(registration: Registration) -> Self {
        Self {
            id: registration.id.into(),
            user_id: registration.user_id.into(),
            event_id: registration.event_id.into(),
        }
    }
}
