use crate::domain::user::User;
use serde::{Deserialize, Serialize};

/// Public view of a user. The password hash is deliberately absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email.into(),
        }
    }
}
