use super::value_objects::{Email, PasswordHash, UserId};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: PasswordHash,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub password_hash: PasswordHash,
}

impl NewUser {
    #[must_use]
    pub const fn new(email: Email, password_hash: PasswordHash) -> Self {
        Self {
            email,
            password_hash,
        }
    }
}
