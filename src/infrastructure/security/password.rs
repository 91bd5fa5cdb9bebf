// src/infrastructure/security/password.rs
use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::security::PasswordHasher,
};
use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{
        Error as PasswordHashError, PasswordHash, PasswordHasher as _, PasswordVerifier,
        SaltString, rand_core::OsRng,
    },
};
use async_trait::async_trait;

/// Argon2id with a fixed work factor. Every hash embeds a fresh random salt.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    params: Params,
}

impl Argon2PasswordHasher {
    /// Custom cost parameters (memory in KiB, iterations, lanes).
    ///
    /// # Errors
    ///
    /// Fails when Argon2 rejects the parameter combination.
    pub fn with_params(m_cost: u32, t_cost: u32, p_cost: u32) -> ApplicationResult<Self> {
        let params = Params::new(m_cost, t_cost, p_cost, None)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        let password = password.to_owned();
        let argon2 = self.argon2();
        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| ApplicationError::password_hashing(err.to_string()))
        })
        .await
        .map_err(|err| ApplicationError::password_hashing(err.to_string()))?
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        let password = password.to_owned();
        let expected_hash = expected_hash.to_owned();
        let argon2 = self.argon2();
        tokio::task::spawn_blocking(move || {
            let parsed = PasswordHash::new(&expected_hash)
                .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(err) => Err(ApplicationError::infrastructure(err.to_string())),
            }
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
    }
}
