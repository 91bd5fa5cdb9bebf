// tests/support/mocks/security.rs
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use events_booking::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

const PREFIX: &str = "hashed::";

/// Deterministic, fast stand-in for Argon2.
#[derive(Clone, Debug, Default)]
pub struct StubPasswordHasher;

#[async_trait]
impl PasswordHasher for StubPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("{PREFIX}{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        match expected_hash.strip_prefix(PREFIX) {
            Some(stored) => Ok(stored == password),
            None => Err(ApplicationError::infrastructure("unreadable stub hash")),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FailingPasswordHasher;

#[async_trait]
impl PasswordHasher for FailingPasswordHasher {
    async fn hash(&self, _password: &str) -> ApplicationResult<String> {
        Err(ApplicationError::password_hashing("hasher unavailable"))
    }

    async fn verify(&self, _password: &str, _expected_hash: &str) -> ApplicationResult<bool> {
        Err(ApplicationError::password_hashing("hasher unavailable"))
    }
}

/// Stub hasher that records how many times each operation ran.
#[derive(Debug, Default)]
pub struct CountingPasswordHasher {
    hashes: AtomicUsize,
    verifies: AtomicUsize,
}

impl CountingPasswordHasher {
    pub fn hashes(&self) -> usize {
        self.hashes.load(Ordering::SeqCst)
    }

    pub fn verifies(&self) -> usize {
        self.verifies.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PasswordHasher for CountingPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        self.hashes.fetch_add(1, Ordering::SeqCst);
        StubPasswordHasher.hash(password).await
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<bool> {
        self.verifies.fetch_add(1, Ordering::SeqCst);
        StubPasswordHasher.verify(password, expected_hash).await
    }
}
