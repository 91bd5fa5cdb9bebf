// tests/user_command_service_unit.rs
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

mod support;

use events_booking::application::commands::users::{
    LoginUserCommand, SignupUserCommand, UserCommandService,
};
use events_booking::application::error::ApplicationError;
use events_booking::application::ports::security::{PasswordHasher, TokenManager};
use events_booking::domain::errors::{DomainError, DomainResult};
use events_booking::domain::user::{Email, NewUser, PasswordHash, User, UserId, UserRepository};
use events_booking::infrastructure::security::password::Argon2PasswordHasher;
use events_booking::infrastructure::security::token::{ExpiryPolicy, JwtTokenManager};

/// bcrypt output left behind by an earlier deployment; Argon2 cannot parse it.
const LEGACY_BCRYPT_HASH: &str = "$2a$14$ajq8Q7fbtFRQvXpdCq7Jcuy.Rx1h/L4J60Otx.gyNLbAYctGMJ9tK";

#[derive(Default)]
struct InMemoryUserRepo {
    inner: Mutex<HashMap<i64, User>>,
}

impl InMemoryUserRepo {
    fn stored(&self) -> Vec<User> {
        self.inner.lock().unwrap().values().cloned().collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut map = self.inner.lock().unwrap();
        if map
            .values()
            .any(|u| u.email.as_str() == new_user.email.as_str())
        {
            return Err(DomainError::Conflict("users.email".into()));
        }
        let id = i64::try_from(map.len()).unwrap() + 1;
        let user = User {
            id: UserId::new(id)?,
            email: new_user.email,
            password_hash: new_user.password_hash,
        };
        map.insert(id, user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let map = self.inner.lock().unwrap();
        Ok(map
            .values()
            .find(|u| u.email.as_str() == email.as_str())
            .cloned())
    }

    async fn list(&self) -> DomainResult<Vec<User>> {
        let mut users = self.stored();
        users.sort_by_key(|u| i64::from(u.id));
        Ok(users)
    }
}

fn service(repo: Arc<InMemoryUserRepo>, hasher: Arc<dyn PasswordHasher>) -> UserCommandService {
    let tokens: Arc<dyn TokenManager> = Arc::new(
        JwtTokenManager::new(
            support::TEST_SECRET,
            support::TEST_TTL,
            ExpiryPolicy::Strict,
            Arc::new(support::ManualClock::new()),
        )
        .unwrap(),
    );
    UserCommandService::new(repo, hasher, tokens)
}

fn signup(email: &str, password: &str) -> SignupUserCommand {
    SignupUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

fn login(email: &str, password: &str) -> LoginUserCommand {
    LoginUserCommand {
        email: email.into(),
        password: password.into(),
    }
}

#[tokio::test]
async fn signup_stores_hash_not_plaintext() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo.clone(), Arc::new(support::StubPasswordHasher));

    let user = svc.signup(signup("ada@example.com", "s3cret")).await.unwrap();
    assert_eq!(user.email, "ada@example.com");

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_ne!(stored[0].password_hash.as_str(), "s3cret");
    assert_eq!(stored[0].password_hash.as_str(), "hashed::s3cret");
}

#[tokio::test]
async fn duplicate_email_conflicts_and_keeps_original() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo.clone(), Arc::new(support::StubPasswordHasher));

    svc.signup(signup("ada@example.com", "first")).await.unwrap();
    let err = svc
        .signup(signup("ada@example.com", "second"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Conflict(_)), "got {err:?}");

    let stored = repo.stored();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].password_hash.as_str(), "hashed::first");
}

#[tokio::test]
async fn login_issues_token_for_matching_credentials() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo, Arc::new(support::StubPasswordHasher));
    let created = svc.signup(signup("ada@example.com", "s3cret")).await.unwrap();

    let result = svc.login(login("ada@example.com", "s3cret")).await.unwrap();
    assert_eq!(result.user, created);
    assert!(!result.token.token.is_empty());
    assert_eq!(result.token.expires_in, 3600);
    assert_eq!(result.token.issued_at, support::fixed_now());
}

#[tokio::test]
async fn unknown_email_and_wrong_password_fail_identically() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo, Arc::new(support::StubPasswordHasher));
    svc.signup(signup("ada@example.com", "s3cret")).await.unwrap();

    let unknown = svc
        .login(login("nobody@example.com", "s3cret"))
        .await
        .unwrap_err();
    let mismatch = svc
        .login(login("ada@example.com", "wrong"))
        .await
        .unwrap_err();

    match (unknown, mismatch) {
        (ApplicationError::Unauthorized(a), ApplicationError::Unauthorized(b)) => {
            assert_eq!(a, b);
            assert_eq!(a, "invalid credentials");
        }
        other => panic!("expected two unauthorized errors, got {other:?}"),
    }
}

#[tokio::test]
async fn unreadable_stored_hash_is_rejected_like_a_wrong_password() {
    let repo = Arc::new(InMemoryUserRepo::default());
    repo.insert(NewUser::new(
        Email::new("legacy@example.com").unwrap(),
        PasswordHash::new(LEGACY_BCRYPT_HASH).unwrap(),
    ))
    .await
    .unwrap();
    let hasher = Argon2PasswordHasher::with_params(1024, 1, 1).unwrap();
    let svc = service(repo, Arc::new(hasher));

    let legacy = svc
        .login(login("legacy@example.com", "whatever"))
        .await
        .unwrap_err();
    let unknown = svc
        .login(login("nobody@example.com", "whatever"))
        .await
        .unwrap_err();

    match (legacy, unknown) {
        (ApplicationError::Unauthorized(a), ApplicationError::Unauthorized(b)) => {
            assert_eq!(a, "invalid credentials");
            assert_eq!(a, b);
        }
        other => panic!("expected two unauthorized errors, got {other:?}"),
    }
}

#[tokio::test]
async fn unknown_email_still_runs_the_hasher() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let hasher = Arc::new(support::CountingPasswordHasher::default());
    let svc = service(repo, hasher.clone());

    let err = svc
        .login(login("nobody@example.com", "s3cret"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Unauthorized(_)), "got {err:?}");
    assert_eq!(hasher.hashes(), 1);
    assert_eq!(hasher.verifies(), 0);
}

#[tokio::test]
async fn unknown_email_is_unauthorized_even_when_the_dummy_hash_fails() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo, Arc::new(support::FailingPasswordHasher));

    let err = svc
        .login(login("nobody@example.com", "s3cret"))
        .await
        .unwrap_err();

    assert!(
        matches!(&err, ApplicationError::Unauthorized(msg) if msg == "invalid credentials"),
        "got {err:?}"
    );
}

#[tokio::test]
async fn empty_fields_are_validation_errors() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo.clone(), Arc::new(support::StubPasswordHasher));

    let err = svc.signup(signup("", "pw")).await.unwrap_err();
    assert!(
        matches!(
            err,
            ApplicationError::Domain(DomainError::Validation(_)) | ApplicationError::Validation(_)
        ),
        "got {err:?}"
    );

    let err = svc.signup(signup("ada@example.com", "")).await.unwrap_err();
    assert!(
        matches!(
            err,
            ApplicationError::Domain(DomainError::Validation(_)) | ApplicationError::Validation(_)
        ),
        "got {err:?}"
    );
    assert!(repo.stored().is_empty());
}

#[tokio::test]
async fn hashing_failure_persists_nothing() {
    let repo = Arc::new(InMemoryUserRepo::default());
    let svc = service(repo.clone(), Arc::new(support::FailingPasswordHasher));

    let err = svc
        .signup(signup("ada@example.com", "s3cret"))
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::PasswordHashing(_)), "got {err:?}");
    assert!(repo.stored().is_empty());
}
