// src/infrastructure/repositories/sqlite_registration.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::EventId;
use crate::domain::registration::{
    NewRegistration, Registration, RegistrationId, RegistrationRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteRegistrationRepository {
    pool: SqlitePool,
}

impl SqliteRegistrationRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RegistrationRow {
    id: i64,
    user_id: i64,
    event_id: i64,
}

impl TryFrom<RegistrationRow> for Registration {
    type Error = DomainError;

    fn try_from(row: RegistrationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: RegistrationId::new(row.id)?,
            user_id: UserId::new(row.user_id)?,
            event_id: EventId::new(row.event_id)?,
        })
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRegistrationRepository {
    async fn insert(&self, registration: NewRegistration) -> DomainResult<Registration> {
        let row = sqlx::query_as::<_, RegistrationRow>(
            "INSERT INTO registrations (user_id, event_id) VALUES (?, ?)
             RETURNING id, user_id, event_id",
        )
        .bind(i64::from(registration.user_id))
        .bind(i64::from(registration.event_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Registration::try_from(row)
    }

    async fn delete(&self, event_id: EventId, user_id: UserId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM registrations WHERE event_id = ? AND user_id = ?")
            .bind(i64::from(event_id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn list(&self) -> DomainResult<Vec<Registration>> {
        let rows = sqlx::query_as::<_, RegistrationRow>(
            "SELECT id, user_id, event_id FROM registrations ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Registration::try_from).collect()
    }
}
