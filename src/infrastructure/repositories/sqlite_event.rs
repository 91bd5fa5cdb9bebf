// src/infrastructure/repositories/sqlite_event.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::event::{
    Event, EventDescription, EventDetails, EventId, EventLocation, EventName,
    EventReadRepository, EventUpdate, EventWriteRepository, NewEvent,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const EVENT_COLUMNS: &str = "id, name, description, date_time, location, owner_id";

#[derive(Clone)]
pub struct SqliteEventWriteRepository {
    pool: SqlitePool,
}

impl SqliteEventWriteRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteEventReadRepository {
    pool: SqlitePool,
}

impl SqliteEventReadRepository {
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct EventRow {
    id: i64,
    name: String,
    description: String,
    date_time: DateTime<Utc>,
    location: String,
    owner_id: i64,
}

impl TryFrom<EventRow> for Event {
    type Error = DomainError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: EventId::new(row.id)?,
            details: EventDetails {
                name: EventName::new(row.name)?,
                description: EventDescription::new(row.description)?,
                date_time: row.date_time,
                location: EventLocation::new(row.location)?,
            },
            owner_id: UserId::new(row.owner_id)?,
        })
    }
}

#[async_trait]
impl EventWriteRepository for SqliteEventWriteRepository {
    async fn insert(&self, event: NewEvent) -> DomainResult<Event> {
        let NewEvent { details, owner_id } = event;

        let row = sqlx::query_as::<_, EventRow>(&format!(
            "INSERT INTO events (name, description, date_time, location, owner_id)
             VALUES (?, ?, ?, ?, ?) RETURNING {EVENT_COLUMNS}"
        ))
        .bind(details.name.as_str())
        .bind(details.description.as_str())
        .bind(details.date_time)
        .bind(details.location.as_str())
        .bind(i64::from(owner_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Event::try_from(row)
    }

    async fn update(&self, update: EventUpdate) -> DomainResult<Event> {
        let EventUpdate { id, details } = update;

        let row = sqlx::query_as::<_, EventRow>(&format!(
            "UPDATE events SET name = ?, description = ?, date_time = ?, location = ?
             WHERE id = ? RETURNING {EVENT_COLUMNS}"
        ))
        .bind(details.name.as_str())
        .bind(details.description.as_str())
        .bind(details.date_time)
        .bind(details.location.as_str())
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("event not found".into()))?;

        Event::try_from(row)
    }

    async fn delete(&self, id: EventId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("event not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl EventReadRepository for SqliteEventReadRepository {
    async fn find_by_id(&self, id: EventId) -> DomainResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Event::try_from).transpose()
    }

    async fn list(&self) -> DomainResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventRow>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Event::try_from).collect()
    }
}
