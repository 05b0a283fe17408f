//! Event repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use std::time::Instant;
use crate::models::event::{Event, EventDetail, CreateEventRequest, UpdateEventRequest};
use crate::utils::errors::{LevelUpError, Result};
use crate::utils::logging::log_database_operation;
use super::EventStore;

const EVENT_COLUMNS: &str = "id, name, time, host_id, game_id, status_id";

const DETAIL_SELECT: &str = r#"
    SELECT e.id, e.name, e.time,
           g.id AS game_id, g.name AS game_name, g.player_limit AS game_player_limit,
           g.created_by AS game_created_by, g.game_type_id,
           e.host_id, u.first_name AS host_first_name, u.last_name AS host_last_name,
           u.email AS host_email,
           s.id AS status_id, s.title AS status_title,
           EXISTS (
               SELECT 1 FROM event_signups es
               WHERE es.event_id = e.id AND es.gamer_id = $1
           ) AS joined
    FROM events e
    INNER JOIN games g ON g.id = e.game_id
    INNER JOIN gamers h ON h.id = e.host_id
    INNER JOIN users u ON u.id = h.user_id
    INNER JOIN statuses s ON s.id = e.status_id
"#;

/// Postgres SQLSTATE classes that mean the row values themselves were rejected
fn map_write_error(err: sqlx::Error) -> LevelUpError {
    if let sqlx::Error::Database(db_err) = &err {
        let code = db_err.code().map(|c| c.into_owned()).unwrap_or_default();
        if code.starts_with("22") || code == "23514" || code == "23502" {
            return LevelUpError::InvalidInput(db_err.message().to_string());
        }
    }
    LevelUpError::Database(err)
}

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for EventRepository {
    async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, Event>(&format!(
            r#"
            INSERT INTO events (name, time, host_id, game_id, status_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(request.name)
        .bind(request.time)
        .bind(request.host_id)
        .bind(request.game_id)
        .bind(request.status_id)
        .fetch_one(&self.pool)
        .await;

        log_database_operation("insert", "events", started.elapsed().as_millis() as u64, result.is_ok());
        result.map_err(map_write_error)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        let event = sqlx::query_as::<_, Event>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    async fn find_detail(&self, id: i64, viewer_gamer_id: i64) -> Result<Option<EventDetail>> {
        let detail = sqlx::query_as::<_, EventDetail>(&format!("{DETAIL_SELECT} WHERE e.id = $2"))
            .bind(viewer_gamer_id)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(detail)
    }

    async fn list_details(&self, viewer_gamer_id: i64, game_id: Option<i64>) -> Result<Vec<EventDetail>> {
        let details = sqlx::query_as::<_, EventDetail>(&format!(
            "{DETAIL_SELECT} WHERE ($2::BIGINT IS NULL OR e.game_id = $2) ORDER BY e.id ASC"
        ))
        .bind(viewer_gamer_id)
        .bind(game_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(details)
    }

    async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, Event>(&format!(
            r#"
            UPDATE events
            SET name = $2,
                time = $3,
                host_id = $4,
                game_id = $5,
                status_id = $6
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(request.name)
        .bind(request.time)
        .bind(request.host_id)
        .bind(request.game_id)
        .bind(request.status_id)
        .fetch_optional(&self.pool)
        .await;

        log_database_operation("update", "events", started.elapsed().as_millis() as u64, result.is_ok());
        result
            .map_err(map_write_error)?
            .ok_or(LevelUpError::EventNotFound { event_id: id })
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn add_signup(&self, event_id: i64, gamer_id: i64) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO event_signups (event_id, gamer_id)
            VALUES ($1, $2)
            ON CONFLICT (event_id, gamer_id) DO NOTHING
            "#
        )
        .bind(event_id)
        .bind(gamer_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn remove_signup(&self, event_id: i64, gamer_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM event_signups WHERE event_id = $1 AND gamer_id = $2")
            .bind(event_id)
            .bind(gamer_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn signed_up_gamers(&self, event_id: i64) -> Result<Vec<i64>> {
        let rows: Vec<(i64,)> = sqlx::query_as(
            "SELECT gamer_id FROM event_signups WHERE event_id = $1 ORDER BY gamer_id ASC"
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }
}
