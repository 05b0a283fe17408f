//! Status repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use crate::models::Status;
use crate::utils::errors::Result;
use super::StatusStore;

#[derive(Debug, Clone)]
pub struct StatusRepository {
    pool: PgPool,
}

impl StatusRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatusStore for StatusRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Status>> {
        let status = sqlx::query_as::<_, Status>("SELECT id, title FROM statuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(status)
    }

    async fn list(&self) -> Result<Vec<Status>> {
        let statuses = sqlx::query_as::<_, Status>("SELECT id, title FROM statuses ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(statuses)
    }
}
