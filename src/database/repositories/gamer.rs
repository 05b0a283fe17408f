//! Gamer repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use crate::models::{Gamer, User};
use crate::utils::errors::Result;
use super::GamerStore;

#[derive(Debug, Clone)]
pub struct GamerRepository {
    pool: PgPool,
}

impl GamerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GamerStore for GamerRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Gamer>> {
        let gamer = sqlx::query_as::<_, Gamer>("SELECT id, user_id, bio FROM gamers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(gamer)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Gamer>> {
        let gamer = sqlx::query_as::<_, Gamer>("SELECT id, user_id, bio FROM gamers WHERE user_id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(gamer)
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email FROM users WHERE id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
