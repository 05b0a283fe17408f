//! Game repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use crate::models::Game;
use crate::utils::errors::Result;
use super::GameStore;

#[derive(Debug, Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for GameRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Game>> {
        let game = sqlx::query_as::<_, Game>(
            "SELECT id, name, player_limit, created_by, game_type_id FROM games WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(game)
    }
}
