//! Game and game type models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub player_limit: i32,
    /// Gamer who added the game
    pub created_by: i64,
    pub game_type_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct GameType {
    pub id: i64,
    pub label: String,
}
