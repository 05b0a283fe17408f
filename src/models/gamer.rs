//! Gamer model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Application profile wrapping a user; one gamer per user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Gamer {
    pub id: i64,
    pub user_id: i64,
    pub bio: Option<String>,
}

/// The requesting gamer, resolved once per request from the auth token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentGamer {
    pub gamer: Gamer,
    pub user: crate::models::User,
}
