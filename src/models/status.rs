//! Event status model
//!
//! Statuses live in a lookup table; id 1 is seeded as "Open for signing up".

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const OPEN_FOR_SIGNING_UP: &str = "Open for signing up";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Status {
    pub id: i64,
    pub title: String,
}
