//! Event model

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub time: NaiveTime,
    pub host_id: i64,
    pub game_id: i64,
    pub status_id: i64,
}

/// Event joined with its game, host user and status, plus the per-viewer
/// `joined` flag. Produced by one query; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct EventDetail {
    pub id: i64,
    pub name: String,
    pub time: NaiveTime,
    pub game_id: i64,
    pub game_name: String,
    pub game_player_limit: i32,
    pub game_created_by: i64,
    pub game_type_id: i64,
    pub host_id: i64,
    pub host_first_name: String,
    pub host_last_name: String,
    pub host_email: String,
    pub status_id: i64,
    pub status_title: String,
    pub joined: bool,
}

/// Row values for a new event; every reference is already resolved
#[derive(Debug, Clone)]
pub struct CreateEventRequest {
    pub name: String,
    pub time: NaiveTime,
    pub host_id: i64,
    pub game_id: i64,
    pub status_id: i64,
}

/// Full replacement of an event's mutable columns
#[derive(Debug, Clone)]
pub struct UpdateEventRequest {
    pub name: String,
    pub time: NaiveTime,
    pub host_id: i64,
    pub game_id: i64,
    pub status_id: i64,
}

/// Body of `POST /events`. Any `host` sent by the client is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventPayload {
    pub name: String,
    pub time: String,
    pub game_id: i64,
}

/// Body of `PUT /events/{id}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventPayload {
    pub name: String,
    pub time: String,
    pub game_id: i64,
    pub status_id: i64,
}

/// Query string of `GET /events`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListQuery {
    pub game_id: Option<i64>,
}
