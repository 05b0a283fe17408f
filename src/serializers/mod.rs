//! JSON shapes returned by the events endpoints
//!
//! Pure data shaping from records to response bodies; no lookups happen here.

use serde::{Deserialize, Serialize};
use crate::models::{Event, EventDetail, Game, Status, User};
use crate::utils::helpers::format_event_time;

/// Identity fields of the host's user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventUserResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

/// Event host, rendered as its user only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventGamerResponse {
    pub user: EventUserResponse,
}

/// `created_by` and `gametype` are rendered as foreign-key ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResponse {
    pub id: i64,
    pub name: String,
    pub player_limit: i32,
    pub created_by: i64,
    pub gametype: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: i64,
    pub game: GameResponse,
    pub host: EventGamerResponse,
    pub name: String,
    /// `HH:MM:SS`
    pub time: String,
    pub status: StatusResponse,
    pub joined: bool,
}

impl From<&User> for EventUserResponse {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&Game> for GameResponse {
    fn from(game: &Game) -> Self {
        Self {
            id: game.id,
            name: game.name.clone(),
            player_limit: game.player_limit,
            created_by: game.created_by,
            gametype: game.game_type_id,
        }
    }
}

impl From<&Status> for StatusResponse {
    fn from(status: &Status) -> Self {
        Self {
            id: status.id,
            title: status.title.clone(),
        }
    }
}

impl EventResponse {
    /// Assemble from records already loaded by the caller
    pub fn from_parts(event: &Event, game: &Game, host_user: &User, status: &Status, joined: bool) -> Self {
        Self {
            id: event.id,
            game: game.into(),
            host: EventGamerResponse {
                user: host_user.into(),
            },
            name: event.name.clone(),
            time: format_event_time(&event.time),
            status: status.into(),
            joined,
        }
    }
}

impl From<EventDetail> for EventResponse {
    fn from(detail: EventDetail) -> Self {
        Self {
            id: detail.id,
            game: GameResponse {
                id: detail.game_id,
                name: detail.game_name,
                player_limit: detail.game_player_limit,
                created_by: detail.game_created_by,
                gametype: detail.game_type_id,
            },
            host: EventGamerResponse {
                user: EventUserResponse {
                    first_name: detail.host_first_name,
                    last_name: detail.host_last_name,
                    email: detail.host_email,
                },
            },
            name: detail.name,
            time: format_event_time(&detail.time),
            status: StatusResponse {
                id: detail.status_id,
                title: detail.status_title,
            },
            joined: detail.joined,
        }
    }
}
