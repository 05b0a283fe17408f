//! Repository layer
//!
//! Each store trait is a plain query interface over one table (plus its join
//! rows). Postgres implementations live next to the trait's table; the
//! in-process implementation is `crate::database::memory::MemoryStore`.

pub mod event;
pub mod gamer;
pub mod game;
pub mod status;

use async_trait::async_trait;
use crate::models::{CreateEventRequest, Event, EventDetail, Game, Gamer, Status, UpdateEventRequest, User};
use crate::utils::errors::Result;

pub use event::EventRepository;
pub use gamer::GamerRepository;
pub use game::GameRepository;
pub use status::StatusRepository;

#[async_trait]
pub trait EventStore: Send + Sync {
    /// Insert a new event
    async fn create(&self, request: CreateEventRequest) -> Result<Event>;

    /// Find event by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>>;

    /// Event with game, host user and status, `joined` relative to `viewer_gamer_id`
    async fn find_detail(&self, id: i64, viewer_gamer_id: i64) -> Result<Option<EventDetail>>;

    /// All events ordered by id, optionally restricted to one game
    async fn list_details(&self, viewer_gamer_id: i64, game_id: Option<i64>) -> Result<Vec<EventDetail>>;

    /// Overwrite every mutable column. `EventNotFound` if the row is missing.
    async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event>;

    /// Delete an event and its sign-ups. Returns false if nothing was deleted.
    async fn delete(&self, id: i64) -> Result<bool>;

    /// Add a gamer to the sign-up set; a repeated add is a no-op
    async fn add_signup(&self, event_id: i64, gamer_id: i64) -> Result<()>;

    /// Remove a gamer from the sign-up set; removing an absent gamer is a no-op
    async fn remove_signup(&self, event_id: i64, gamer_id: i64) -> Result<()>;

    /// Gamer ids in the sign-up set, ascending
    async fn signed_up_gamers(&self, event_id: i64) -> Result<Vec<i64>>;
}

#[async_trait]
pub trait GamerStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Gamer>>;

    /// The gamer profile belonging to a user
    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Gamer>>;

    async fn find_user(&self, user_id: i64) -> Result<Option<User>>;
}

#[async_trait]
pub trait GameStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Game>>;
}

#[async_trait]
pub trait StatusStore: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Status>>;

    async fn list(&self) -> Result<Vec<Status>>;
}
