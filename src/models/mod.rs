//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod gamer;
pub mod game;
pub mod status;
pub mod event;

// Re-export commonly used models
pub use user::User;
pub use gamer::{CurrentGamer, Gamer};
pub use game::{Game, GameType};
pub use status::Status;
pub use event::{Event, EventDetail, CreateEventRequest, UpdateEventRequest, CreateEventPayload, UpdateEventPayload, EventListQuery};
