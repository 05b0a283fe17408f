//! Event service implementation
//!
//! One method per resource operation. Every method takes the requesting
//! gamer explicitly; the host of a created or updated event is always that
//! gamer, never a value from the payload.

use thiserror::Error;
use tracing::{debug, info};
use crate::config::EventsConfig;
use crate::database::DatabaseService;
use crate::models::{
    CreateEventPayload, CreateEventRequest, CurrentGamer, Event, EventListQuery, UpdateEventPayload,
    UpdateEventRequest,
};
use crate::serializers::EventResponse;
use crate::utils::errors::{LevelUpError, Result};
use crate::utils::helpers::parse_event_time;
use crate::utils::logging::log_event_action;

/// Direction of a sign-up change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupAction {
    Join,
    Leave,
}

impl SignupAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupAction::Join => "signup",
            SignupAction::Leave => "leave",
        }
    }
}

/// Failure of a sign-up change, split by the stage that failed
#[derive(Error, Debug)]
pub enum SignupError {
    #[error("Event does not exist.")]
    EventMissing,

    /// The event lookup itself failed
    #[error(transparent)]
    Lookup(LevelUpError),

    /// The event exists but the join row could not be changed
    #[error(transparent)]
    Membership(LevelUpError),
}

#[derive(Debug, Clone)]
pub struct EventService {
    database: DatabaseService,
    config: EventsConfig,
}

impl EventService {
    pub fn new(database: DatabaseService, config: EventsConfig) -> Self {
        Self { database, config }
    }

    pub fn config(&self) -> &EventsConfig {
        &self.config
    }

    /// Create an event hosted by the caller, in the open status
    pub async fn create(&self, caller: &CurrentGamer, payload: CreateEventPayload) -> Result<EventResponse> {
        debug!(gamer_id = caller.gamer.id, game_id = payload.game_id, "Creating event");

        let game = self
            .database
            .games
            .find_by_id(payload.game_id)
            .await?
            .ok_or(LevelUpError::GameNotFound { game_id: payload.game_id })?;

        let status_id = self.config.open_status_id;
        let status = self
            .database
            .statuses
            .find_by_id(status_id)
            .await?
            .ok_or(LevelUpError::StatusNotFound { status_id })?;

        let time = parse_event_time(&payload.time)?;

        let event = self
            .database
            .events
            .create(CreateEventRequest {
                name: payload.name,
                time,
                host_id: caller.gamer.id,
                game_id: game.id,
                status_id: status.id,
            })
            .await?;

        log_event_action(event.id, "create", caller.gamer.id, Some(&event.name));
        Ok(EventResponse::from_parts(&event, &game, &caller.user, &status, false))
    }

    /// Single event with `joined` relative to the caller
    pub async fn retrieve(&self, caller: &CurrentGamer, event_id: i64) -> Result<EventResponse> {
        let detail = self
            .database
            .events
            .find_detail(event_id, caller.gamer.id)
            .await?
            .ok_or(LevelUpError::EventNotFound { event_id })?;

        Ok(detail.into())
    }

    /// Replace name, time, game and status; the host becomes the caller.
    /// Any existing status id is accepted.
    pub async fn update(&self, caller: &CurrentGamer, event_id: i64, payload: UpdateEventPayload) -> Result<Event> {
        self.database
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(LevelUpError::EventNotFound { event_id })?;

        let game = self
            .database
            .games
            .find_by_id(payload.game_id)
            .await?
            .ok_or(LevelUpError::GameNotFound { game_id: payload.game_id })?;

        let status = self
            .database
            .statuses
            .find_by_id(payload.status_id)
            .await?
            .ok_or(LevelUpError::StatusNotFound { status_id: payload.status_id })?;

        let time = parse_event_time(&payload.time)?;

        let event = self
            .database
            .events
            .update(
                event_id,
                UpdateEventRequest {
                    name: payload.name,
                    time,
                    host_id: caller.gamer.id,
                    game_id: game.id,
                    status_id: status.id,
                },
            )
            .await?;

        log_event_action(event.id, "update", caller.gamer.id, Some(&status.title));
        Ok(event)
    }

    /// Delete an event. `EventNotFound` if it does not exist.
    pub async fn destroy(&self, caller: &CurrentGamer, event_id: i64) -> Result<()> {
        if !self.database.events.delete(event_id).await? {
            return Err(LevelUpError::EventNotFound { event_id });
        }

        log_event_action(event_id, "delete", caller.gamer.id, None);
        Ok(())
    }

    /// Every event (optionally only those for one game) with `joined` set
    pub async fn list(&self, caller: &CurrentGamer, query: EventListQuery) -> Result<Vec<EventResponse>> {
        let details = self
            .database
            .events
            .list_details(caller.gamer.id, query.game_id)
            .await?;

        debug!(gamer_id = caller.gamer.id, game_id = ?query.game_id, count = details.len(), "Listed events");
        Ok(details.into_iter().map(EventResponse::from).collect())
    }

    /// Add the caller to, or remove them from, an event's sign-up set
    pub async fn change_signup(
        &self,
        caller: &CurrentGamer,
        event_id: i64,
        action: SignupAction,
    ) -> std::result::Result<(), SignupError> {
        let event = self
            .database
            .events
            .find_by_id(event_id)
            .await
            .map_err(SignupError::Lookup)?
            .ok_or(SignupError::EventMissing)?;

        let result = match action {
            SignupAction::Join => self.database.events.add_signup(event.id, caller.gamer.id).await,
            SignupAction::Leave => self.database.events.remove_signup(event.id, caller.gamer.id).await,
        };
        result.map_err(SignupError::Membership)?;

        info!(event_id = event.id, gamer_id = caller.gamer.id, action = action.as_str(), "Sign-up changed");
        Ok(())
    }
}
