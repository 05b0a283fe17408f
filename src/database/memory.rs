//! In-process store
//!
//! Implements every store trait over in-memory tables. Used by the test suite
//! and by `database.url = "memory://"` for local runs without Postgres.

use std::collections::{BTreeMap, BTreeSet};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use crate::database::repositories::{EventStore, GameStore, GamerStore, StatusStore};
use crate::models::status::OPEN_FOR_SIGNING_UP;
use crate::models::{CreateEventRequest, Event, EventDetail, Game, GameType, Gamer, Status, UpdateEventRequest, User};
use crate::utils::errors::{LevelUpError, Result};

/// Width of `events.name` (`VARCHAR(55)`)
const EVENT_NAME_MAX_CHARS: usize = 55;

/// Reject names the Postgres column would refuse
fn check_event_name(name: &str) -> Result<()> {
    if name.chars().count() > EVENT_NAME_MAX_CHARS {
        return Err(LevelUpError::InvalidInput(format!(
            "value too long for type character varying({})",
            EVENT_NAME_MAX_CHARS
        )));
    }
    Ok(())
}

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<i64, User>,
    gamers: BTreeMap<i64, Gamer>,
    game_types: BTreeMap<i64, GameType>,
    games: BTreeMap<i64, Game>,
    statuses: BTreeMap<i64, Status>,
    events: BTreeMap<i64, Event>,
    /// (event_id, gamer_id)
    signups: BTreeSet<(i64, i64)>,
    next_id: i64,
}

impl Tables {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Inner-join semantics: an event whose references are missing is skipped
    fn detail(&self, event: &Event, viewer_gamer_id: i64) -> Option<EventDetail> {
        let game = self.games.get(&event.game_id)?;
        let host = self.gamers.get(&event.host_id)?;
        let user = self.users.get(&host.user_id)?;
        let status = self.statuses.get(&event.status_id)?;

        Some(EventDetail {
            id: event.id,
            name: event.name.clone(),
            time: event.time,
            game_id: game.id,
            game_name: game.name.clone(),
            game_player_limit: game.player_limit,
            game_created_by: game.created_by,
            game_type_id: game.game_type_id,
            host_id: host.id,
            host_first_name: user.first_name.clone(),
            host_last_name: user.last_name.clone(),
            host_email: user.email.clone(),
            status_id: status.id,
            status_title: status.title.clone(),
            joined: self.signups.contains(&(event.id, viewer_gamer_id)),
        })
    }
}

#[derive(Debug)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store with the standard statuses seeded
    pub fn new() -> Self {
        let mut tables = Tables::default();
        for (id, title) in [(1, OPEN_FOR_SIGNING_UP), (2, "Full"), (3, "Closed")] {
            tables.statuses.insert(id, Status { id, title: title.to_string() });
        }
        tables.next_id = 100;

        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Seed one user with a gamer profile, a game type and a game
    pub async fn with_demo_data() -> Self {
        let store = Self::new();
        let user = store.insert_user("Demo", "Gamer", "demo@levelup.test").await;
        let gamer = store.insert_gamer(user.id, Some("Local demo account")).await;
        let game_type = store.insert_game_type("Board game").await;
        store.insert_game("Catan", 4, gamer.id, game_type.id).await;
        debug!(user_id = user.id, gamer_id = gamer.id, "Seeded in-memory demo data");
        store
    }

    pub async fn insert_user(&self, first_name: &str, last_name: &str, email: &str) -> User {
        let mut tables = self.tables.write().await;
        let user = User {
            id: tables.allocate_id(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        };
        tables.users.insert(user.id, user.clone());
        user
    }

    pub async fn insert_gamer(&self, user_id: i64, bio: Option<&str>) -> Gamer {
        let mut tables = self.tables.write().await;
        let gamer = Gamer {
            id: tables.allocate_id(),
            user_id,
            bio: bio.map(str::to_string),
        };
        tables.gamers.insert(gamer.id, gamer.clone());
        gamer
    }

    pub async fn insert_game_type(&self, label: &str) -> GameType {
        let mut tables = self.tables.write().await;
        let game_type = GameType {
            id: tables.allocate_id(),
            label: label.to_string(),
        };
        tables.game_types.insert(game_type.id, game_type.clone());
        game_type
    }

    pub async fn insert_game(&self, name: &str, player_limit: i32, created_by: i64, game_type_id: i64) -> Game {
        let mut tables = self.tables.write().await;
        let game = Game {
            id: tables.allocate_id(),
            name: name.to_string(),
            player_limit,
            created_by,
            game_type_id,
        };
        tables.games.insert(game.id, game.clone());
        game
    }

    pub async fn remove_status(&self, id: i64) {
        self.tables.write().await.statuses.remove(&id);
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn create(&self, request: CreateEventRequest) -> Result<Event> {
        check_event_name(&request.name)?;
        let mut tables = self.tables.write().await;
        let event = Event {
            id: tables.allocate_id(),
            name: request.name,
            time: request.time,
            host_id: request.host_id,
            game_id: request.game_id,
            status_id: request.status_id,
        };
        tables.events.insert(event.id, event.clone());
        Ok(event)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>> {
        Ok(self.tables.read().await.events.get(&id).cloned())
    }

    async fn find_detail(&self, id: i64, viewer_gamer_id: i64) -> Result<Option<EventDetail>> {
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .get(&id)
            .and_then(|event| tables.detail(event, viewer_gamer_id)))
    }

    async fn list_details(&self, viewer_gamer_id: i64, game_id: Option<i64>) -> Result<Vec<EventDetail>> {
        let tables = self.tables.read().await;
        Ok(tables
            .events
            .values()
            .filter(|event| game_id.map_or(true, |id| event.game_id == id))
            .filter_map(|event| tables.detail(event, viewer_gamer_id))
            .collect())
    }

    async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event> {
        check_event_name(&request.name)?;
        let mut tables = self.tables.write().await;
        let event = tables
            .events
            .get_mut(&id)
            .ok_or(LevelUpError::EventNotFound { event_id: id })?;

        event.name = request.name;
        event.time = request.time;
        event.host_id = request.host_id;
        event.game_id = request.game_id;
        event.status_id = request.status_id;
        Ok(event.clone())
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let removed = tables.events.remove(&id).is_some();
        if removed {
            tables.signups.retain(|(event_id, _)| *event_id != id);
        }
        Ok(removed)
    }

    async fn add_signup(&self, event_id: i64, gamer_id: i64) -> Result<()> {
        self.tables.write().await.signups.insert((event_id, gamer_id));
        Ok(())
    }

    async fn remove_signup(&self, event_id: i64, gamer_id: i64) -> Result<()> {
        self.tables.write().await.signups.remove(&(event_id, gamer_id));
        Ok(())
    }

    async fn signed_up_gamers(&self, event_id: i64) -> Result<Vec<i64>> {
        let tables = self.tables.read().await;
        Ok(tables
            .signups
            .range((event_id, i64::MIN)..=(event_id, i64::MAX))
            .map(|(_, gamer_id)| *gamer_id)
            .collect())
    }
}

#[async_trait]
impl GamerStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Gamer>> {
        Ok(self.tables.read().await.gamers.get(&id).cloned())
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Option<Gamer>> {
        let tables = self.tables.read().await;
        Ok(tables.gamers.values().find(|g| g.user_id == user_id).cloned())
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<User>> {
        Ok(self.tables.read().await.users.get(&user_id).cloned())
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Game>> {
        Ok(self.tables.read().await.games.get(&id).cloned())
    }
}

#[async_trait]
impl StatusStore for MemoryStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Status>> {
        Ok(self.tables.read().await.statuses.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Status>> {
        Ok(self.tables.read().await.statuses.values().cloned().collect())
    }
}
