//! Database service layer
//!
//! Aggregates the repositories behind trait objects so handlers can run
//! against Postgres or the in-process store.

use std::sync::Arc;
use crate::config::DatabaseConfig;
use crate::database::connection::{self, DatabasePool};
use crate::database::memory::MemoryStore;
use crate::database::repositories::{
    EventRepository, EventStore, GameRepository, GameStore, GamerRepository, GamerStore,
    StatusRepository, StatusStore,
};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct DatabaseService {
    pub events: Arc<dyn EventStore>,
    pub gamers: Arc<dyn GamerStore>,
    pub games: Arc<dyn GameStore>,
    pub statuses: Arc<dyn StatusStore>,
    pool: Option<DatabasePool>,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            events: Arc::new(EventRepository::new(pool.clone())),
            gamers: Arc::new(GamerRepository::new(pool.clone())),
            games: Arc::new(GameRepository::new(pool.clone())),
            statuses: Arc::new(StatusRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Back every repository with one shared in-process store
    pub fn in_memory(store: Arc<MemoryStore>) -> Self {
        Self {
            events: store.clone(),
            gamers: store.clone(),
            games: store.clone(),
            statuses: store,
            pool: None,
        }
    }

    /// Connect according to configuration, running migrations when enabled
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        if connection::is_memory_url(&config.url) {
            tracing::warn!("Using in-memory store; data is lost on shutdown");
            return Ok(Self::in_memory(Arc::new(MemoryStore::with_demo_data().await)));
        }

        let pool = connection::create_pool(config).await?;
        if config.run_migrations {
            connection::run_migrations(&pool).await?;
        }
        Ok(Self::new(pool))
    }

    /// Check the backing store answers
    pub async fn health_check(&self) -> Result<()> {
        match &self.pool {
            Some(pool) => connection::health_check(pool).await,
            None => self.statuses.list().await.map(|_| ()),
        }
    }
}

impl std::fmt::Debug for DatabaseService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseService")
            .field("postgres", &self.pool.is_some())
            .finish()
    }
}
