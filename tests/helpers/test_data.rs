//! Test data helpers
//!
//! Seeds a small, predictable world: two gamers, one user without a gamer
//! profile, and two games.

use levelup_events::database::MemoryStore;
use levelup_events::models::{Game, Gamer, User};

#[derive(Debug, Clone)]
pub struct TestGamer {
    pub user: User,
    pub gamer: Gamer,
}

#[derive(Debug, Clone)]
pub struct Fixtures {
    pub host: TestGamer,
    pub guest: TestGamer,
    /// Authenticated user with no gamer profile
    pub profileless_user: User,
    pub chess: Game,
    pub catan: Game,
}

impl Fixtures {
    pub fn host_user_id(&self) -> i64 {
        self.host.user.id
    }

    pub fn guest_user_id(&self) -> i64 {
        self.guest.user.id
    }
}

async fn test_gamer(store: &MemoryStore, first_name: &str, last_name: &str) -> TestGamer {
    let email = format!("{}@levelup.test", first_name.to_lowercase());
    let user = store.insert_user(first_name, last_name, &email).await;
    let gamer = store.insert_gamer(user.id, None).await;
    TestGamer { user, gamer }
}

/// Load the standard fixtures into a store
pub async fn seed_fixtures(store: &MemoryStore) -> Fixtures {
    let host = test_gamer(store, "Hannah", "Host").await;
    let guest = test_gamer(store, "Gus", "Guest").await;
    let profileless_user = store.insert_user("Nora", "Nobody", "nora@levelup.test").await;

    let strategy = store.insert_game_type("Strategy").await;
    let chess = store.insert_game("Chess", 2, host.gamer.id, strategy.id).await;
    let catan = store.insert_game("Catan", 4, guest.gamer.id, strategy.id).await;

    Fixtures {
        host,
        guest,
        profileless_user,
        chess,
        catan,
    }
}
