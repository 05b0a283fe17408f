//! Test database helper utilities
//!
//! Postgres-backed tests run only when `TEST_DATABASE_URL` points at a
//! scratch database; otherwise they are skipped.

use sqlx::PgPool;

/// Test database helper that manages PostgreSQL test database setup
pub struct TestDatabase {
    pub pool: PgPool,
    pub database_url: String,
}

/// Row ids created by `TestDatabase::load_fixtures`
#[derive(Debug, Clone, Copy)]
pub struct PgFixtures {
    pub host_gamer_id: i64,
    pub guest_gamer_id: i64,
    pub game_id: i64,
    pub other_game_id: i64,
}

impl TestDatabase {
    /// Connect and migrate, or `None` when no test database is configured
    pub async fn from_env() -> Option<Self> {
        let database_url = match std::env::var("TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("TEST_DATABASE_URL not set; skipping Postgres test");
                return None;
            }
        };

        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to connect to TEST_DATABASE_URL");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let database = Self { pool, database_url };
        database.cleanup().await.expect("Failed to clean test database");
        Some(database)
    }

    /// Clean all test data from the database, keeping seeded statuses
    pub async fn cleanup(&self) -> Result<(), sqlx::Error> {
        // Delete in reverse order of dependencies
        sqlx::query("DELETE FROM event_signups").execute(&self.pool).await?;
        sqlx::query("DELETE FROM events").execute(&self.pool).await?;
        sqlx::query("DELETE FROM games").execute(&self.pool).await?;
        sqlx::query("DELETE FROM game_types").execute(&self.pool).await?;
        sqlx::query("DELETE FROM gamers").execute(&self.pool).await?;
        sqlx::query("DELETE FROM users").execute(&self.pool).await?;

        Ok(())
    }

    /// Insert two users with gamer profiles and two games
    pub async fn load_fixtures(&self) -> Result<PgFixtures, sqlx::Error> {
        let host_gamer_id = self.insert_gamer("Hannah", "Host").await?;
        let guest_gamer_id = self.insert_gamer("Gus", "Guest").await?;

        let (game_type_id,): (i64,) =
            sqlx::query_as("INSERT INTO game_types (label) VALUES ('Strategy') RETURNING id")
                .fetch_one(&self.pool)
                .await?;

        let game_id = self.insert_game("Chess", 2, host_gamer_id, game_type_id).await?;
        let other_game_id = self.insert_game("Catan", 4, guest_gamer_id, game_type_id).await?;

        Ok(PgFixtures {
            host_gamer_id,
            guest_gamer_id,
            game_id,
            other_game_id,
        })
    }

    async fn insert_gamer(&self, first_name: &str, last_name: &str) -> Result<i64, sqlx::Error> {
        let (user_id,): (i64,) = sqlx::query_as(
            "INSERT INTO users (first_name, last_name, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(format!("{}@levelup.test", first_name.to_lowercase()))
        .fetch_one(&self.pool)
        .await?;

        let (gamer_id,): (i64,) = sqlx::query_as("INSERT INTO gamers (user_id) VALUES ($1) RETURNING id")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(gamer_id)
    }

    async fn insert_game(&self, name: &str, player_limit: i32, created_by: i64, game_type_id: i64) -> Result<i64, sqlx::Error> {
        let (game_id,): (i64,) = sqlx::query_as(
            "INSERT INTO games (name, player_limit, created_by, game_type_id) VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(name)
        .bind(player_limit)
        .bind(created_by)
        .bind(game_type_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(game_id)
    }
}
