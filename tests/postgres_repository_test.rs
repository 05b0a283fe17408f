//! Repository tests against a real Postgres database
//!
//! Set `TEST_DATABASE_URL` to a scratch database to run these; every test
//! wipes the tables it touches.

mod helpers;

use assert_matches::assert_matches;
use chrono::NaiveTime;
use helpers::*;
use levelup_events::database::{
    EventRepository, EventStore, GameRepository, GameStore, GamerRepository, GamerStore,
    StatusRepository, StatusStore,
};
use levelup_events::models::{CreateEventRequest, UpdateEventRequest};
use levelup_events::utils::errors::LevelUpError;
use serial_test::serial;

fn seven_pm() -> NaiveTime {
    NaiveTime::from_hms_opt(19, 0, 0).unwrap()
}

fn new_event(fixtures: &PgFixtures, name: &str, game_id: i64) -> CreateEventRequest {
    CreateEventRequest {
        name: name.to_string(),
        time: seven_pm(),
        host_id: fixtures.host_gamer_id,
        game_id,
        status_id: 1,
    }
}

#[tokio::test]
#[serial]
async fn test_seeded_statuses() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let statuses = StatusRepository::new(db.pool.clone());

    let all = statuses.list().await.unwrap();
    let titles: Vec<&str> = all.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Open for signing up", "Full", "Closed"]);

    assert!(statuses.find_by_id(42).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_gamer_and_game_lookups() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let fixtures = db.load_fixtures().await.unwrap();
    let gamers = GamerRepository::new(db.pool.clone());
    let games = GameRepository::new(db.pool.clone());

    let host = gamers.find_by_id(fixtures.host_gamer_id).await.unwrap().unwrap();
    let by_user = gamers.find_by_user_id(host.user_id).await.unwrap().unwrap();
    assert_eq!(by_user.id, host.id);

    let user = gamers.find_user(host.user_id).await.unwrap().unwrap();
    assert_eq!(user.email, "hannah@levelup.test");

    let game = games.find_by_id(fixtures.game_id).await.unwrap().unwrap();
    assert_eq!(game.name, "Chess");
    assert_eq!(game.created_by, fixtures.host_gamer_id);
    assert!(games.find_by_id(-1).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_event_lifecycle() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let fixtures = db.load_fixtures().await.unwrap();
    let events = EventRepository::new(db.pool.clone());

    let event = events.create(new_event(&fixtures, "Chess club", fixtures.game_id)).await.unwrap();
    assert_eq!(event.time, seven_pm());
    assert_eq!(event.status_id, 1);

    let updated = events
        .update(
            event.id,
            UpdateEventRequest {
                name: "Catan night".to_string(),
                time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
                host_id: fixtures.guest_gamer_id,
                game_id: fixtures.other_game_id,
                status_id: 3,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.host_id, fixtures.guest_gamer_id);
    assert_eq!(updated.status_id, 3);

    let detail = events.find_detail(event.id, fixtures.host_gamer_id).await.unwrap().unwrap();
    assert_eq!(detail.game_name, "Catan");
    assert_eq!(detail.host_first_name, "Gus");
    assert_eq!(detail.status_title, "Closed");

    assert!(events.delete(event.id).await.unwrap());
    assert!(!events.delete(event.id).await.unwrap());
    assert!(events.find_by_id(event.id).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
async fn test_update_missing_event() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let fixtures = db.load_fixtures().await.unwrap();
    let events = EventRepository::new(db.pool.clone());

    let result = events
        .update(
            -1,
            UpdateEventRequest {
                name: "Nothing".to_string(),
                time: seven_pm(),
                host_id: fixtures.host_gamer_id,
                game_id: fixtures.game_id,
                status_id: 1,
            },
        )
        .await;

    assert_matches!(result, Err(LevelUpError::EventNotFound { event_id: -1 }));
}

#[tokio::test]
#[serial]
async fn test_signups_and_joined_flag() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let fixtures = db.load_fixtures().await.unwrap();
    let events = EventRepository::new(db.pool.clone());

    let chess = events.create(new_event(&fixtures, "Chess club", fixtures.game_id)).await.unwrap();
    let catan = events.create(new_event(&fixtures, "Catan night", fixtures.other_game_id)).await.unwrap();

    events.add_signup(catan.id, fixtures.guest_gamer_id).await.unwrap();
    events.add_signup(catan.id, fixtures.guest_gamer_id).await.unwrap();
    assert_eq!(events.signed_up_gamers(catan.id).await.unwrap(), vec![fixtures.guest_gamer_id]);

    let listed = events.list_details(fixtures.guest_gamer_id, None).await.unwrap();
    let joined: Vec<(i64, bool)> = listed.iter().map(|d| (d.id, d.joined)).collect();
    assert_eq!(joined, vec![(chess.id, false), (catan.id, true)]);

    let filtered = events
        .list_details(fixtures.host_gamer_id, Some(fixtures.game_id))
        .await
        .unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, chess.id);
    assert!(!filtered[0].joined);

    events.remove_signup(catan.id, fixtures.guest_gamer_id).await.unwrap();
    events.remove_signup(catan.id, fixtures.guest_gamer_id).await.unwrap();
    assert!(events.signed_up_gamers(catan.id).await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_deleting_event_removes_signups() {
    let Some(db) = TestDatabase::from_env().await else { return };
    let fixtures = db.load_fixtures().await.unwrap();
    let events = EventRepository::new(db.pool.clone());

    let event = events.create(new_event(&fixtures, "Chess club", fixtures.game_id)).await.unwrap();
    events.add_signup(event.id, fixtures.guest_gamer_id).await.unwrap();
    events.delete(event.id).await.unwrap();

    let (remaining,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM event_signups WHERE event_id = $1")
        .bind(event.id)
        .fetch_one(&db.pool)
        .await
        .unwrap();
    assert_eq!(remaining, 0);
}
