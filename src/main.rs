//! LevelUp Events API
//!
//! Main application entry point

use anyhow::Context;
use tracing::{error, info};

use levelup_events::{
    config::Settings,
    database::DatabaseService,
    handlers::AppState,
    server,
    services::{AuthService, ServiceFactory},
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("Failed to load configuration")?;
    settings.validate()?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Some("issue-token") = args.first().map(String::as_str) {
        return issue_token(&settings, args.get(1));
    }

    // Initialize logging
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", levelup_events::info());

    // Initialize database connection
    info!("Connecting to database...");
    let database = DatabaseService::connect(&settings.database).await?;

    let services = ServiceFactory::new(&settings, database);
    let state = AppState::new(services);

    if let Err(e) = server::serve(&settings, state, shutdown_signal()).await {
        error!(error = %e, "Server terminated with an error");
        return Err(e.into());
    }

    Ok(())
}

/// `levelup-events issue-token <user_id>`: print a token and exit
fn issue_token(settings: &Settings, user_id: Option<&String>) -> anyhow::Result<()> {
    let user_id: i64 = user_id
        .context("usage: levelup-events issue-token <user_id>")?
        .parse()
        .context("user_id must be an integer")?;

    let token = AuthService::new(&settings.auth).issue_token(user_id)?;
    println!("{}", token);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
