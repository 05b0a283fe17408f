//! LevelUp Events API
//!
//! HTTP endpoints for hosting game events: creating, listing, updating and
//! deleting events, and letting gamers sign up for or leave them.

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod middleware;
pub mod serializers;
pub mod server;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{LevelUpError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::AppState;
pub use services::ServiceFactory;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
