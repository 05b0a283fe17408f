//! Services module
//!
//! This module contains business logic services

pub mod auth;
pub mod event;

// Re-export commonly used services
pub use auth::{AuthService, Claims};
pub use event::{EventService, SignupAction, SignupError};

use crate::config::settings::Settings;
use crate::database::DatabaseService;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub auth_service: AuthService,
    pub event_service: EventService,
    pub database: DatabaseService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(settings: &Settings, database: DatabaseService) -> Self {
        let auth_service = AuthService::new(&settings.auth);
        let event_service = EventService::new(database.clone(), settings.events.clone());

        Self {
            auth_service,
            event_service,
            database,
        }
    }

    /// Health check for the backing store
    pub async fn health_check(&self) -> ServiceHealthStatus {
        let database_healthy = match self.database.health_check().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                false
            }
        };

        ServiceHealthStatus { database_healthy }
    }
}

/// Health status for all services
#[derive(Debug, Clone)]
pub struct ServiceHealthStatus {
    pub database_healthy: bool,
}

impl ServiceHealthStatus {
    /// Check if all critical services are healthy
    pub fn is_healthy(&self) -> bool {
        self.database_healthy
    }

    /// Get list of unhealthy services
    pub fn get_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.database_healthy {
            issues.push("Database connection failed".to_string());
        }

        issues
    }
}
