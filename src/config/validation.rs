//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use crate::utils::errors::{LevelUpError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_auth_config(&settings.auth)?;
    validate_events_config(&settings.events)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(LevelUpError::Config("Server host is required".to_string()));
    }

    if config.port == 0 {
        return Err(LevelUpError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(LevelUpError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(LevelUpError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(LevelUpError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

fn validate_auth_config(config: &super::AuthConfig) -> Result<()> {
    if config.jwt_secret.is_empty() {
        return Err(LevelUpError::Config(
            "JWT secret is required".to_string()
        ));
    }

    if config.token_ttl_seconds == 0 {
        return Err(LevelUpError::Config(
            "Token TTL must be greater than 0".to_string()
        ));
    }

    Ok(())
}

fn validate_events_config(config: &super::EventsConfig) -> Result<()> {
    if config.open_status_id <= 0 {
        return Err(LevelUpError::Config(
            format!("Invalid open status id: {}", config.open_status_id)
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(LevelUpError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(LevelUpError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.auth.jwt_secret = "secret".to_string();
        settings
    }

    #[test]
    fn test_valid_settings_pass() {
        assert!(validate_settings(&valid_settings()).is_ok());
    }

    #[test]
    fn test_missing_secret_rejected() {
        let settings = Settings::default();
        assert_matches!(validate_settings(&settings), Err(LevelUpError::Config(msg)) if msg.contains("JWT"));
    }

    #[test]
    fn test_pool_bounds_rejected() {
        let mut settings = valid_settings();
        settings.database.min_connections = 20;
        assert_matches!(validate_settings(&settings), Err(LevelUpError::Config(_)));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut settings = valid_settings();
        settings.logging.level = "verbose".to_string();
        assert_matches!(validate_settings(&settings), Err(LevelUpError::Config(msg)) if msg.contains("verbose"));
    }

    #[test]
    fn test_open_status_must_be_positive() {
        let mut settings = valid_settings();
        settings.events.open_status_id = 0;
        assert!(validate_settings(&settings).is_err());
    }
}
