//! HTTP handlers module
//!
//! This module contains the request handlers and the shared state they read.

pub mod events;
pub mod health;

use crate::services::ServiceFactory;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub services: ServiceFactory,
}

impl AppState {
    pub fn new(services: ServiceFactory) -> Self {
        Self { services }
    }
}
