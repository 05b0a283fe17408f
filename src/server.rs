//! HTTP server setup
//!
//! Builds the router for the event endpoints and runs it until shutdown.

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use crate::config::Settings;
use crate::handlers::{events, health, AppState};
use crate::middleware::trace_layer;
use crate::utils::errors::Result;

/// Router with every endpoint and the request tracing layer
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/events", get(events::list).post(events::create))
        .route(
            "/events/{id}",
            get(events::retrieve).put(events::update).delete(events::destroy),
        )
        .route("/events/{id}/signup", post(events::signup).delete(events::leave))
        .route("/health", get(health::health))
        .layer(ServiceBuilder::new().layer(trace_layer()).layer(cors))
        .with_state(state)
}

/// Bind the configured address and serve until `shutdown` resolves
pub async fn serve(
    settings: &Settings,
    state: AppState,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = TcpListener::bind(settings.bind_address()).await?;
    info!(address = %settings.bind_address(), "Events API listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Events API shut down gracefully");
    Ok(())
}
