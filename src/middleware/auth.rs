//! Authentication middleware
//!
//! Resolves the request identity once, at the boundary: the `Authorization`
//! header is verified into a user id, and that user's gamer profile is loaded
//! and handed to the handler as a `CurrentGamer`.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{debug, error, warn};
use crate::handlers::AppState;
use crate::models::CurrentGamer;
use crate::services::auth::parse_authorization;
use crate::utils::errors::LevelUpError;

/// Why a request could not be tied to a gamer
#[derive(Debug)]
pub enum AuthRejection {
    MissingCredentials,
    InvalidToken,
    NoGamerProfile { user_id: i64 },
    Lookup(LevelUpError),
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AuthRejection::MissingCredentials => (
                StatusCode::UNAUTHORIZED,
                "Authentication credentials were not provided.".to_string(),
            ),
            AuthRejection::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token.".to_string()),
            AuthRejection::NoGamerProfile { user_id } => {
                warn!(user_id = user_id, "Authenticated user has no gamer profile");
                (StatusCode::FORBIDDEN, "No gamer profile for this user.".to_string())
            }
            AuthRejection::Lookup(e) => {
                error!(error = %e, "Failed to resolve request identity");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

impl FromRequestParts<AppState> for CurrentGamer {
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_authorization)
            .ok_or(AuthRejection::MissingCredentials)?;

        let user_id = state
            .services
            .auth_service
            .verify_token(token)
            .map_err(|_| AuthRejection::InvalidToken)?;

        let database = &state.services.database;
        let gamer = database
            .gamers
            .find_by_user_id(user_id)
            .await
            .map_err(AuthRejection::Lookup)?
            .ok_or(AuthRejection::NoGamerProfile { user_id })?;
        let user = database
            .gamers
            .find_user(user_id)
            .await
            .map_err(AuthRejection::Lookup)?
            .ok_or(AuthRejection::NoGamerProfile { user_id })?;

        debug!(user_id = user_id, gamer_id = gamer.id, "Request identity resolved");
        Ok(CurrentGamer { gamer, user })
    }
}
