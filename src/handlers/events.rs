//! Event resource handlers
//!
//! Each handler maps service outcomes to the status code and body key its
//! endpoint has always used: `reason` for create validation failures,
//! `message` everywhere else, and a plain-text 500 for retrieve.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;
use crate::models::{CreateEventPayload, CurrentGamer, EventListQuery, UpdateEventPayload};
use crate::services::{SignupAction, SignupError};
use crate::utils::errors::LevelUpError;
use crate::utils::logging::log_handler_error;
use super::AppState;

fn message(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(json!({ "message": text.into() }))).into_response()
}

fn reason(status: StatusCode, text: impl Into<String>) -> Response {
    (status, Json(json!({ "reason": text.into() }))).into_response()
}

/// An id that does not parse is a failed lookup, reported as 500 `{message}`
fn unparseable_id(operation: &str, rejection: PathRejection) -> Response {
    warn!(operation = operation, error = %rejection, "Unparseable event id");
    message(StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text())
}

/// POST /events
pub async fn create(
    State(state): State<AppState>,
    caller: CurrentGamer,
    payload: Result<Json<CreateEventPayload>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return reason(StatusCode::BAD_REQUEST, rejection.body_text()),
    };

    match state.services.event_service.create(&caller, payload).await {
        Ok(event) => (StatusCode::CREATED, Json(event)).into_response(),
        Err(LevelUpError::InvalidInput(msg)) => reason(StatusCode::BAD_REQUEST, msg),
        Err(e) => {
            log_handler_error("create", &e);
            message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// GET /events/{id}
pub async fn retrieve(
    State(state): State<AppState>,
    caller: CurrentGamer,
    event_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(event_id) = match event_id {
        Ok(path) => path,
        Err(rejection) => {
            warn!(operation = "retrieve", error = %rejection, "Unparseable event id");
            return (StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text()).into_response();
        }
    };

    match state.services.event_service.retrieve(&caller, event_id).await {
        Ok(event) => Json(event).into_response(),
        Err(e) => {
            log_handler_error("retrieve", &e);
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// PUT /events/{id}
pub async fn update(
    State(state): State<AppState>,
    caller: CurrentGamer,
    event_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateEventPayload>, JsonRejection>,
) -> Response {
    let Path(event_id) = match event_id {
        Ok(path) => path,
        Err(rejection) => return unparseable_id("update", rejection),
    };
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(event_id = event_id, error = %rejection, "Unreadable update payload");
            return message(StatusCode::INTERNAL_SERVER_ERROR, rejection.body_text());
        }
    };

    match state.services.event_service.update(&caller, event_id, payload).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => {
            log_handler_error("update", &e);
            message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// DELETE /events/{id}
pub async fn destroy(
    State(state): State<AppState>,
    caller: CurrentGamer,
    event_id: Result<Path<i64>, PathRejection>,
) -> Response {
    let Path(event_id) = match event_id {
        Ok(path) => path,
        Err(rejection) => return unparseable_id("destroy", rejection),
    };

    match state.services.event_service.destroy(&caller, event_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) if e.is_not_found() => message(StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => {
            log_handler_error("destroy", &e);
            message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// GET /events?gameId=<id>
pub async fn list(
    State(state): State<AppState>,
    caller: CurrentGamer,
    Query(query): Query<EventListQuery>,
) -> Response {
    match state.services.event_service.list(&caller, query).await {
        Ok(events) => Json(events).into_response(),
        Err(e) => {
            log_handler_error("list", &e);
            message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// POST /events/{id}/signup
pub async fn signup(
    State(state): State<AppState>,
    caller: CurrentGamer,
    event_id: Result<Path<i64>, PathRejection>,
) -> Response {
    match event_id {
        Ok(Path(event_id)) => change_signup(&state, &caller, event_id, SignupAction::Join).await,
        Err(rejection) => unparseable_id("signup", rejection),
    }
}

/// DELETE /events/{id}/signup
pub async fn leave(
    State(state): State<AppState>,
    caller: CurrentGamer,
    event_id: Result<Path<i64>, PathRejection>,
) -> Response {
    match event_id {
        Ok(Path(event_id)) => change_signup(&state, &caller, event_id, SignupAction::Leave).await,
        Err(rejection) => unparseable_id("leave", rejection),
    }
}

async fn change_signup(state: &AppState, caller: &CurrentGamer, event_id: i64, action: SignupAction) -> Response {
    let service = &state.services.event_service;

    match service.change_signup(caller, event_id, action).await {
        Ok(()) => match action {
            SignupAction::Join => StatusCode::CREATED.into_response(),
            SignupAction::Leave => StatusCode::NO_CONTENT.into_response(),
        },
        Err(e @ SignupError::EventMissing) => message(StatusCode::BAD_REQUEST, e.to_string()),
        Err(SignupError::Lookup(e)) => {
            log_handler_error(action.as_str(), &e);
            message(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
        Err(SignupError::Membership(e)) => {
            log_handler_error(action.as_str(), &e);
            // Failures here have historically been reported with 200
            let status = if service.config().strict_signup_errors {
                StatusCode::INTERNAL_SERVER_ERROR
            } else {
                StatusCode::OK
            };
            message(status, e.to_string())
        }
    }
}
