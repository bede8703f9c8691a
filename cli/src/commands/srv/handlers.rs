//! # ChatRS HTTP Handlers
//!
//! File: cli/src/commands/srv/handlers.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/chatrs
//!
//! Axum handlers for the chat API. The server hosts a single session; every
//! handler works on the shared `TurnController` in `AppState`.
//!
//! | Method | Path                 | Result                                        |
//! |--------|----------------------|-----------------------------------------------|
//! | GET    | `/`                  | Embedded chat page                            |
//! | GET    | `/api/messages`      | `{ messages, composing }`                     |
//! | POST   | `/api/messages`      | `202 { id }` accepted, `200 { id: null }` ignored |
//! | DELETE | `/api/replies/{id}`  | `204` cancelled, `404` nothing pending        |
//! | GET    | `/api/suggestions`   | The three shortcut phrases                    |
//!
use crate::chat::{ChatSnapshot, SubmissionId, TurnController, SUGGESTIONS};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

const INDEX_HTML: &str = include_str!("index.html");

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<TurnController>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubmitResponse {
    /// `None` when the message was blank and nothing happened.
    pub id: Option<SubmissionId>,
}

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn list_messages(State(state): State<AppState>) -> Json<ChatSnapshot> {
    Json(state.controller.snapshot())
}

pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> (StatusCode, Json<SubmitResponse>) {
    match state.controller.submit(&request.text) {
        Some(id) => {
            info!("Accepted message {} over HTTP", id);
            (StatusCode::ACCEPTED, Json(SubmitResponse { id: Some(id) }))
        }
        None => {
            debug!("Ignored blank message over HTTP");
            (StatusCode::OK, Json(SubmitResponse { id: None }))
        }
    }
}

pub async fn cancel_reply(
    State(state): State<AppState>,
    Path(id): Path<SubmissionId>,
) -> StatusCode {
    match state.controller.cancel(id) {
        Ok(()) => StatusCode::NO_CONTENT,
        Err(e) => {
            debug!("Cancel request failed: {}", e);
            StatusCode::NOT_FOUND
        }
    }
}

pub async fn suggestions() -> Json<Vec<&'static str>> {
    Json(SUGGESTIONS.to_vec())
}
