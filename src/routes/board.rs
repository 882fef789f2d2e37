//! Board API routes.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::board::BoardView;
use crate::board::export::export_last_batch;
use crate::services::reload::{Trigger, start_reload};
use crate::state::AppState;

pub const TEST_ERROR_MESSAGE: &str = "Network connection lost. This is a test error.";

#[derive(Debug, Deserialize)]
pub struct ReloadParams {
    pub trigger: Option<Trigger>,
}

/// `GET /api/board` — current state, container markup and control.
pub async fn get_board(State(state): State<AppState>) -> Json<BoardView> {
    Json(state.board.read().await.view())
}

/// `POST /api/reload` — enter the loading state and fetch in the background.
pub async fn reload(State(state): State<AppState>, Query(params): Query<ReloadParams>) -> (StatusCode, Json<BoardView>) {
    let trigger = params.trigger.unwrap_or(Trigger::Button);
    let (_ticket, _handle) = start_reload(state.clone(), trigger).await;
    let view = state.board.read().await.view();
    (StatusCode::ACCEPTED, Json(view))
}

/// `GET /api/users/export` — the last batch as `users_data.json`, or 204 when empty.
pub async fn export_users(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let exported = {
        let board = state.board.read().await;
        export_last_batch(board.last_batch()).map_err(|e| {
            tracing::error!(error = %e, "user export failed");
            StatusCode::INTERNAL_SERVER_ERROR
        })?
    };

    let Some(file) = exported else {
        return Ok(StatusCode::NO_CONTENT.into_response());
    };

    tracing::info!(bytes = file.contents.len(), "exported users");
    Ok((
        [
            (CONTENT_TYPE, "application/json; charset=utf-8".to_owned()),
            (CONTENT_DISPOSITION, format!("attachment; filename=\"{}\"", file.file_name)),
        ],
        file.contents,
    )
        .into_response())
}

/// `POST /api/board/test-error` — show the error panel without fetching.
///
/// Resolves with the current ticket, so a fetch already in flight still
/// replaces the panel when it lands, as any newer board content would.
pub async fn test_error(State(state): State<AppState>) -> Json<BoardView> {
    let mut board = state.board.write().await;
    let previous = board.state().kind();
    let ticket = board.current_ticket();
    let _ = board.enter_error(ticket, TEST_ERROR_MESSAGE);
    tracing::info!(previous, "displayed test error");
    Json(board.view())
}

#[cfg(test)]
#[path = "board_test.rs"]
mod tests;
