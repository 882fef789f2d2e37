//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell is rendered at `/`, the board JSON API lives under `/api`,
//! and the stylesheet and page script are served from `/assets`.

pub mod board;
pub mod page;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API and page routes without static assets or layers.
fn board_routes(state: AppState, test_routes: bool) -> Router {
    let mut router = Router::new()
        .route("/", get(page::index))
        .route("/api/board", get(board::get_board))
        .route("/api/reload", post(board::reload))
        .route("/api/users/export", get(board::export_users))
        .route("/healthz", get(healthz));

    if test_routes {
        router = router.route("/api/board/test-error", post(board::test_error));
    }

    router.with_state(state)
}

/// Full application router.
pub fn app(state: AppState, assets_dir: &Path, test_routes: bool) -> Router {
    board_routes(state, test_routes)
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
