//! Page shell.

use axum::extract::State;
use axum::response::Html;

use crate::board::render::escape_html;
use crate::state::AppState;

/// `GET /` — the page with the current board markup and control state.
pub async fn index(State(state): State<AppState>) -> Html<String> {
    let board = state.board.read().await;
    Html(render_shell(board.container(), board.control().enabled, board.control().label))
}

pub(crate) fn render_shell(container: &str, control_enabled: bool, control_label: &str) -> String {
    let disabled = if control_enabled { "" } else { " disabled" };
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>User Board</title>
    <link rel="stylesheet" href="/assets/board.css">
</head>
<body>
    <div class="container">
        <header class="header">
            <h1>👥 User Directory</h1>
            <button id="reloadBtn" class="reload-btn"{disabled}>{label}</button>
        </header>
        <main id="userContainer">{container}</main>
    </div>
    <script src="/assets/board.js"></script>
</body>
</html>
"#,
        label = escape_html(control_label),
    )
}
