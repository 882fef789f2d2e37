//! Reload flow: loading → fetch → populated or error.
//!
//! DESIGN
//! ======
//! The board lock is taken twice per reload, once to enter the loading state
//! and obtain a ticket, once to hand back the result. The fetch itself runs
//! unlocked, so a second reload can start while the first is outstanding;
//! the ticket decides which result is shown.

use serde::Deserialize;
use tokio::task::JoinHandle;

use crate::board::{FetchTicket, Resolution, classify::classify};
use crate::state::AppState;

/// What started a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    Startup,
    Button,
    Shortcut,
}

impl Trigger {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Startup => "startup",
            Self::Button => "button",
            Self::Shortcut => "shortcut",
        }
    }
}

/// Run one full reload and report whether its result reached the board.
pub async fn reload(state: &AppState, trigger: Trigger) -> Resolution {
    let ticket = begin_reload(state, trigger).await;
    complete_reload(state, ticket).await
}

/// Enter the loading state synchronously, then finish the reload in the
/// background. The board is already `Loading` when this returns.
pub async fn start_reload(state: AppState, trigger: Trigger) -> (FetchTicket, JoinHandle<Resolution>) {
    let ticket = begin_reload(&state, trigger).await;
    let handle = tokio::spawn(async move { complete_reload(&state, ticket).await });
    (ticket, handle)
}

async fn begin_reload(state: &AppState, trigger: Trigger) -> FetchTicket {
    let ticket = state.board.write().await.enter_loading();
    tracing::info!(trigger = trigger.as_str(), epoch = ticket.epoch(), "fetching users");
    ticket
}

async fn complete_reload(state: &AppState, ticket: FetchTicket) -> Resolution {
    if !state.loading_delay.is_zero() {
        tokio::time::sleep(state.loading_delay).await;
    }

    let result = state.source.fetch_users().await;

    let mut board = state.board.write().await;
    let resolution = match result {
        Ok(users) => {
            let count = users.len();
            let resolution = board.enter_populated(ticket, users);
            if resolution == Resolution::Applied {
                tracing::info!(count, epoch = ticket.epoch(), "fetched users");
            }
            resolution
        }
        Err(e) => {
            let resolution = board.enter_error(ticket, classify(&e));
            if resolution == Resolution::Applied {
                tracing::warn!(error = %e, epoch = ticket.epoch(), "user fetch failed");
            }
            resolution
        }
    };

    if resolution == Resolution::Stale {
        tracing::debug!(
            epoch = ticket.epoch(),
            current = board.current_ticket().epoch(),
            "discarded stale fetch result"
        );
    }
    resolution
}

#[cfg(test)]
#[path = "reload_test.rs"]
mod tests;
