//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the single board context behind a `RwLock` and the user source the
//! reload flow fetches from. The lock is never held across a fetch.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::board::Board;
use crate::users::UserSource;

/// Handle to the one board and its user source. Cloned per request; every
/// clone points at the same board.
#[derive(Clone)]
pub struct AppState {
    pub board: Arc<RwLock<Board>>,
    pub source: Arc<dyn UserSource>,
    pub loading_delay: Duration,
}

impl AppState {
    #[must_use]
    pub fn new(source: Arc<dyn UserSource>, loading_delay: Duration) -> Self {
        Self { board: Arc::new(RwLock::new(Board::new())), source, loading_delay }
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
