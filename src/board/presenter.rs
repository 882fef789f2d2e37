//! Board state machine.
//!
//! DESIGN
//! ======
//! `Board` holds exactly one `BoardState`, the markup currently assigned to
//! the container, the last successfully fetched batch, and the epoch of the
//! newest fetch. The reload control is derived from the state, so a busy
//! control with a populated board cannot be represented.
//!
//! OVERLAP POLICY
//! ==============
//! `enter_loading` issues a new `FetchTicket`. `enter_populated` and
//! `enter_error` only apply when handed the newest ticket; older tickets
//! resolve as `Resolution::Stale` and change nothing. Overlapping reloads
//! therefore end in whichever state the last-started fetch produces.

use serde::Serialize;

use super::render;
use crate::users::UserRecord;

pub const LABEL_IDLE: &str = "🔄 Reload Data";
pub const LABEL_BUSY: &str = "🔄 Loading...";

// =============================================================================
// STATE
// =============================================================================

/// The one visible state of the board.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardState {
    Loading,
    Error(String),
    Populated(Vec<UserRecord>),
}

impl BoardState {
    /// Short name used in the JSON view and in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Error(_) => "error",
            Self::Populated(_) => "populated",
        }
    }
}

/// Enabled flag and label of the reload button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReloadControl {
    pub enabled: bool,
    pub label: &'static str,
}

/// Identifies one fetch. Only the newest ticket may resolve the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct FetchTicket(u64);

impl FetchTicket {
    #[must_use]
    pub fn epoch(self) -> u64 {
        self.0
    }
}

/// Outcome of handing a fetch result to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum Resolution {
    Applied,
    /// A newer fetch started after this one; the result was dropped.
    Stale,
}

/// Serializable snapshot served to the page script.
#[derive(Debug, Clone, Serialize)]
pub struct BoardView {
    pub state: &'static str,
    pub html: String,
    pub control: ReloadControl,
    pub epoch: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

// =============================================================================
// BOARD
// =============================================================================

/// Application context for the board: current state plus last fetched batch.
#[derive(Debug)]
pub struct Board {
    state: BoardState,
    container: String,
    last_batch: Vec<UserRecord>,
    epoch: u64,
}

impl Board {
    /// A board that is loading and has never held a batch.
    #[must_use]
    pub fn new() -> Self {
        Self { state: BoardState::Loading, container: render::render_loading(), last_batch: Vec::new(), epoch: 0 }
    }

    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Markup currently assigned to the container.
    #[must_use]
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Records from the most recent applied `Populated` transition.
    #[must_use]
    pub fn last_batch(&self) -> &[UserRecord] {
        &self.last_batch
    }

    #[must_use]
    pub fn control(&self) -> ReloadControl {
        match self.state {
            BoardState::Loading => ReloadControl { enabled: false, label: LABEL_BUSY },
            BoardState::Error(_) | BoardState::Populated(_) => ReloadControl { enabled: true, label: LABEL_IDLE },
        }
    }

    /// The ticket of the newest fetch.
    #[must_use]
    pub fn current_ticket(&self) -> FetchTicket {
        FetchTicket(self.epoch)
    }

    /// Start a fetch: show the loading notice, disable the control, and issue its ticket.
    pub fn enter_loading(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.state = BoardState::Loading;
        self.container = render::render_loading();
        FetchTicket(self.epoch)
    }

    /// Show `records` and remember them as the last batch.
    pub fn enter_populated(&mut self, ticket: FetchTicket, records: Vec<UserRecord>) -> Resolution {
        if ticket != self.current_ticket() {
            return Resolution::Stale;
        }
        self.container = render::render_users(&records);
        self.last_batch.clone_from(&records);
        self.state = BoardState::Populated(records);
        Resolution::Applied
    }

    /// Show the error panel with `message`. The last batch is kept for export.
    pub fn enter_error(&mut self, ticket: FetchTicket, message: impl Into<String>) -> Resolution {
        if ticket != self.current_ticket() {
            return Resolution::Stale;
        }
        let message = message.into();
        self.container = render::render_error(&message);
        self.state = BoardState::Error(message);
        Resolution::Applied
    }

    #[must_use]
    pub fn view(&self) -> BoardView {
        let count = match &self.state {
            BoardState::Populated(records) => Some(records.len()),
            BoardState::Loading | BoardState::Error(_) => None,
        };
        BoardView {
            state: self.state.kind(),
            html: self.container.clone(),
            control: self.control(),
            epoch: self.epoch,
            count,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "presenter_test.rs"]
mod tests;
