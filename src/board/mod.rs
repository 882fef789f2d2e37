//! Board presentation: state machine, markup, error messages, export.
//!
//! DESIGN
//! ======
//! `presenter::Board` is the single owner of the visible state and the last
//! fetched batch. It is mutated only through the three `enter_*` transitions,
//! and the two that resolve a fetch require the ticket issued when that fetch
//! began, so a slow stale response can never overwrite a newer one.
//! `render`, `classify` and `export` are pure helpers the presenter and the
//! routes call.

pub mod classify;
pub mod export;
pub mod presenter;
pub mod render;

pub use presenter::{Board, BoardView, FetchTicket, Resolution};
