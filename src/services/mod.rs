//! Services that drive the board.

pub mod reload;
