//! Zone system for card locations.
//!
//! Each side owns a `Board` with the six zones of The Hunt: deck, stock,
//! backlog, burn, hand, and a fixed number of roster stacks.
//!
//! ## Key Types
//!
//! - `Board`: One side's zones, tender, and the movement helpers
//! - `ZoneId`: Names a zone on a board (roster stacks by slot)
//! - `ZonePosition`: Top or bottom of a pile

pub mod board;

pub use board::{Board, ZoneId, ZonePosition};
