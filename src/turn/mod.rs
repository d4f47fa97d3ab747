//! Turn lifecycle: start-of-turn refresh, end-of-turn refill, handoff.

pub mod lifecycle;

pub use lifecycle::{end_human_turn, end_turn, hand_back_to_human, start_turn, TurnStart};
