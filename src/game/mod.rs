//! The game as a host sees it: setup and the controller.

pub mod controller;
pub mod setup;

pub use controller::HuntGame;
pub use setup::{deal_board, HuntGameBuilder};
