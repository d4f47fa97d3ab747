//! Core engine types: entities, sides, state, actions, RNG, configuration.
//!
//! Everything else in the crate builds on these: zones hold cards keyed by
//! `EntityId`, executors mutate a `GameState`, and every random decision
//! draws from its `GameRng`.

pub mod entity;
pub mod side;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use entity::{EntityAllocator, EntityId};
pub use side::{Side, SideMap};
pub use rng::{GameRng, GameRngState};
pub use config::{ConfigError, CullGuardrails, HuntConfig};
pub use action::{ActionEvent, ActionKind, ActionRecord, EntityList};
pub use state::{GameSnapshot, GameState};
