//! # hunt-engine
//!
//! Turn and action resolution for The Hunt, a two-player card duel between
//! a human (`You`) and a CPU opponent.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine owns the rules and the state. Hosts
//!    render snapshots and react to notifications.
//!
//! 2. **Refuse, Don't Repair**: An action that is not legal returns an
//!    `ActionError` and changes nothing.
//!
//! 3. **Deterministic**: Every shuffle and CPU choice draws from one seeded
//!    `GameRng`, so a seed and a list of inputs replay a game exactly.
//!
//! ## Architecture
//!
//! - **Explicit Suspension**: A CPU hunt the human may foil parks itself as
//!   a `PendingInterrupt`. The CPU driver is a state machine with a
//!   `resume` entry point, not a callback.
//!
//! - **Persistent History**: The action log is an `im::Vector`, so
//!   snapshots share it instead of copying it.
//!
//! ## Modules
//!
//! - `core`: Entity IDs, sides, state, action records, RNG, configuration
//! - `cards`: Card definitions, instances, costs, and the registry
//! - `zones`: Each side's board and the zone moves
//! - `rules`: Selection, hints, payment, and win evaluation
//! - `actions`: Hunt, Trade, Resupply and Cull executors
//! - `turn`: Start and end of turn
//! - `cpu`: Personas, planners, the Foil interrupt, and the turn driver
//! - `events`: Notifications to the host
//! - `game`: Setup and the `HuntGame` controller

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod actions;
pub mod turn;
pub mod cpu;
pub mod events;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    EntityId, Side, SideMap,
    GameRng, GameRngState,
    HuntConfig, CullGuardrails, ConfigError,
    ActionKind, ActionEvent, ActionRecord,
    GameState, GameSnapshot,
};

pub use crate::cards::{Card, CardDefinition, CardId, CardKind, CardRegistry, Requirements, SupplyKind};

pub use crate::zones::{Board, ZoneId, ZonePosition};

pub use crate::rules::{ActionHints, HuntOrder, Selection, TargetRef, TradeOrder, Victory, WinReason};

pub use crate::actions::HuntOutcome;

pub use crate::cpu::{CpuDriver, CpuPhase, CpuTurnStatus, InterruptKind, PendingInterrupt, Persona};

pub use crate::events::{Notification, Notifier, Observer};

pub use crate::game::{HuntGame, HuntGameBuilder};

pub use crate::error::{ActionError, ActionResult};
