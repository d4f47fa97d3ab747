//! Game state: the authoritative table and its read-only snapshot.
//!
//! ## GameState
//!
//! Everything the rules read and mutate:
//! - Turn owner, turn count, per-turn flags
//! - Both boards (every card lives in exactly one zone)
//! - The human's transient selection
//! - A pending CPU-hunt Foil interrupt, if any
//! - Winner, sticky CPU persona, action history, RNG
//!
//! Only the `HuntGame` controller owns a `GameState`; executors borrow it
//! mutably for the duration of one action.
//!
//! ## GameSnapshot
//!
//! A serialisable copy for hosts to render. History uses `im::Vector`, so
//! copying it is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionEvent, ActionRecord};
use super::config::HuntConfig;
use super::rng::{GameRng, GameRngState};
use super::side::{Side, SideMap};
use crate::cpu::{PendingInterrupt, Persona};
use crate::rules::{Selection, Victory};
use crate::zones::Board;

/// Complete game state.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Configuration the game was created with.
    pub config: HuntConfig,

    /// Whose turn it is.
    pub turn: Side,

    /// Turn number (starts at 1, increments when the CPU hands back).
    pub turn_count: u32,

    /// Has the acting side culled this turn?
    pub cull_used_this_turn: bool,

    /// Both sides' zones.
    pub boards: SideMap<Board>,

    /// The human's current selection.
    pub selection: Selection,

    /// A CPU hunt waiting for the human's Foil decision.
    pub pending_interrupt: Option<PendingInterrupt>,

    /// Set once, when the game ends.
    pub winner: Option<Victory>,

    /// CPU persona, assigned at the first CPU turn and kept for the game.
    pub persona: Option<Persona>,

    /// Every action that changed the table, oldest first.
    pub history: Vector<ActionRecord>,

    /// Action sequence within the current turn.
    action_sequence: u32,

    /// Deterministic RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state around prepared boards. The human moves first.
    #[must_use]
    pub fn new(config: HuntConfig, boards: SideMap<Board>, rng: GameRng) -> Self {
        let persona = config.cpu_persona;
        Self {
            config,
            turn: Side::You,
            turn_count: 1,
            cull_used_this_turn: false,
            boards,
            selection: Selection::default(),
            pending_interrupt: None,
            winner: None,
            persona,
            history: Vector::new(),
            action_sequence: 0,
            rng,
        }
    }

    #[must_use]
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side]
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side]
    }

    /// Has a winner been declared?
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Total cards across both boards, burn included.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.boards.iter().map(|(_, b)| b.card_count()).sum()
    }

    // === Turn bookkeeping ===

    /// Hand the turn to `side`, clearing per-turn state.
    pub fn set_turn(&mut self, side: Side) {
        self.turn = side;
        self.cull_used_this_turn = false;
        self.action_sequence = 0;
        self.selection.clear();
    }

    // === Action History ===

    /// Record an action in history.
    pub fn record(&mut self, side: Side, event: ActionEvent) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.history
            .push_back(ActionRecord::new(side, self.turn_count, sequence, event));
    }

    // === Snapshots ===

    /// Read-only copy for hosts.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            turn: self.turn,
            turn_count: self.turn_count,
            cull_used_this_turn: self.cull_used_this_turn,
            boards: self.boards.clone(),
            selection: self.selection.clone(),
            pending_interrupt: self.pending_interrupt.clone(),
            winner: self.winner,
            persona: self.persona,
            history: self.history.clone(),
            rng: self.rng.state(),
        }
    }
}

/// Serialisable view of a `GameState`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub turn: Side,
    pub turn_count: u32,
    pub cull_used_this_turn: bool,
    pub boards: SideMap<Board>,
    pub selection: Selection,
    pub pending_interrupt: Option<PendingInterrupt>,
    pub winner: Option<Victory>,
    pub persona: Option<Persona>,
    pub history: Vector<ActionRecord>,
    pub rng: GameRngState,
}

impl GameSnapshot {
    /// A side's tender.
    #[must_use]
    pub fn tender(&self, side: Side) -> u32 {
        self.boards[side].tender
    }
}
