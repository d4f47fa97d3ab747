//! Game configuration.
//!
//! Hosts configure the engine at startup with a `HuntConfig`:
//! - Table sizes (hand size, roster slots, initial stock)
//! - Win threshold
//! - CPU behaviour limits (action cap, cull guardrails, optional pinned persona)
//!
//! Defaults match the standard rules of The Hunt.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cpu::Persona;

/// Errors from validating a configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand size must be at least 1")]
    ZeroHandSize,

    #[error("the roster needs at least one slot")]
    ZeroRosterSlots,

    #[error("tender needed to win must be at least 1")]
    ZeroWinThreshold,
}

/// Thresholds below which the CPU refuses to Cull.
///
/// Each field is an inclusive floor: the CPU culls only while it holds
/// strictly more than `min_hand` cards, strictly more than `min_stock` stock
/// cards and so on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CullGuardrails {
    /// Refuse when the hand holds this many cards or fewer.
    pub min_hand: usize,

    /// Refuse when the stock holds this many cards or fewer.
    pub min_stock: usize,

    /// Refuse when fewer than this many cards remain in play
    /// (deck, stock, backlog, hand and roster).
    pub min_cards_in_play: usize,

    /// Refuse when the hand holds this many Hunters or fewer.
    pub min_hunters_in_hand: usize,
}

impl Default for CullGuardrails {
    fn default() -> Self {
        Self {
            min_hand: 3,
            min_stock: 3,
            min_cards_in_play: 10,
            min_hunters_in_hand: 2,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntConfig {
    /// Cards drawn at the start of each turn.
    pub hand_size: usize,

    /// Tender needed to win.
    pub tender_to_win: u32,

    /// Number of roster stacks per side.
    pub roster_slots: usize,

    /// Cards moved from deck to stock during the initial deal.
    pub initial_stock: usize,

    /// Maximum successful CPU actions per turn.
    pub cpu_action_cap: u32,

    /// When the CPU is allowed to Cull.
    pub cull_guard: CullGuardrails,

    /// Pin the CPU persona instead of rolling it at the first CPU turn.
    pub cpu_persona: Option<Persona>,
}

impl Default for HuntConfig {
    fn default() -> Self {
        Self {
            hand_size: 5,
            tender_to_win: 20,
            roster_slots: 5,
            initial_stock: 10,
            cpu_action_cap: 3,
            cull_guard: CullGuardrails::default(),
            cpu_persona: None,
        }
    }
}

impl HuntConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the tender needed to win.
    #[must_use]
    pub fn with_tender_to_win(mut self, tender: u32) -> Self {
        self.tender_to_win = tender;
        self
    }

    /// Set the number of roster slots.
    #[must_use]
    pub fn with_roster_slots(mut self, slots: usize) -> Self {
        self.roster_slots = slots;
        self
    }

    /// Set how many cards the initial deal moves into stock.
    #[must_use]
    pub fn with_initial_stock(mut self, count: usize) -> Self {
        self.initial_stock = count;
        self
    }

    /// Set the CPU action cap.
    #[must_use]
    pub fn with_cpu_action_cap(mut self, cap: u32) -> Self {
        self.cpu_action_cap = cap;
        self
    }

    /// Set the cull guardrails.
    #[must_use]
    pub fn with_cull_guard(mut self, guard: CullGuardrails) -> Self {
        self.cull_guard = guard;
        self
    }

    /// Pin the CPU persona.
    #[must_use]
    pub fn with_cpu_persona(mut self, persona: Persona) -> Self {
        self.cpu_persona = Some(persona);
        self
    }

    /// Check the configuration can drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_size == 0 {
            return Err(ConfigError::ZeroHandSize);
        }
        if self.roster_slots == 0 {
            return Err(ConfigError::ZeroRosterSlots);
        }
        if self.tender_to_win == 0 {
            return Err(ConfigError::ZeroWinThreshold);
        }
        Ok(())
    }
}
