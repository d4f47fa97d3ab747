//! Win evaluation.
//!
//! Checked after every hunt and at both turn boundaries:
//!
//! 1. Tender: a side at or above `tender_to_win` wins. If both are, the side
//!    whose turn it is wins.
//! 2. Endurance: a side that is exhausted (deck, stock, backlog and hand all
//!    empty) loses to an opponent that is not.
//!
//! A stranded side (nothing in hand, stock or backlog at the start of its
//! turn) loses immediately; the lifecycle declares that one directly.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::{GameState, Side};
use crate::events::{Notification, Notifier};

/// How the game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WinReason {
    /// Reached the tender threshold.
    Tender,
    /// The opponent ran out of cards.
    Endurance,
    /// The opponent started a turn with nothing to draw or play.
    Stranded,
}

/// The winning side and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Victory {
    pub side: Side,
    pub reason: WinReason,
}

impl Victory {
    #[must_use]
    pub const fn new(side: Side, reason: WinReason) -> Self {
        Self { side, reason }
    }

    /// Did the human win?
    #[must_use]
    pub const fn is_human(&self) -> bool {
        self.side.is_human()
    }
}

impl std::fmt::Display for Victory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self.reason {
            WinReason::Tender => "tender",
            WinReason::Endurance => "endurance",
            WinReason::Stranded => "stranding",
        };
        write!(f, "{} win by {}", self.side, reason)
    }
}

/// Who has won, without touching the state.
#[must_use]
pub fn evaluate_winner(state: &GameState) -> Option<Victory> {
    let threshold = state.config.tender_to_win;
    let reached = |side: Side| state.board(side).tender >= threshold;

    match (reached(Side::You), reached(Side::Cpu)) {
        (true, true) => return Some(Victory::new(state.turn, WinReason::Tender)),
        (true, false) => return Some(Victory::new(Side::You, WinReason::Tender)),
        (false, true) => return Some(Victory::new(Side::Cpu, WinReason::Tender)),
        (false, false) => {}
    }

    let exhausted = |side: Side| state.board(side).is_exhausted();
    match (exhausted(Side::You), exhausted(Side::Cpu)) {
        (true, false) => Some(Victory::new(Side::Cpu, WinReason::Endurance)),
        (false, true) => Some(Victory::new(Side::You, WinReason::Endurance)),
        _ => None,
    }
}

/// Record a winner and emit *game over*. Does nothing if one is already set.
pub fn declare_winner(state: &mut GameState, victory: Victory, notifier: &mut Notifier) {
    if state.winner.is_some() {
        return;
    }
    info!(winner = %victory.side, reason = ?victory.reason, turn = state.turn_count, "game over");
    state.winner = Some(victory);
    state.pending_interrupt = None;
    notifier.emit(Notification::GameOver { victory });
}

/// Evaluate and, if someone has won, declare it. Returns the winner.
pub fn check_winner(state: &mut GameState, notifier: &mut Notifier) -> Option<Victory> {
    if let Some(victory) = state.winner {
        return Some(victory);
    }
    let victory = evaluate_winner(state)?;
    declare_winner(state, victory, notifier);
    Some(victory)
}
