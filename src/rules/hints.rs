//! Action hints: which of the four actions the human's selection enables.
//!
//! Pure reads of the state. Every disabled action carries a reason a host
//! can show next to the button. The executors re-check everything
//! themselves; hints are advice, not permission.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::payment::try_build_payment;
use super::selection::{
    cull_card_from_selection, hunt_order_from_selection, resupply_slots_from_selection,
    trade_order_from_selection, Selection,
};
use crate::actions::hunt::regimented_alone;
use crate::cards::Card;
use crate::core::{ActionKind, GameState, Side};
use crate::error::ActionError;

/// Which actions are enabled, and why the others are not.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionHints {
    pub hunt: bool,
    pub trade: bool,
    pub resupply: bool,
    pub cull: bool,
    /// Reasons for disabled actions.
    pub reasons: FxHashMap<ActionKind, String>,
}

impl ActionHints {
    /// Is this action enabled?
    #[must_use]
    pub fn allowed(&self, kind: ActionKind) -> bool {
        match kind {
            ActionKind::Hunt => self.hunt,
            ActionKind::Trade => self.trade,
            ActionKind::Resupply => self.resupply,
            ActionKind::Cull => self.cull,
            ActionKind::Foil | ActionKind::EndTurn => false,
        }
    }

    /// Why an action is disabled, if it is.
    #[must_use]
    pub fn reason(&self, kind: ActionKind) -> Option<&str> {
        self.reasons.get(&kind).map(String::as_str)
    }

    fn all_disabled(reason: &str) -> Self {
        Self {
            reasons: ActionKind::PLAYER_ACTIONS
                .into_iter()
                .map(|kind| (kind, reason.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    fn set(&mut self, kind: ActionKind, outcome: Result<(), ActionError>) {
        let enabled = match outcome {
            Ok(()) => true,
            Err(err) => {
                self.reasons.insert(kind, err.to_string());
                false
            }
        };
        match kind {
            ActionKind::Hunt => self.hunt = enabled,
            ActionKind::Trade => self.trade = enabled,
            ActionKind::Resupply => self.resupply = enabled,
            ActionKind::Cull => self.cull = enabled,
            ActionKind::Foil | ActionKind::EndTurn => {}
        }
    }
}

/// Compute hints for the human's `selection`.
#[must_use]
pub fn compute_action_hints(state: &GameState, selection: &Selection) -> ActionHints {
    if state.is_over() {
        return ActionHints::all_disabled(&ActionError::GameOver.to_string());
    }
    if state.turn != Side::You {
        return ActionHints::all_disabled(&ActionError::NotYourTurn.to_string());
    }

    let side = Side::You;
    let mut hints = ActionHints::default();
    hints.set(ActionKind::Hunt, hunt_hint(state, selection, side));
    hints.set(ActionKind::Trade, trade_hint(state, selection, side));
    hints.set(
        ActionKind::Resupply,
        resupply_slots_from_selection(state, selection, side).map(|_| ()),
    );
    hints.set(
        ActionKind::Cull,
        cull_card_from_selection(state, selection, side).map(|_| ()),
    );
    hints
}

fn hunt_hint(state: &GameState, selection: &Selection, side: Side) -> Result<(), ActionError> {
    let order = hunt_order_from_selection(state, selection, side)?;
    let board = state.board(side);

    let hunters: Vec<&Card> = order
        .hand
        .iter()
        .filter_map(|id| board.hand.iter().find(|c| c.id == *id))
        .chain(order.roster.iter().filter_map(|&slot| board.top_of(slot)))
        .collect();
    if regimented_alone(hunters.iter().copied()) {
        return Err(ActionError::RegimentedAlone);
    }
    let have: u32 = hunters.iter().map(|c| c.power()).sum();

    // Resolution guarantees a Monster on top of the target slot.
    let Some(target) = state.board(order.target.side).top_of(order.target.slot) else {
        return Err(ActionError::invalid(super::selection::SELECT_TARGET));
    };
    if have < target.power() {
        return Err(ActionError::InsufficientPower {
            have,
            need: target.power(),
            target: target.name().to_string(),
        });
    }
    Ok(())
}

fn trade_hint(state: &GameState, selection: &Selection, side: Side) -> Result<(), ActionError> {
    let order = trade_order_from_selection(state, selection, side)?;
    let board = state.board(side);
    let Some(hunter) = board.top_of(order.slot) else {
        return Err(ActionError::invalid(super::selection::SELECT_TRADE_HUNTER));
    };
    let supply: Vec<_> = board
        .hand
        .iter()
        .filter(|c| order.supplies.contains(&c.id))
        .collect();
    try_build_payment(hunter.requires(), &supply)
        .map(|_| ())
        .ok_or(ActionError::PaymentUnmet)
}
