//! The human's selection and the orders built from it.
//!
//! A `Selection` is transient UI state: hand indices, own roster slots, and
//! an optional explicit hunt target. The `*_from_selection` functions turn
//! it into concrete orders (`HuntOrder`, `TradeOrder`, ...) that the
//! executors accept. Hints and the controller share these, so a hint and the
//! action it enables always agree on what the selection means.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{EntityId, GameState, Side};
use crate::error::ActionError;
use crate::zones::Board;

pub(crate) const SELECT_HUNTERS: &str = "Select one or more Hunters (hand or roster).";
pub(crate) const SELECT_TARGET: &str =
    "Select a Monster in your roster or click a Monster in the CPU roster.";
pub(crate) const SELECT_ONE_MONSTER: &str = "Select exactly one Monster (your roster or CPU roster).";
pub(crate) const SELECT_TRADE_HUNTER: &str = "Select a Hunter in your roster.";
pub(crate) const SELECT_ONE_TRADE_HUNTER: &str = "Select only one Hunter in your roster to trade.";
pub(crate) const SELECT_TRADE_SUPPLY: &str = "Select one or more Supply cards in your hand.";
pub(crate) const SELECT_RESUPPLY: &str = "Select Supply cards in your roster to resupply.";
pub(crate) const SELECT_CULL: &str = "Select exactly one card in your hand to Cull.";

/// A roster stack on either side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetRef {
    pub side: Side,
    pub slot: usize,
}

impl TargetRef {
    #[must_use]
    pub const fn new(side: Side, slot: usize) -> Self {
        Self { side, slot }
    }
}

/// What the human has currently selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Indices into the human's hand.
    pub hand: BTreeSet<usize>,

    /// The human's own roster slots.
    pub roster: BTreeSet<usize>,

    /// Explicit hunt target (own or CPU roster).
    pub target: Option<TargetRef>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a hand index. Returns whether it is now selected.
    pub fn toggle_hand(&mut self, index: usize) -> bool {
        toggle(&mut self.hand, index)
    }

    /// Toggle a roster slot. Returns whether it is now selected.
    pub fn toggle_roster(&mut self, slot: usize) -> bool {
        toggle(&mut self.roster, slot)
    }

    pub fn set_target(&mut self, target: Option<TargetRef>) {
        self.target = target;
    }

    pub fn clear(&mut self) {
        self.hand.clear();
        self.roster.clear();
        self.target = None;
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hand.is_empty() && self.roster.is_empty() && self.target.is_none()
    }

    /// Selected hand cards that still exist, with their indices.
    pub fn hand_cards<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = (usize, &'a Card)> + 'a {
        self.hand
            .iter()
            .filter_map(move |&i| board.hand.get(i).map(|c| (i, c)))
    }

    /// Top cards of the selected roster slots that are not empty.
    pub fn roster_tops<'a>(&'a self, board: &'a Board) -> impl Iterator<Item = (usize, &'a Card)> + 'a {
        self.roster
            .iter()
            .filter_map(move |&slot| board.top_of(slot).map(|c| (slot, c)))
    }
}

fn toggle(set: &mut BTreeSet<usize>, value: usize) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

// === Orders ===

/// A hunt: hunters from hand (by id) and from roster tops (by slot).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuntOrder {
    pub hand: SmallVec<[EntityId; 4]>,
    pub roster: SmallVec<[usize; 4]>,
    pub target: TargetRef,
}

impl HuntOrder {
    /// An order with no hunters yet.
    #[must_use]
    pub fn new(target: TargetRef) -> Self {
        Self {
            hand: SmallVec::new(),
            roster: SmallVec::new(),
            target,
        }
    }

    #[must_use]
    pub fn with_hand(mut self, id: EntityId) -> Self {
        self.hand.push(id);
        self
    }

    #[must_use]
    pub fn with_roster(mut self, slot: usize) -> Self {
        self.roster.push(slot);
        self
    }

    #[must_use]
    pub fn hunter_count(&self) -> usize {
        self.hand.len() + self.roster.len()
    }
}

/// A trade: the roster slot holding the hunter and the hand supply offered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TradeOrder {
    pub slot: usize,
    pub supplies: SmallVec<[EntityId; 4]>,
}

/// Resolve the hunt target a selection points at.
///
/// An explicit target wins (and must have a Monster on top); otherwise the
/// single Monster among the selected roster tops.
pub fn resolve_hunt_target(
    state: &GameState,
    selection: &Selection,
    side: Side,
) -> Result<TargetRef, ActionError> {
    if let Some(target) = selection.target {
        return match state.board(target.side).top_of(target.slot) {
            Some(card) if card.is_monster() => Ok(target),
            _ => Err(ActionError::invalid(SELECT_TARGET)),
        };
    }

    let mut monsters = selection
        .roster_tops(state.board(side))
        .filter(|(_, card)| card.is_monster())
        .map(|(slot, _)| slot);

    match (monsters.next(), monsters.next()) {
        (Some(slot), None) => Ok(TargetRef::new(side, slot)),
        (Some(_), Some(_)) => Err(ActionError::invalid(SELECT_ONE_MONSTER)),
        (None, _) => Err(ActionError::invalid(SELECT_TARGET)),
    }
}

/// Build a hunt order from the selection.
///
/// Hunters are every selected hand card and roster top that is a Hunter;
/// anything else selected is ignored.
pub fn hunt_order_from_selection(
    state: &GameState,
    selection: &Selection,
    side: Side,
) -> Result<HuntOrder, ActionError> {
    let target = resolve_hunt_target(state, selection, side);
    let ambiguous = ActionError::invalid(SELECT_ONE_MONSTER);
    if target.as_ref().err() == Some(&ambiguous) {
        return Err(ambiguous);
    }

    let board = state.board(side);
    let hand: SmallVec<[EntityId; 4]> = selection
        .hand_cards(board)
        .filter(|(_, c)| c.is_hunter())
        .map(|(_, c)| c.id)
        .collect();
    let roster: SmallVec<[usize; 4]> = selection
        .roster_tops(board)
        .filter(|(_, c)| c.is_hunter())
        .map(|(slot, _)| slot)
        .collect();

    if hand.is_empty() && roster.is_empty() {
        return Err(ActionError::invalid(SELECT_HUNTERS));
    }

    Ok(HuntOrder {
        hand,
        roster,
        target: target?,
    })
}

/// Build a trade order from the selection.
pub fn trade_order_from_selection(
    state: &GameState,
    selection: &Selection,
    side: Side,
) -> Result<TradeOrder, ActionError> {
    let board = state.board(side);

    let mut hunters = selection
        .roster_tops(board)
        .filter(|(_, c)| c.is_hunter())
        .map(|(slot, _)| slot);
    let slot = match (hunters.next(), hunters.next()) {
        (None, _) => return Err(ActionError::invalid(SELECT_TRADE_HUNTER)),
        (Some(_), Some(_)) => return Err(ActionError::invalid(SELECT_ONE_TRADE_HUNTER)),
        (Some(slot), None) => slot,
    };

    let supplies: SmallVec<[EntityId; 4]> = selection
        .hand_cards(board)
        .filter(|(_, c)| c.is_supply())
        .map(|(_, c)| c.id)
        .collect();
    if supplies.is_empty() {
        return Err(ActionError::invalid(SELECT_TRADE_SUPPLY));
    }

    Ok(TradeOrder { slot, supplies })
}

/// Roster slots to resupply from the selection.
pub fn resupply_slots_from_selection(
    state: &GameState,
    selection: &Selection,
    side: Side,
) -> Result<SmallVec<[usize; 4]>, ActionError> {
    let slots: SmallVec<[usize; 4]> = selection
        .roster_tops(state.board(side))
        .filter(|(_, c)| c.is_supply())
        .map(|(slot, _)| slot)
        .collect();
    if slots.is_empty() {
        return Err(ActionError::invalid(SELECT_RESUPPLY));
    }
    Ok(slots)
}

/// The single hand card to cull from the selection.
pub fn cull_card_from_selection(
    state: &GameState,
    selection: &Selection,
    side: Side,
) -> Result<EntityId, ActionError> {
    if state.cull_used_this_turn {
        return Err(ActionError::CullAlreadyUsed);
    }
    let mut cards = selection.hand_cards(state.board(side));
    match (cards.next(), cards.next()) {
        (Some((_, card)), None) => Ok(card.id),
        _ => Err(ActionError::invalid(SELECT_CULL)),
    }
}
