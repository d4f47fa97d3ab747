//! Hunt: hunters attack a Monster on top of a roster stack.
//!
//! ## Rules
//!
//! - At least one Hunter; the target's top card must be a Monster.
//! - Exactly one Regimented hunter among the attackers refuses the hunt.
//!   None, or two or more, hunt normally.
//! - Total hunter power below the target's power refuses the hunt with no
//!   state change.
//! - On success the Monster goes to its owner's burn pile, the hunters go
//!   to the hunting side's backlog, and the hunting side gains the Monster's
//!   tender only if the Monster was on its own roster.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::{after_action, ensure_can_act};
use crate::cards::Card;
use crate::core::{ActionEvent, EntityId, EntityList, GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::Notifier;
use crate::rules::{check_winner, HuntOrder, TargetRef};
use crate::zones::ZoneId;

/// What a resolved hunt did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HuntOutcome {
    /// Did the hunters bring the Monster down?
    pub success: bool,
    /// The Monster that was attacked.
    pub target: EntityId,
    /// Tender the hunting side gained.
    pub tender_gained: u32,
}

/// Exactly one Regimented hunter cannot hunt.
pub(crate) fn regimented_alone<'a>(hunters: impl IntoIterator<Item = &'a Card>) -> bool {
    hunters.into_iter().filter(|c| c.is_regimented()).count() == 1
}

/// Execute a hunt for `side`.
pub fn execute_hunt(
    state: &mut GameState,
    side: Side,
    order: &HuntOrder,
    notifier: &mut Notifier,
) -> ActionResult<HuntOutcome> {
    ensure_can_act(state, side)?;

    let board = state.board(side);
    let mut hunters: Vec<&Card> = Vec::with_capacity(order.hunter_count());
    for id in &order.hand {
        match board.hand.iter().find(|c| c.id == *id) {
            Some(card) if card.is_hunter() => hunters.push(card),
            _ => return Err(ActionError::invalid(format!("{} is not a Hunter in hand.", id))),
        }
    }
    for &slot in &order.roster {
        match board.top_of(slot) {
            Some(card) if card.is_hunter() => hunters.push(card),
            _ => {
                return Err(ActionError::invalid(format!(
                    "Roster slot {} has no Hunter on top.",
                    slot
                )))
            }
        }
    }
    let mut seen: SmallVec<[EntityId; 8]> = hunters.iter().map(|c| c.id).collect();
    seen.sort_unstable();
    seen.dedup();
    if hunters.is_empty() || seen.len() != hunters.len() {
        return Err(ActionError::invalid(crate::rules::selection::SELECT_HUNTERS));
    }

    let target = match state.board(order.target.side).top_of(order.target.slot) {
        Some(card) if card.is_monster() => card,
        _ => return Err(ActionError::invalid(crate::rules::selection::SELECT_TARGET)),
    };

    if regimented_alone(hunters.iter().copied()) {
        return Err(ActionError::RegimentedAlone);
    }

    let have: u32 = hunters.iter().map(|c| c.power()).sum();
    if have < target.power() {
        return Err(ActionError::InsufficientPower {
            have,
            need: target.power(),
            target: target.name().to_string(),
        });
    }

    // Validated; now move.
    let board = state.board_mut(side);
    let mut committed = Vec::with_capacity(order.hunter_count());
    for id in &order.hand {
        committed.push(board.take(ZoneId::Hand, *id));
    }
    for &slot in &order.roster {
        if let Some(card) = board.take_top(slot) {
            committed.push(card);
        }
    }

    let outcome = resolve_hunt(state, side, committed, order.target);
    after_action(state, side, notifier);
    check_winner(state, notifier);
    Ok(outcome)
}

/// Resolve a hunt with hunters already taken out of their zones.
///
/// The hunters always end in `side`'s backlog. If their power reaches the
/// target's, the target burns and tender is paid as for any hunt. The
/// action is recorded; notifications are left to the caller.
///
/// Panics if the target slot has no card on top.
pub fn resolve_hunt(
    state: &mut GameState,
    side: Side,
    hunters: Vec<Card>,
    target: TargetRef,
) -> HuntOutcome {
    let have: u32 = hunters.iter().map(Card::power).sum();
    let hunter_ids: EntityList = hunters.iter().map(|c| c.id).collect();

    let owner = state.board_mut(target.side);
    let (target_id, need, tender) = match owner.top_of(target.slot) {
        Some(card) => (card.id, card.power(), card.tender()),
        None => panic!("Hunt target {} slot {} is empty", target.side, target.slot),
    };
    let success = have >= need;

    if success {
        let card = owner.take(ZoneId::Roster(target.slot), target_id);
        debug!(target = %card, owner = %target.side, "monster burned");
        owner.burn.push(card);
    }

    let tender_gained = if success && target.side == side { tender } else { 0 };

    let board = state.board_mut(side);
    board.backlog.extend(hunters);
    board.tender += tender_gained;

    info!(
        %side,
        hunters = hunter_ids.len(),
        power = have,
        need,
        success,
        tender_gained,
        "hunt resolved"
    );
    state.record(
        side,
        ActionEvent::Hunt {
            hunters: hunter_ids,
            target: target_id,
            target_side: target.side,
            success,
            tender: tender_gained,
        },
    );

    HuntOutcome {
        success,
        target: target_id,
        tender_gained,
    }
}
