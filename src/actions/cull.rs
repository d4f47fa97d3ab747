//! Cull: burn one card from hand, once per turn.

use tracing::info;

use super::{after_action, ensure_can_act};
use crate::core::{ActionEvent, EntityId, GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::Notifier;
use crate::rules::selection::SELECT_CULL;
use crate::zones::ZoneId;

/// Burn `card` from `side`'s hand and mark the turn's cull as used.
pub fn execute_cull(
    state: &mut GameState,
    side: Side,
    card: EntityId,
    notifier: &mut Notifier,
) -> ActionResult {
    ensure_can_act(state, side)?;
    if state.cull_used_this_turn {
        return Err(ActionError::CullAlreadyUsed);
    }
    if state.board(side).hand_index(card).is_none() {
        return Err(ActionError::invalid(SELECT_CULL));
    }

    state.board_mut(side).move_card(card, ZoneId::Hand, ZoneId::Burn);
    state.cull_used_this_turn = true;

    info!(%side, %card, "cull");
    state.record(side, ActionEvent::Cull { card });
    after_action(state, side, notifier);
    Ok(())
}
