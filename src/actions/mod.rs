//! Action executors: Hunt, Trade, Resupply, Cull.
//!
//! Each executor re-validates its order against the state, then either
//! moves cards and returns `Ok`, or returns an `ActionError` having changed
//! nothing. Executors serve both sides; the CPU planners call the same
//! functions the controller calls for the human.
//!
//! ## Shared Preconditions
//!
//! `ensure_can_act` refuses when the game is over, when a Foil interrupt is
//! pending, and when it is not the acting side's turn.

pub mod cull;
pub mod hunt;
pub mod resupply;
pub mod trade;

pub use cull::execute_cull;
pub use hunt::{execute_hunt, resolve_hunt, HuntOutcome};
pub use resupply::execute_resupply;
pub use trade::execute_trade;

use crate::core::{GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::{Notification, Notifier};

/// Can `side` act right now?
pub fn ensure_can_act(state: &GameState, side: Side) -> ActionResult {
    if state.is_over() {
        return Err(ActionError::GameOver);
    }
    if state.pending_interrupt.is_some() {
        return Err(ActionError::InterruptPending);
    }
    if state.turn != side {
        return Err(ActionError::NotYourTurn);
    }
    Ok(())
}

/// Common tail of a successful action: the human's selection indices are
/// stale once cards have moved, so it is cleared.
pub(crate) fn after_action(state: &mut GameState, side: Side, notifier: &mut Notifier) {
    notifier.emit(Notification::StateChanged);
    if side.is_human() && !state.selection.is_empty() {
        state.selection.clear();
        notifier.emit(Notification::SelectionChanged);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Small table builders for executor tests.

    use std::sync::Arc;

    use crate::cards::{Card, CardDefinition, SupplyKind};
    use crate::core::{EntityId, GameRng, GameState, HuntConfig, SideMap};
    use crate::zones::Board;

    pub fn card(id: u32, def: CardDefinition) -> Card {
        Card::new(EntityId(id), Arc::new(def))
    }

    pub fn hunter(id: u32, power: u32) -> Card {
        card(id, CardDefinition::hunter(format!("h{}", id), format!("Hunter {}", id), power))
    }

    pub fn monster(id: u32, power: u32, tender: u32) -> Card {
        card(id, CardDefinition::monster(format!("m{}", id), format!("Monster {}", id), power, tender))
    }

    pub fn supply(id: u32, kind: SupplyKind) -> Card {
        card(id, CardDefinition::supply(format!("s{}", id), format!("Supply {}", id), kind))
    }

    /// Two boards with something in stock so neither side is exhausted.
    pub fn empty_table() -> GameState {
        let mut you = Board::new(5);
        let mut cpu = Board::new(5);
        you.stock.push(supply(900, SupplyKind::Any));
        cpu.stock.push(supply(901, SupplyKind::Any));
        GameState::new(HuntConfig::default(), SideMap::new(you, cpu), GameRng::new(11))
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::empty_table;
    use super::*;
    use crate::cpu::{InterruptKind, PendingInterrupt};
    use crate::rules::{Victory, WinReason};

    #[test]
    fn test_ensure_can_act() {
        let mut state = empty_table();
        assert!(ensure_can_act(&state, Side::You).is_ok());
        assert_eq!(ensure_can_act(&state, Side::Cpu), Err(ActionError::NotYourTurn));

        state.winner = Some(Victory::new(Side::You, WinReason::Tender));
        assert_eq!(ensure_can_act(&state, Side::You), Err(ActionError::GameOver));
    }

    #[test]
    fn test_interrupt_blocks_actions() {
        let mut state = empty_table();
        state.pending_interrupt = Some(PendingInterrupt {
            kind: InterruptKind::CpuHuntFoil,
            attacking_hunters: Vec::new(),
            target_monster: super::test_support::monster(5, 1, 1),
            target_side: Side::You,
            target_slot: 0,
        });
        assert_eq!(
            ensure_can_act(&state, Side::You),
            Err(ActionError::InterruptPending)
        );
    }
}
