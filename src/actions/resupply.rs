//! Resupply: send Supply cards from roster tops to the backlog.

use smallvec::SmallVec;
use tracing::info;

use super::{after_action, ensure_can_act};
use crate::core::{ActionEvent, EntityList, GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::Notifier;
use crate::rules::selection::SELECT_RESUPPLY;

/// Pop the top of every listed slot that holds a Supply into the backlog.
///
/// Slots without a Supply on top are skipped; if none qualifies the action
/// is refused. Returns the cards moved.
pub fn execute_resupply(
    state: &mut GameState,
    side: Side,
    slots: &[usize],
    notifier: &mut Notifier,
) -> ActionResult<EntityList> {
    ensure_can_act(state, side)?;

    let board = state.board(side);
    let mut picks: SmallVec<[usize; 4]> = slots
        .iter()
        .copied()
        .filter(|&slot| board.top_of(slot).is_some_and(|c| c.is_supply()))
        .collect();
    picks.sort_unstable();
    picks.dedup();
    if picks.is_empty() {
        return Err(ActionError::invalid(SELECT_RESUPPLY));
    }

    let board = state.board_mut(side);
    let mut moved = EntityList::new();
    for slot in picks {
        if let Some(card) = board.take_top(slot) {
            moved.push(card.id);
            board.backlog.push(card);
        }
    }

    info!(%side, cards = moved.len(), "resupply");
    state.record(side, ActionEvent::Resupply { supplies: moved.clone() });
    after_action(state, side, notifier);
    Ok(moved)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::cards::SupplyKind;
    use crate::core::EntityId;

    #[test]
    fn test_resupply_skips_non_supply_slots() {
        let mut state = empty_table();
        let you = state.board_mut(Side::You);
        you.roster[0].push(supply(1, SupplyKind::Kit));
        you.roster[1].push(hunter(2, 3));
        you.roster[2] = vec![hunter(3, 1), supply(4, SupplyKind::Treacle)];

        let moved =
            execute_resupply(&mut state, Side::You, &[0, 1, 2, 2], &mut Notifier::new()).unwrap();

        assert_eq!(moved.as_slice(), &[EntityId(1), EntityId(4)]);
        let you = state.board(Side::You);
        assert_eq!(you.backlog.len(), 2);
        assert!(you.roster[0].is_empty());
        assert_eq!(you.top_of(2).map(|c| c.id), Some(EntityId(3)));
        assert_eq!(you.top_of(1).map(|c| c.id), Some(EntityId(2)));
    }

    #[test]
    fn test_resupply_refused_without_supply() {
        let mut state = empty_table();
        state.board_mut(Side::You).roster[0].push(hunter(1, 1));

        assert_eq!(
            execute_resupply(&mut state, Side::You, &[0, 3], &mut Notifier::new()),
            Err(ActionError::invalid(SELECT_RESUPPLY))
        );
    }
}
