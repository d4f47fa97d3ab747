//! Trade: pay supply from hand to take a Hunter off the roster.
//!
//! The paying supply and the Hunter both go to the trading side's backlog,
//! so the Hunter comes back through a later draw. The roster slot stays
//! empty until the end-of-turn refill. Offered supply that the payment
//! does not need stays in hand.

use tracing::info;

use super::{after_action, ensure_can_act};
use crate::cards::Card;
use crate::core::{ActionEvent, GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::Notifier;
use crate::rules::selection::{SELECT_TRADE_HUNTER, SELECT_TRADE_SUPPLY};
use crate::rules::{try_build_payment, Payment, TradeOrder};
use crate::zones::ZoneId;

/// Execute a trade for `side`. Returns the supply that paid for it.
pub fn execute_trade(
    state: &mut GameState,
    side: Side,
    order: &TradeOrder,
    notifier: &mut Notifier,
) -> ActionResult<Payment> {
    ensure_can_act(state, side)?;

    let board = state.board(side);
    let hunter = match board.top_of(order.slot) {
        Some(card) if card.is_hunter() => card,
        _ => return Err(ActionError::invalid(SELECT_TRADE_HUNTER)),
    };

    if order.supplies.is_empty() {
        return Err(ActionError::invalid(SELECT_TRADE_SUPPLY));
    }

    let mut offered: Vec<&Card> = Vec::with_capacity(order.supplies.len());
    for id in &order.supplies {
        match board.hand.iter().find(|c| c.id == *id) {
            Some(card) if card.is_supply() && !offered.iter().any(|o| o.id == *id) => {
                offered.push(card)
            }
            _ => return Err(ActionError::invalid(SELECT_TRADE_SUPPLY)),
        }
    }

    let payment = try_build_payment(hunter.requires(), &offered).ok_or(ActionError::PaymentUnmet)?;
    let hunter_id = hunter.id;
    let hunter_name = hunter.name().to_string();

    let board = state.board_mut(side);
    for id in &payment {
        board.move_card(*id, ZoneId::Hand, ZoneId::Backlog);
    }
    board.move_card(hunter_id, ZoneId::Roster(order.slot), ZoneId::Backlog);

    info!(%side, hunter = %hunter_name, paid = payment.len(), "trade");
    state.record(
        side,
        ActionEvent::Trade {
            hunter: hunter_id,
            payment: payment.clone(),
        },
    );
    after_action(state, side, notifier);
    Ok(payment)
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::cards::{CardDefinition, SupplyKind};
    use crate::core::EntityId;
    use smallvec::smallvec;

    fn table_with_trapper() -> GameState {
        let mut state = empty_table();
        let you = state.board_mut(Side::You);
        you.roster[1].push(card(
            10,
            CardDefinition::hunter("t", "Trapper", 2).with_requirement(SupplyKind::Kit, 1),
        ));
        you.hand = vec![
            supply(1, SupplyKind::Kit),
            supply(2, SupplyKind::Any),
            hunter(3, 1),
        ];
        state
    }

    #[test]
    fn test_trade_moves_payment_and_hunter() {
        let mut state = table_with_trapper();
        let order = TradeOrder {
            slot: 1,
            supplies: smallvec![EntityId(1), EntityId(2)],
        };

        let payment = execute_trade(&mut state, Side::You, &order, &mut Notifier::new()).unwrap();

        assert_eq!(payment.as_slice(), &[EntityId(1)]);
        let you = state.board(Side::You);
        assert!(you.roster[1].is_empty());
        assert_eq!(you.backlog.len(), 2);
        // Unused wildcard stays in hand.
        assert!(you.hand.iter().any(|c| c.id == EntityId(2)));
        assert_eq!(you.hand.len(), 2);
    }

    #[test]
    fn test_trade_payment_unmet() {
        let mut state = table_with_trapper();
        state.board_mut(Side::You).hand.retain(|c| c.id != EntityId(1));
        state.board_mut(Side::You).hand.retain(|c| c.id != EntityId(2));
        state.board_mut(Side::You).hand.push(supply(4, SupplyKind::Script));
        let before = state.snapshot();

        let order = TradeOrder {
            slot: 1,
            supplies: smallvec![EntityId(4)],
        };
        assert_eq!(
            execute_trade(&mut state, Side::You, &order, &mut Notifier::new()),
            Err(ActionError::PaymentUnmet)
        );
        assert_eq!(state.snapshot(), before);
    }

    #[test]
    fn test_trade_rejects_non_supply_and_wrong_slot() {
        let mut state = table_with_trapper();

        let order = TradeOrder {
            slot: 1,
            supplies: smallvec![EntityId(3)],
        };
        assert!(matches!(
            execute_trade(&mut state, Side::You, &order, &mut Notifier::new()),
            Err(ActionError::InvalidSelection(_))
        ));

        let order = TradeOrder {
            slot: 0,
            supplies: smallvec![EntityId(1)],
        };
        assert!(matches!(
            execute_trade(&mut state, Side::You, &order, &mut Notifier::new()),
            Err(ActionError::InvalidSelection(_))
        ));
    }

    #[test]
    fn test_trade_needs_some_supply() {
        let mut state = empty_table();
        state.board_mut(Side::You).roster[0].push(hunter(10, 1));
        let before = state.snapshot();

        let order = TradeOrder {
            slot: 0,
            supplies: smallvec![],
        };
        assert_eq!(
            execute_trade(&mut state, Side::You, &order, &mut Notifier::new()),
            Err(ActionError::invalid(SELECT_TRADE_SUPPLY))
        );
        assert_eq!(state.snapshot(), before);
    }
}
