//! Trade payment.
//!
//! `try_build_payment` picks which of the offered supply cards pay a
//! hunter's cost:
//!
//! 1. For each specific kind (Kit, Script, Treacle) take matching cards,
//!    covering any shortfall with wildcard supply.
//! 2. Pay the `Any` part from whatever is left, wildcards first, then
//!    leftover specific kinds in the same fixed order.
//!
//! A successful payment always holds exactly `requires.total()` cards.
//! Unused supply is not part of it.

use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{Card, Requirements, SupplyKind};
use crate::core::EntityId;

/// The supply cards consumed by a trade.
pub type Payment = SmallVec<[EntityId; 4]>;

/// Build a payment for `requires` out of `supply`, or `None` if it cannot
/// be paid. Cards that are not Supply are ignored.
///
/// ```
/// use std::sync::Arc;
/// use hunt_engine::cards::{Card, CardDefinition, Requirements, SupplyKind};
/// use hunt_engine::core::EntityId;
/// use hunt_engine::rules::try_build_payment;
///
/// let kit = Card::new(EntityId(1), Arc::new(CardDefinition::supply("k", "Kit", SupplyKind::Kit)));
/// let coin = Card::new(EntityId(2), Arc::new(CardDefinition::supply("c", "Coin", SupplyKind::Any)));
///
/// let cost = Requirements::new().with(SupplyKind::Kit, 2);
/// let payment = try_build_payment(&cost, &[&kit, &coin]).unwrap();
/// assert_eq!(payment.len(), 2);
///
/// let cost = Requirements::new().with(SupplyKind::Script, 1).with(SupplyKind::Kit, 1);
/// assert!(try_build_payment(&cost, &[&kit]).is_none());
/// ```
#[must_use]
pub fn try_build_payment(requires: &Requirements, supply: &[&Card]) -> Option<Payment> {
    let mut pools: [Vec<EntityId>; 3] = Default::default();
    let mut wild: Vec<EntityId> = Vec::new();

    for card in supply.iter().filter(|c| c.is_supply()) {
        match card.supply_kind() {
            SupplyKind::Kit => pools[0].push(card.id),
            SupplyKind::Script => pools[1].push(card.id),
            SupplyKind::Treacle => pools[2].push(card.id),
            SupplyKind::Any => wild.push(card.id),
        }
    }
    // Pay from the front of each pool.
    for pool in pools.iter_mut() {
        pool.reverse();
    }
    wild.reverse();

    let mut payment = Payment::new();

    for (pool, kind) in pools.iter_mut().zip(SupplyKind::SPECIFIC) {
        for _ in 0..requires.get(kind) {
            let card = pool.pop().or_else(|| wild.pop())?;
            payment.push(card);
        }
    }

    for _ in 0..requires.get(SupplyKind::Any) {
        let card = wild
            .pop()
            .or_else(|| pools.iter_mut().find_map(Vec::pop))?;
        payment.push(card);
    }

    debug!(cost = %requires, paid = payment.len(), "payment built");
    Some(payment)
}
