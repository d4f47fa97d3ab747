//! The Foil interrupt: the human's answer to a CPU hunt.
//!
//! When the CPU commits to a hunt while the human holds a Hunter, the hunt
//! is parked as a `PendingInterrupt` and the CPU turn suspends. The human
//! then either passes, or nominates a Hunter to foil with.
//!
//! ## Foil resolution
//!
//! The committed hunters are the nominated card plus every Hunter the human
//! has selected (hand or roster top). Their total power is the budget.
//! Attackers are taken in descending power order; each one whose power
//! still fits in what is left of the budget is foiled and burned. Zero-power
//! attackers are never foiled. The committed human hunters burn whatever
//! happens. Surviving attackers then hunt as usual and go to the CPU
//! backlog whether or not they bring the Monster down.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{info, warn};

use crate::actions::{resolve_hunt, HuntOutcome};
use crate::cards::Card;
use crate::core::{ActionEvent, EntityId, EntityList, GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::{Notification, Notifier};
use crate::rules::{check_winner, Selection, TargetRef};
use crate::zones::ZoneId;

/// What kind of decision the engine is waiting for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterruptKind {
    /// A CPU hunt the human may foil.
    CpuHuntFoil,
}

/// A suspended CPU hunt.
///
/// The cards here are copies for display. The attackers stay in the CPU
/// hand and the Monster stays on its roster until the interrupt resolves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingInterrupt {
    pub kind: InterruptKind,
    pub attacking_hunters: Vec<Card>,
    pub target_monster: Card,
    pub target_side: Side,
    pub target_slot: usize,
}

impl PendingInterrupt {
    /// Total power of the attackers.
    #[must_use]
    pub fn attack_power(&self) -> u32 {
        self.attacking_hunters.iter().map(Card::power).sum()
    }

    #[must_use]
    pub fn target(&self) -> TargetRef {
        TargetRef::new(self.target_side, self.target_slot)
    }
}

/// Which attackers a foil budget stops.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoilResult {
    pub foiled: EntityList,
    pub survivors: EntityList,
    pub removed_power: u32,
}

/// Apply a foil budget to a group of attackers.
#[must_use]
pub fn compute_foil(attackers: &[Card], budget: u32) -> FoilResult {
    let mut order: Vec<&Card> = attackers.iter().collect();
    order.sort_by(|a, b| b.power().cmp(&a.power()));

    let mut remaining = budget;
    let mut result = FoilResult::default();
    for card in order {
        let power = card.power();
        if power == 0 {
            continue;
        }
        if remaining == 0 {
            break;
        }
        if power <= remaining {
            remaining -= power;
            result.foiled.push(card.id);
            result.removed_power += power;
        }
    }

    result.survivors = attackers
        .iter()
        .map(|c| c.id)
        .filter(|id| !result.foiled.contains(id))
        .collect();
    result
}

/// What answering the interrupt did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FoilResolution {
    /// `None` when the human passed.
    pub foil: Option<FoilResult>,
    /// The human hunters burned for the foil.
    pub committed: EntityList,
    /// The hunt by the surviving attackers.
    pub hunt: HuntOutcome,
}

/// Where a committed human hunter sits.
fn locate_foil_hunter(state: &GameState, id: EntityId) -> Option<ZoneId> {
    let you = state.board(Side::You);
    if you.hand.iter().any(|c| c.id == id && c.is_hunter()) {
        return Some(ZoneId::Hand);
    }
    you.roster_slot_of_top(id)
        .filter(|&slot| you.top_of(slot).is_some_and(Card::is_hunter))
        .map(ZoneId::Roster)
}

/// The nominated card plus every selected human Hunter, without repeats.
fn committed_hunters(
    state: &GameState,
    selection: &Selection,
    nominated: EntityId,
) -> SmallVec<[(EntityId, ZoneId); 4]> {
    let you = state.board(Side::You);
    let mut committed: SmallVec<[(EntityId, ZoneId); 4]> = SmallVec::new();
    let mut add = |id: EntityId, zone: ZoneId| {
        if !committed.iter().any(|(c, _)| *c == id) {
            committed.push((id, zone));
        }
    };

    if let Some(zone) = locate_foil_hunter(state, nominated) {
        add(nominated, zone);
    }
    for (_, card) in selection.hand_cards(you).filter(|(_, c)| c.is_hunter()) {
        add(card.id, ZoneId::Hand);
    }
    for (slot, card) in selection.roster_tops(you).filter(|(_, c)| c.is_hunter()) {
        add(card.id, ZoneId::Roster(slot));
    }
    committed
}

/// Answer the pending CPU hunt.
///
/// `None` passes. `Some(card)` foils with that human Hunter plus the
/// current selection. Returns `Ok(None)` when nothing is pending. A
/// nomination that is not a human Hunter in hand or on a roster top is
/// refused and the interrupt stays pending.
pub fn resolve_foil(
    state: &mut GameState,
    decision: Option<EntityId>,
    notifier: &mut Notifier,
) -> ActionResult<Option<FoilResolution>> {
    let Some(interrupt) = state.pending_interrupt.clone() else {
        return Ok(None);
    };

    let committed = match decision {
        Some(id) => {
            if locate_foil_hunter(state, id).is_none() {
                warn!(card = %id, "foil nomination is not an available hunter");
                return Err(ActionError::invalid(
                    "Nominate one of your Hunters in hand or on top of your roster.",
                ));
            }
            Some(committed_hunters(state, &state.selection, id))
        }
        None => None,
    };

    state.pending_interrupt = None;

    let foil = committed.as_ref().map(|committed| {
        let budget: u32 = committed
            .iter()
            .filter_map(|(id, zone)| {
                state
                    .board(Side::You)
                    .zone(*zone)
                    .iter()
                    .find(|c| c.id == *id)
                    .map(Card::power)
            })
            .sum();
        compute_foil(&interrupt.attacking_hunters, budget)
    });

    let mut burned = EntityList::new();
    if let Some(committed) = &committed {
        let you = state.board_mut(Side::You);
        for (id, zone) in committed {
            let card = you.take(*zone, *id);
            burned.push(card.id);
            you.burn.push(card);
        }
    }

    let cpu = state.board_mut(Side::Cpu);
    let mut survivors = Vec::with_capacity(interrupt.attacking_hunters.len());
    for attacker in &interrupt.attacking_hunters {
        let card = cpu.take(ZoneId::Hand, attacker.id);
        let stopped = foil.as_ref().is_some_and(|f| f.foiled.contains(&card.id));
        if stopped {
            cpu.burn.push(card);
        } else {
            survivors.push(card);
        }
    }

    if let Some(result) = &foil {
        info!(
            committed = burned.len(),
            foiled = result.foiled.len(),
            removed_power = result.removed_power,
            "cpu hunt foiled"
        );
        state.record(
            Side::You,
            ActionEvent::Foil {
                committed: burned.clone(),
                foiled: result.foiled.clone(),
            },
        );
    } else {
        info!("foil passed");
    }

    let hunt = resolve_hunt(state, Side::Cpu, survivors, interrupt.target());

    if !state.selection.is_empty() {
        state.selection.clear();
        notifier.emit(Notification::SelectionChanged);
    }
    notifier.emit(Notification::StateChanged);
    check_winner(state, notifier);

    Ok(Some(FoilResolution {
        foil,
        committed: burned,
        hunt,
    }))
}
