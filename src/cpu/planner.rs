//! CPU planners, one per action kind.
//!
//! A planner looks at the table from the CPU's side, picks at most one
//! concrete order, and runs it through the same executor the human uses.
//! Planners never bend the rules: an order the executor refuses is simply
//! a skipped planner.
//!
//! The hunt planner is the only one that can suspend the turn: when the
//! human holds a Hunter it parks the hunt as a `PendingInterrupt` instead
//! of resolving it.

use smallvec::SmallVec;
use tracing::{debug, info};

use super::foil::{InterruptKind, PendingInterrupt};
use crate::actions::hunt::regimented_alone;
use crate::actions::{execute_cull, execute_hunt, execute_resupply, execute_trade};
use crate::cards::Card;
use crate::core::{ActionKind, EntityId, GameState, Side};
use crate::events::{Notification, Notifier};
use crate::rules::{try_build_payment, HuntOrder, Payment, TargetRef, TradeOrder};

/// What running a planner did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanOutcome {
    /// An action was taken.
    Acted,
    /// Nothing worth doing, or the executor refused.
    Skipped,
    /// A hunt is parked waiting for the human's Foil decision.
    AwaitingFoil,
    /// The action ended the game.
    GameOver,
}

impl PlanOutcome {
    /// Does this outcome count against the CPU's action cap?
    #[must_use]
    pub fn counts_as_action(self) -> bool {
        matches!(self, PlanOutcome::Acted | PlanOutcome::GameOver)
    }
}

/// One CPU decision procedure.
pub trait Planner: Send + Sync {
    /// The action this planner produces.
    fn kind(&self) -> ActionKind;

    /// Try to act for the CPU.
    fn run(&self, state: &mut GameState, notifier: &mut Notifier) -> PlanOutcome;
}

/// The planner for an action kind.
///
/// Panics for `Foil` and `EndTurn`, which no planner produces.
#[must_use]
pub fn planner_for(kind: ActionKind) -> &'static dyn Planner {
    match kind {
        ActionKind::Hunt => &HuntPlanner,
        ActionKind::Trade => &TradePlanner,
        ActionKind::Resupply => &ResupplyPlanner,
        ActionKind::Cull => &CullPlanner,
        other => panic!("No CPU planner for {}", other),
    }
}

fn finished(state: &GameState) -> PlanOutcome {
    if state.is_over() {
        PlanOutcome::GameOver
    } else {
        PlanOutcome::Acted
    }
}

// =============================================================================
// Hunt
// =============================================================================

/// A hunt the CPU would like to make.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HuntPlan {
    pub attackers: Vec<Card>,
    pub target: TargetRef,
    pub target_monster: Card,
}

/// Hunt with every Hunter in hand against the most rewarding Monster they
/// can beat.
#[derive(Clone, Copy, Debug, Default)]
pub struct HuntPlanner;

impl HuntPlanner {
    /// Pick the attack, if any.
    ///
    /// Candidates are Monster tops on either roster (human roster first, by
    /// slot) whose power the CPU hand's Hunters reach together. Highest
    /// tender wins, then lowest power, then the first found.
    #[must_use]
    pub fn plan(state: &GameState) -> Option<HuntPlan> {
        let attackers: Vec<Card> = state
            .board(Side::Cpu)
            .hand
            .iter()
            .filter(|c| c.is_hunter())
            .cloned()
            .collect();
        if attackers.is_empty() {
            return None;
        }
        let total: u32 = attackers.iter().map(Card::power).sum();

        let mut best: Option<(TargetRef, &Card)> = None;
        for side in [Side::You, Side::Cpu] {
            let board = state.board(side);
            for slot in 0..board.roster_slots() {
                let Some(card) = board.top_of(slot).filter(|c| c.is_monster()) else {
                    continue;
                };
                if card.power() > total {
                    continue;
                }
                let better = match best {
                    None => true,
                    Some((_, current)) => {
                        card.tender() > current.tender()
                            || (card.tender() == current.tender() && card.power() < current.power())
                    }
                };
                if better {
                    best = Some((TargetRef::new(side, slot), card));
                }
            }
        }

        best.map(|(target, monster)| HuntPlan {
            target_monster: monster.clone(),
            attackers,
            target,
        })
    }
}

impl Planner for HuntPlanner {
    fn kind(&self) -> ActionKind {
        ActionKind::Hunt
    }

    fn run(&self, state: &mut GameState, notifier: &mut Notifier) -> PlanOutcome {
        let Some(plan) = Self::plan(state) else {
            debug!("cpu hunt: no beatable monster");
            return PlanOutcome::Skipped;
        };
        if regimented_alone(&plan.attackers) {
            debug!("cpu hunt cancelled: lone regimented hunter");
            return PlanOutcome::Skipped;
        }

        if state.board(Side::You).has_available_hunter() {
            let interrupt = PendingInterrupt {
                kind: InterruptKind::CpuHuntFoil,
                attacking_hunters: plan.attackers,
                target_monster: plan.target_monster,
                target_side: plan.target.side,
                target_slot: plan.target.slot,
            };
            info!(
                attackers = interrupt.attacking_hunters.len(),
                power = interrupt.attack_power(),
                target = %interrupt.target_monster,
                "cpu hunt awaiting foil"
            );
            state.pending_interrupt = Some(interrupt.clone());
            notifier.emit(Notification::FoilInterruptPending(interrupt));
            return PlanOutcome::AwaitingFoil;
        }

        let mut order = HuntOrder::new(plan.target);
        order.hand = plan.attackers.iter().map(|c| c.id).collect();
        match execute_hunt(state, Side::Cpu, &order, notifier) {
            Ok(_) => finished(state),
            Err(err) => {
                debug!(%err, "cpu hunt refused");
                PlanOutcome::Skipped
            }
        }
    }
}

// =============================================================================
// Trade
// =============================================================================

/// Trade for the roster Hunter that costs the fewest supply cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct TradePlanner;

impl TradePlanner {
    /// Cheapest affordable roster Hunter: `(slot, payment)`. Ties go to
    /// the lowest slot.
    #[must_use]
    pub fn plan(state: &GameState) -> Option<(usize, Payment)> {
        let board = state.board(Side::Cpu);
        let supply: Vec<&Card> = board.hand.iter().filter(|c| c.is_supply()).collect();
        if supply.is_empty() {
            return None;
        }

        (0..board.roster_slots())
            .filter_map(|slot| {
                let hunter = board.top_of(slot).filter(|c| c.is_hunter())?;
                try_build_payment(hunter.requires(), &supply).map(|payment| (slot, payment))
            })
            .min_by_key(|(slot, payment)| (payment.len(), *slot))
    }
}

impl Planner for TradePlanner {
    fn kind(&self) -> ActionKind {
        ActionKind::Trade
    }

    fn run(&self, state: &mut GameState, notifier: &mut Notifier) -> PlanOutcome {
        let Some((slot, payment)) = Self::plan(state) else {
            debug!("cpu trade: nothing affordable");
            return PlanOutcome::Skipped;
        };
        // A cost-free Hunter still needs one Supply offered.
        let supplies = if payment.is_empty() {
            state
                .board(Side::Cpu)
                .hand
                .iter()
                .filter(|c| c.is_supply())
                .map(|c| c.id)
                .take(1)
                .collect()
        } else {
            payment
        };
        let order = TradeOrder { slot, supplies };
        match execute_trade(state, Side::Cpu, &order, notifier) {
            Ok(_) => finished(state),
            Err(err) => {
                debug!(%err, "cpu trade refused");
                PlanOutcome::Skipped
            }
        }
    }
}

// =============================================================================
// Resupply
// =============================================================================

/// Send one random roster Supply to the backlog.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResupplyPlanner;

impl Planner for ResupplyPlanner {
    fn kind(&self) -> ActionKind {
        ActionKind::Resupply
    }

    fn run(&self, state: &mut GameState, notifier: &mut Notifier) -> PlanOutcome {
        let board = state.board(Side::Cpu);
        let slots: SmallVec<[usize; 8]> = (0..board.roster_slots())
            .filter(|&slot| board.top_of(slot).is_some_and(Card::is_supply))
            .collect();
        let Some(&slot) = state.rng.choose(&slots) else {
            debug!("cpu resupply: no roster supply");
            return PlanOutcome::Skipped;
        };
        match execute_resupply(state, Side::Cpu, &[slot], notifier) {
            Ok(_) => finished(state),
            Err(err) => {
                debug!(%err, "cpu resupply refused");
                PlanOutcome::Skipped
            }
        }
    }
}

// =============================================================================
// Cull
// =============================================================================

/// Burn one random non-Hunter from hand, inside the guardrails.
#[derive(Clone, Copy, Debug, Default)]
pub struct CullPlanner;

impl CullPlanner {
    /// Is the CPU comfortably stocked enough to thin its deck?
    #[must_use]
    pub fn guardrails_allow(state: &GameState) -> bool {
        let guard = &state.config.cull_guard;
        let board = state.board(Side::Cpu);
        board.hand.len() > guard.min_hand
            && board.stock.len() > guard.min_stock
            && !board.backlog.is_empty()
            && board.cards_in_play() >= guard.min_cards_in_play
            && board.hunters_in_hand() > guard.min_hunters_in_hand
    }
}

impl Planner for CullPlanner {
    fn kind(&self) -> ActionKind {
        ActionKind::Cull
    }

    fn run(&self, state: &mut GameState, notifier: &mut Notifier) -> PlanOutcome {
        if state.cull_used_this_turn || !Self::guardrails_allow(state) {
            debug!("cpu cull: guardrails hold");
            return PlanOutcome::Skipped;
        }
        let fodder: SmallVec<[EntityId; 8]> = state
            .board(Side::Cpu)
            .hand
            .iter()
            .filter(|c| !c.is_hunter())
            .map(|c| c.id)
            .collect();
        let Some(&card) = state.rng.choose(&fodder) else {
            return PlanOutcome::Skipped;
        };
        match execute_cull(state, Side::Cpu, card, notifier) {
            Ok(()) => finished(state),
            Err(err) => {
                debug!(%err, "cpu cull refused");
                PlanOutcome::Skipped
            }
        }
    }
}
