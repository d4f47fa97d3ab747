//! The CPU turn as an explicit state machine.
//!
//! ```text
//! Idle -> Planning -> Acting -> Planning -> ... -> Finished
//!                  \-> AwaitingFoilResponse -(resume)-> Planning
//! ```
//!
//! `run_turn` starts the CPU turn and walks the persona's planner order
//! once, stopping at the action cap. If the hunt planner parks a hunt for
//! the human's Foil decision, `run_turn` returns `AwaitingFoil` with the
//! driver remembering where it stopped. `resume` resolves the interrupt
//! and carries on with the planner after Hunt; the hunt planner never runs
//! twice in one turn.
//!
//! When the order is exhausted (or the cap reached) the driver checks for
//! a winner, refills the CPU roster and starts the human's turn.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::foil::resolve_foil;
use super::persona::Persona;
use super::planner::{planner_for, PlanOutcome};
use crate::actions::ensure_can_act;
use crate::core::{EntityId, GameState, Side};
use crate::error::ActionResult;
use crate::events::Notifier;
use crate::turn::{hand_back_to_human, start_turn, TurnStart};

/// Where the CPU driver is in its turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CpuPhase {
    #[default]
    Idle,
    Planning,
    Acting,
    AwaitingFoilResponse,
    Finished,
}

/// How far a call into the driver got.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuTurnStatus {
    /// The CPU turn ended and the human has the turn.
    Completed,
    /// Suspended on a Foil interrupt; call `resume`.
    AwaitingFoil,
    /// The game ended during the CPU turn.
    GameOver,
}

/// Runs CPU turns.
#[derive(Clone, Debug, Default)]
pub struct CpuDriver {
    phase: CpuPhase,
    cursor: usize,
    actions_taken: u32,
}

impl CpuDriver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> CpuPhase {
        self.phase
    }

    /// Successful actions so far this turn.
    #[must_use]
    pub fn actions_taken(&self) -> u32 {
        self.actions_taken
    }

    /// The game's persona, picking one at random on first need.
    pub fn persona(state: &mut GameState) -> Persona {
        match state.persona {
            Some(persona) => persona,
            None => {
                let persona = Persona::random(&mut state.rng);
                info!(%persona, "cpu persona chosen");
                state.persona = Some(persona);
                persona
            }
        }
    }

    /// Play the CPU's turn.
    ///
    /// Refuses like any action when it is not the CPU's turn, an interrupt
    /// is pending, or the game is over.
    pub fn run_turn(&mut self, state: &mut GameState, notifier: &mut Notifier) -> ActionResult<CpuTurnStatus> {
        ensure_can_act(state, Side::Cpu)?;

        self.phase = CpuPhase::Planning;
        self.cursor = 0;
        self.actions_taken = 0;

        match start_turn(state, Side::Cpu, notifier)? {
            TurnStart::Ready { .. } => {}
            TurnStart::Stranded(_) | TurnStart::GameOver => {
                self.phase = CpuPhase::Finished;
                return Ok(CpuTurnStatus::GameOver);
            }
        }

        let persona = Self::persona(state);
        debug!(%persona, "cpu planning");
        self.plan(state, notifier)
    }

    /// Answer a pending Foil interrupt and finish the CPU turn.
    ///
    /// The resumed hunt counts toward the action cap only if it succeeded.
    /// With nothing pending this does nothing and reports where the game
    /// stands.
    pub fn resume(
        &mut self,
        state: &mut GameState,
        decision: Option<EntityId>,
        notifier: &mut Notifier,
    ) -> ActionResult<CpuTurnStatus> {
        let Some(resolution) = resolve_foil(state, decision, notifier)? else {
            return Ok(if state.is_over() {
                CpuTurnStatus::GameOver
            } else {
                CpuTurnStatus::Completed
            });
        };

        if resolution.hunt.success {
            self.actions_taken += 1;
        }
        if state.is_over() {
            self.phase = CpuPhase::Finished;
            return Ok(CpuTurnStatus::GameOver);
        }

        self.cursor += 1;
        self.phase = CpuPhase::Planning;
        self.plan(state, notifier)
    }

    fn plan(&mut self, state: &mut GameState, notifier: &mut Notifier) -> ActionResult<CpuTurnStatus> {
        let order = Self::persona(state).priority();
        let cap = state.config.cpu_action_cap;

        while self.cursor < order.len() && self.actions_taken < cap {
            let kind = order[self.cursor];
            self.phase = CpuPhase::Acting;
            let outcome = planner_for(kind).run(state, notifier);
            debug!(%kind, ?outcome, "cpu planner ran");
            self.phase = CpuPhase::Planning;

            if outcome.counts_as_action() {
                self.actions_taken += 1;
            }
            match outcome {
                PlanOutcome::AwaitingFoil => {
                    self.phase = CpuPhase::AwaitingFoilResponse;
                    return Ok(CpuTurnStatus::AwaitingFoil);
                }
                PlanOutcome::GameOver => {
                    self.phase = CpuPhase::Finished;
                    return Ok(CpuTurnStatus::GameOver);
                }
                PlanOutcome::Acted | PlanOutcome::Skipped => {}
            }
            self.cursor += 1;
        }

        self.finish(state, notifier)
    }

    fn finish(&mut self, state: &mut GameState, notifier: &mut Notifier) -> ActionResult<CpuTurnStatus> {
        self.phase = CpuPhase::Finished;
        info!(actions = self.actions_taken, "cpu turn finished");
        Ok(match hand_back_to_human(state, notifier)? {
            Some(_) => CpuTurnStatus::GameOver,
            None => CpuTurnStatus::Completed,
        })
    }
}
