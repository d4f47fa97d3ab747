//! The host-facing controller.
//!
//! `HuntGame` owns the one `GameState`, the notifier and the CPU driver.
//! Hosts read through `state()` / `snapshot()`, change the selection, and
//! call the action methods. Every refused request leaves the state alone,
//! emits `ActionRejected` and returns the error.

use tracing::debug;

use crate::actions::{
    ensure_can_act, execute_cull, execute_hunt, execute_resupply, execute_trade, HuntOutcome,
};
use crate::core::{
    ActionKind, ConfigError, EntityId, EntityList, GameRng, GameSnapshot, GameState, HuntConfig, Side, SideMap,
};
use crate::cpu::{CpuDriver, CpuPhase, CpuTurnStatus, PendingInterrupt};
use crate::error::{ActionError, ActionResult};
use crate::events::{Notification, Notifier, Observer};
use crate::rules::{
    compute_action_hints, cull_card_from_selection, hunt_order_from_selection,
    resupply_slots_from_selection, trade_order_from_selection, ActionHints, Payment, TargetRef,
    Victory,
};
use crate::turn::end_human_turn;
use crate::zones::Board;

/// A game of The Hunt, human against CPU.
#[derive(Debug)]
pub struct HuntGame {
    state: GameState,
    notifier: Notifier,
    driver: CpuDriver,
}

impl HuntGame {
    /// Wrap a prepared state.
    #[must_use]
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            notifier: Notifier::new(),
            driver: CpuDriver::new(),
        }
    }

    /// Start from boards the host has already laid out.
    ///
    /// Refuses an invalid config and any board without roster slots.
    pub fn from_boards(config: HuntConfig, boards: SideMap<Board>, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        if boards.iter().any(|(_, board)| board.roster_slots() == 0) {
            return Err(ConfigError::ZeroRosterSlots);
        }
        Ok(Self::new(GameState::new(config, boards, GameRng::new(seed))))
    }

    // === Reading ===

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Serialisable copy of the state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    #[must_use]
    pub fn pending_interrupt(&self) -> Option<&PendingInterrupt> {
        self.state.pending_interrupt.as_ref()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Victory> {
        self.state.winner
    }

    #[must_use]
    pub fn cpu_phase(&self) -> CpuPhase {
        self.driver.phase()
    }

    /// Which actions the current selection enables.
    #[must_use]
    pub fn action_hints(&self) -> ActionHints {
        compute_action_hints(&self.state, &self.state.selection)
    }

    // === Notifications ===

    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.notifier.subscribe(observer);
    }

    /// Everything emitted since the last drain.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }

    // === Selection ===

    /// Toggle a card in the human's hand. Out-of-range indices and a
    /// finished game are ignored. Returns whether it is now selected.
    pub fn toggle_hand(&mut self, index: usize) -> bool {
        if self.state.is_over() || index >= self.state.board(Side::You).hand.len() {
            return false;
        }
        let selected = self.state.selection.toggle_hand(index);
        self.notifier.emit(Notification::SelectionChanged);
        selected
    }

    /// Toggle one of the human's roster slots.
    pub fn toggle_roster(&mut self, slot: usize) -> bool {
        if self.state.is_over() || slot >= self.state.board(Side::You).roster_slots() {
            return false;
        }
        let selected = self.state.selection.toggle_roster(slot);
        self.notifier.emit(Notification::SelectionChanged);
        selected
    }

    /// Point the hunt at a roster stack on either side, or clear the target.
    pub fn set_target(&mut self, target: Option<TargetRef>) {
        if self.state.is_over() {
            return;
        }
        self.state.selection.set_target(target);
        self.notifier.emit(Notification::SelectionChanged);
    }

    pub fn clear_selection(&mut self) {
        if self.state.selection.is_empty() {
            return;
        }
        self.state.selection.clear();
        self.notifier.emit(Notification::SelectionChanged);
    }

    // === Actions ===

    fn reject(&mut self, action: ActionKind, err: ActionError) -> ActionError {
        debug!(%action, %err, "action rejected");
        self.notifier.emit(Notification::ActionRejected {
            action,
            reason: err.to_string(),
        });
        err
    }

    /// Hunt with the selected hunters.
    pub fn hunt(&mut self) -> ActionResult<HuntOutcome> {
        let result = ensure_can_act(&self.state, Side::You)
            .and_then(|()| hunt_order_from_selection(&self.state, &self.state.selection, Side::You))
            .and_then(|order| execute_hunt(&mut self.state, Side::You, &order, &mut self.notifier));
        result.map_err(|err| self.reject(ActionKind::Hunt, err))
    }

    /// Trade the selected supply for the selected roster Hunter.
    pub fn trade(&mut self) -> ActionResult<Payment> {
        let result = ensure_can_act(&self.state, Side::You)
            .and_then(|()| trade_order_from_selection(&self.state, &self.state.selection, Side::You))
            .and_then(|order| execute_trade(&mut self.state, Side::You, &order, &mut self.notifier));
        result.map_err(|err| self.reject(ActionKind::Trade, err))
    }

    /// Resupply the selected roster Supply cards.
    pub fn resupply(&mut self) -> ActionResult<EntityList> {
        let result = ensure_can_act(&self.state, Side::You)
            .and_then(|()| resupply_slots_from_selection(&self.state, &self.state.selection, Side::You))
            .and_then(|slots| execute_resupply(&mut self.state, Side::You, &slots, &mut self.notifier));
        result.map_err(|err| self.reject(ActionKind::Resupply, err))
    }

    /// Cull the selected hand card.
    pub fn cull(&mut self) -> ActionResult {
        let result = ensure_can_act(&self.state, Side::You)
            .and_then(|()| cull_card_from_selection(&self.state, &self.state.selection, Side::You))
            .and_then(|card| execute_cull(&mut self.state, Side::You, card, &mut self.notifier));
        result.map_err(|err| self.reject(ActionKind::Cull, err))
    }

    /// End the human's turn and play the CPU's.
    ///
    /// Returns `AwaitingFoil` if the CPU hunt stopped for a Foil decision;
    /// answer it with `resume_foil`.
    pub fn end_turn(&mut self) -> ActionResult<CpuTurnStatus> {
        match end_human_turn(&mut self.state, &mut self.notifier) {
            Err(err) => return Err(self.reject(ActionKind::EndTurn, err)),
            Ok(Some(_)) => return Ok(CpuTurnStatus::GameOver),
            Ok(None) => {}
        }
        self.driver.run_turn(&mut self.state, &mut self.notifier)
    }

    /// Answer the pending CPU hunt: `None` passes, `Some(card)` foils with
    /// that Hunter plus the selected ones. The CPU turn then carries on.
    pub fn resume_foil(&mut self, decision: Option<EntityId>) -> ActionResult<CpuTurnStatus> {
        let result = self.driver.resume(&mut self.state, decision, &mut self.notifier);
        result.map_err(|err| self.reject(ActionKind::Foil, err))
    }
}
