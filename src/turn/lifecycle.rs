//! Turn boundaries.
//!
//! ## Start of turn
//!
//! 0. A side with nothing in hand, stock or backlog is stranded and loses
//!    on the spot; the rest of the start is skipped.
//! 1. The hand goes to the backlog.
//! 2. `hand_size` cards are drawn (reshuffling the backlog under the stock
//!    when the stock runs short).
//! 3. Drawn Monsters go to the least-filled roster stack; the rest is the
//!    new hand.
//! 4. The once-per-turn Cull is available again.
//!
//! ## End of turn
//!
//! Each empty roster slot takes one card from the deck, per-turn state is
//! cleared, and the other side gets the turn. The turn counter advances
//! when the CPU hands back to the human.
//!
//! Neither boundary runs while a Foil interrupt is pending: the parked
//! attackers are still in the CPU hand.

use tracing::{debug, info};

use crate::actions::ensure_can_act;
use crate::core::{ActionEvent, GameState, Side};
use crate::error::{ActionError, ActionResult};
use crate::events::{Notification, Notifier};
use crate::rules::{check_winner, declare_winner, Victory, WinReason};

/// How a start of turn went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnStart {
    /// The side drew and is ready to act.
    Ready { drawn: usize, placed: usize },
    /// The side could not draw or play anything and lost.
    Stranded(Victory),
    /// The game was already over.
    GameOver,
}

fn ensure_no_interrupt(state: &GameState) -> ActionResult {
    match state.pending_interrupt {
        Some(_) => Err(ActionError::InterruptPending),
        None => Ok(()),
    }
}

/// Run the start-of-turn refresh for `side`.
pub fn start_turn(state: &mut GameState, side: Side, notifier: &mut Notifier) -> ActionResult<TurnStart> {
    if state.is_over() {
        return Ok(TurnStart::GameOver);
    }
    ensure_no_interrupt(state)?;

    if state.board(side).is_stranded() {
        let victory = Victory::new(side.opponent(), WinReason::Stranded);
        info!(loser = %side, "stranded at start of turn");
        declare_winner(state, victory, notifier);
        return Ok(TurnStart::Stranded(victory));
    }

    let hand_size = state.config.hand_size;
    let GameState { boards, rng, .. } = state;
    let board = &mut boards[side];

    board.backlog.append(&mut board.hand);
    let drawn = board.draw(hand_size, rng);
    let count = drawn.len();

    let mut placed = 0;
    for card in drawn {
        if card.is_monster() {
            board.place_monster(card);
            placed += 1;
        } else {
            board.hand.push(card);
        }
    }

    state.cull_used_this_turn = false;
    info!(%side, turn = state.turn_count, drawn = count, placed, "turn started");
    notifier.emit(Notification::StateChanged);

    Ok(TurnStart::Ready {
        drawn: count,
        placed,
    })
}

/// Refill `side`'s roster from its deck and hand the turn to the opponent.
pub fn end_turn(state: &mut GameState, side: Side, notifier: &mut Notifier) -> ActionResult {
    ensure_no_interrupt(state)?;
    let filled = state.board_mut(side).refill_empty_slots_from_deck();
    debug!(%side, filled, "roster refilled from deck");

    state.record(side, ActionEvent::EndTurn);
    let next = side.opponent();
    state.set_turn(next);
    if next.is_human() {
        state.turn_count += 1;
    }
    info!(from = %side, to = %next, turn = state.turn_count, "turn passed");
    notifier.emit(Notification::StateChanged);
    Ok(())
}

/// The human ends their turn.
///
/// Clears the selection, refills the human roster, checks for a winner and,
/// if the game goes on, passes the turn to the CPU. The caller then runs
/// the CPU driver.
pub fn end_human_turn(state: &mut GameState, notifier: &mut Notifier) -> ActionResult<Option<Victory>> {
    ensure_can_act(state, Side::You)?;

    if !state.selection.is_empty() {
        state.selection.clear();
        notifier.emit(Notification::SelectionChanged);
    }

    let filled = state.board_mut(Side::You).refill_empty_slots_from_deck();
    debug!(filled, "human roster refilled from deck");
    notifier.emit(Notification::StateChanged);

    if let Some(victory) = check_winner(state, notifier) {
        return Ok(Some(victory));
    }

    state.record(Side::You, ActionEvent::EndTurn);
    state.set_turn(Side::Cpu);
    info!(turn = state.turn_count, "turn passed to cpu");
    notifier.emit(Notification::StateChanged);
    Ok(None)
}

/// The CPU is done: check for a winner, refill the CPU roster, start the
/// human's turn, and check again.
pub fn hand_back_to_human(state: &mut GameState, notifier: &mut Notifier) -> ActionResult<Option<Victory>> {
    ensure_no_interrupt(state)?;
    if let Some(victory) = check_winner(state, notifier) {
        return Ok(Some(victory));
    }
    end_turn(state, Side::Cpu, notifier)?;
    if let TurnStart::Stranded(victory) = start_turn(state, Side::You, notifier)? {
        return Ok(Some(victory));
    }
    Ok(check_winner(state, notifier))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::*;
    use crate::cards::SupplyKind;
    use crate::core::EntityId;

    #[test]
    fn test_start_turn_draws_and_places_monsters() {
        let mut state = empty_table();
        let you = state.board_mut(Side::You);
        you.stock = vec![
            supply(1, SupplyKind::Kit),
            monster(2, 3, 1),
            hunter(3, 2),
            supply(4, SupplyKind::Any),
            hunter(5, 1),
            monster(6, 1, 1),
        ];
        you.hand = vec![hunter(7, 1)];
        state.cull_used_this_turn = true;

        let start = start_turn(&mut state, Side::You, &mut Notifier::new()).unwrap();

        assert_eq!(start, TurnStart::Ready { drawn: 5, placed: 2 });
        let you = state.board(Side::You);
        assert_eq!(you.hand.len(), 3);
        assert_eq!(you.top_of(0).map(|c| c.id), Some(EntityId(6)));
        assert_eq!(you.top_of(1).map(|c| c.id), Some(EntityId(2)));
        assert_eq!(you.backlog.len(), 1);
        assert_eq!(you.stock.len(), 1);
        assert!(!state.cull_used_this_turn);
    }

    #[test]
    fn test_start_turn_reshuffles_backlog() {
        let mut state = empty_table();
        let you = state.board_mut(Side::You);
        you.stock.clear();
        you.backlog = (1..=5).map(|i| hunter(i, 1)).collect();

        let start = start_turn(&mut state, Side::You, &mut Notifier::new()).unwrap();

        assert_eq!(start, TurnStart::Ready { drawn: 5, placed: 0 });
        let you = state.board(Side::You);
        assert_eq!(you.hand.len(), 5);
        assert!(you.stock.is_empty());
        assert!(you.backlog.is_empty());
    }

    #[test]
    fn test_stranded_side_loses() {
        let mut state = empty_table();
        state.board_mut(Side::Cpu).stock.clear();
        let mut notifier = Notifier::new();

        let start = start_turn(&mut state, Side::Cpu, &mut notifier).unwrap();

        assert_eq!(
            start,
            TurnStart::Stranded(Victory::new(Side::You, WinReason::Stranded))
        );
        assert_eq!(state.winner.map(|v| v.side), Some(Side::You));
        assert_eq!(start_turn(&mut state, Side::You, &mut notifier), Ok(TurnStart::GameOver));
    }

    #[test]
    fn test_end_turn_refills_and_counts() {
        let mut state = empty_table();
        state.turn = Side::Cpu;
        state.board_mut(Side::Cpu).deck = vec![hunter(1, 1), hunter(2, 1)];
        state.board_mut(Side::Cpu).roster[1].push(hunter(3, 1));

        end_turn(&mut state, Side::Cpu, &mut Notifier::new()).unwrap();

        let cpu = state.board(Side::Cpu);
        assert_eq!(cpu.top_of(0).map(|c| c.id), Some(EntityId(2)));
        assert_eq!(cpu.top_of(2).map(|c| c.id), Some(EntityId(1)));
        assert!(cpu.deck.is_empty());
        assert_eq!(state.turn, Side::You);
        assert_eq!(state.turn_count, 2);
    }

    #[test]
    fn test_end_human_turn_passes_to_cpu() {
        let mut state = empty_table();
        state.selection.toggle_hand(0);
        state.board_mut(Side::You).deck = vec![hunter(1, 1)];
        let mut notifier = Notifier::new();

        assert_eq!(end_human_turn(&mut state, &mut notifier), Ok(None));
        assert_eq!(state.turn, Side::Cpu);
        assert_eq!(state.turn_count, 1);
        assert!(state.selection.is_empty());
        assert_eq!(state.board(Side::You).top_of(0).map(|c| c.id), Some(EntityId(1)));
        assert!(notifier.drain().contains(&Notification::SelectionChanged));
    }

    #[test]
    fn test_end_human_turn_with_winning_tender() {
        let mut state = empty_table();
        state.board_mut(Side::You).tender = 20;

        let result = end_human_turn(&mut state, &mut Notifier::new());
        assert_eq!(result, Ok(Some(Victory::new(Side::You, WinReason::Tender))));
        assert_eq!(state.turn, Side::You);
    }

    #[test]
    fn test_boundaries_refused_while_interrupt_pending() {
        use crate::cpu::{CpuDriver, CpuTurnStatus, Persona};

        let mut state = empty_table();
        state.persona = Some(Persona::Offensive);
        state.set_turn(Side::Cpu);
        let cpu = state.board_mut(Side::Cpu);
        cpu.stock = (2..=16).map(|i| supply(i, SupplyKind::Kit)).collect();
        cpu.stock.push(hunter(1, 4));
        state.board_mut(Side::Cpu).roster[0].push(monster(20, 3, 2));
        state.board_mut(Side::You).roster[4].push(hunter(30, 1));
        let mut driver = CpuDriver::new();
        let mut notifier = Notifier::new();

        assert_eq!(
            driver.run_turn(&mut state, &mut notifier),
            Ok(CpuTurnStatus::AwaitingFoil)
        );
        let parked = state.snapshot();

        assert_eq!(
            start_turn(&mut state, Side::Cpu, &mut notifier),
            Err(ActionError::InterruptPending)
        );
        assert_eq!(
            end_turn(&mut state, Side::Cpu, &mut notifier),
            Err(ActionError::InterruptPending)
        );
        assert_eq!(
            hand_back_to_human(&mut state, &mut notifier),
            Err(ActionError::InterruptPending)
        );
        assert_eq!(state.snapshot(), parked);

        // The parked attacker is still in hand, so the hunt resolves.
        assert_eq!(
            driver.resume(&mut state, None, &mut notifier),
            Ok(CpuTurnStatus::Completed)
        );
        assert_eq!(state.board(Side::Cpu).tender, 2);
    }
}
