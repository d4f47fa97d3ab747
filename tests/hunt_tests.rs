//! Hunt resolution through the controller.

mod common;

use common::*;
use hunt_engine::core::{ActionKind, EntityId, Side};
use hunt_engine::error::ActionError;
use hunt_engine::events::Notification;
use hunt_engine::rules::{TargetRef, Victory, WinReason};

// =============================================================================
// Success and Failure
// =============================================================================

#[test]
fn test_two_hunters_take_own_monster() {
    let mut boards = boards();
    boards[Side::You].hand = vec![hunter(1, 3), hunter(2, 4)];
    boards[Side::You].roster[0].push(monster(10, 5, 2));
    let mut game = game(boards);

    game.toggle_hand(0);
    game.toggle_hand(1);
    game.toggle_roster(0);
    let outcome = game.hunt().unwrap();

    assert!(outcome.success);
    assert_eq!(outcome.tender_gained, 2);
    let you = game.state().board(Side::You);
    assert_eq!(you.tender, 2);
    assert!(you.hand.is_empty());
    assert_eq!(you.backlog.iter().map(|c| c.id).collect::<Vec<_>>(), vec![EntityId(1), EntityId(2)]);
    assert_eq!(you.burn.iter().map(|c| c.id).collect::<Vec<_>>(), vec![EntityId(10)]);
    assert!(you.roster[0].is_empty());
}

#[test]
fn test_hunting_cpu_monster_gives_no_tender() {
    let mut boards = boards();
    boards[Side::You].hand = vec![hunter(1, 6)];
    boards[Side::Cpu].roster[3].push(monster(10, 5, 4));
    let mut game = game(boards);

    game.toggle_hand(0);
    game.set_target(Some(TargetRef::new(Side::Cpu, 3)));
    let outcome = game.hunt().unwrap();

    assert!(outcome.success);
    assert_eq!(game.snapshot().tender(Side::You), 0);
    assert_eq!(game.snapshot().tender(Side::Cpu), 0);
    assert_eq!(game.state().board(Side::Cpu).burn.len(), 1);
    assert!(game.state().board(Side::Cpu).roster[3].is_empty());
}

#[test]
fn test_failed_hunt_is_free() {
    let mut boards = boards();
    boards[Side::You].hand = vec![hunter(1, 2), hunter(2, 2)];
    boards[Side::You].roster[0].push(monster(10, 5, 3));
    let mut game = game(boards);

    game.toggle_hand(0);
    game.toggle_hand(1);
    game.toggle_roster(0);
    let before = game.snapshot();
    let hints = game.action_hints();
    assert!(!hints.hunt);
    assert_eq!(
        hints.reason(ActionKind::Hunt),
        Some("Hunters total P4 is less than Monster 10 (P5).")
    );

    let err = game.hunt().unwrap_err();
    assert!(matches!(err, ActionError::InsufficientPower { have: 4, need: 5, .. }));
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_regimented_pairing() {
    let mut boards = boards();
    boards[Side::You].hand = vec![regimented(1, 5), hunter(2, 1), regimented(3, 1)];
    boards[Side::You].roster[0].push(monster(10, 3, 1));
    let mut game = game(boards);

    game.toggle_hand(0);
    game.toggle_hand(1);
    game.toggle_roster(0);
    assert_eq!(game.hunt(), Err(ActionError::RegimentedAlone));

    game.toggle_hand(2);
    assert!(game.hunt().unwrap().success);
}

#[test]
fn test_two_monsters_selected_is_ambiguous() {
    let mut boards = boards();
    boards[Side::You].hand = vec![hunter(1, 9)];
    boards[Side::You].roster[0].push(monster(10, 1, 1));
    boards[Side::You].roster[1].push(monster(11, 1, 1));
    let mut game = game(boards);

    game.toggle_hand(0);
    game.toggle_roster(0);
    game.toggle_roster(1);
    assert_eq!(
        game.hunt(),
        Err(ActionError::invalid("Select exactly one Monster (your roster or CPU roster)."))
    );
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_tender_win_ends_the_game_at_once() {
    let mut boards = boards();
    boards[Side::You].tender = 19;
    boards[Side::You].hand = vec![hunter(1, 4), supply(2, hunt_engine::cards::SupplyKind::Kit)];
    boards[Side::You].roster[0].push(monster(10, 4, 3));
    let mut game = game(boards);

    game.toggle_hand(0);
    game.toggle_roster(0);
    game.hunt().unwrap();

    let victory = Victory::new(Side::You, WinReason::Tender);
    assert_eq!(game.winner(), Some(victory));
    assert_eq!(game.snapshot().tender(Side::You), 22);
    let notes = game.drain_notifications();
    assert_eq!(
        notes.iter().filter(|n| matches!(n, Notification::GameOver { .. })).count(),
        1
    );

    // Terminal: nothing else runs.
    game.toggle_hand(0);
    assert_eq!(game.cull(), Err(ActionError::GameOver));
    assert_eq!(game.end_turn(), Err(ActionError::GameOver));
}
