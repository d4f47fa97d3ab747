//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use hunt_engine::cards::{Card, CardDefinition, SupplyKind};
use hunt_engine::core::{EntityId, HuntConfig, Side, SideMap};
use hunt_engine::game::HuntGame;
use hunt_engine::zones::Board;

pub fn card(id: u32, def: CardDefinition) -> Card {
    Card::new(EntityId(id), Arc::new(def))
}

pub fn hunter(id: u32, power: u32) -> Card {
    card(id, CardDefinition::hunter(format!("h{}", id), format!("Hunter {}", id), power))
}

pub fn regimented(id: u32, power: u32) -> Card {
    card(
        id,
        CardDefinition::hunter(format!("r{}", id), format!("Pikeman {}", id), power).with_trait("regimented"),
    )
}

pub fn monster(id: u32, power: u32, tender: u32) -> Card {
    card(id, CardDefinition::monster(format!("m{}", id), format!("Monster {}", id), power, tender))
}

pub fn supply(id: u32, kind: SupplyKind) -> Card {
    card(id, CardDefinition::supply(format!("s{}", id), format!("Supply {}", id), kind))
}

/// Boards with one spare supply in each stock so neither side starts
/// exhausted.
pub fn boards() -> SideMap<Board> {
    let mut you = Board::new(5);
    let mut cpu = Board::new(5);
    you.stock.push(supply(900, SupplyKind::Any));
    cpu.stock.push(supply(901, SupplyKind::Any));
    SideMap::new(you, cpu)
}

pub fn game(boards: SideMap<Board>) -> HuntGame {
    HuntGame::from_boards(HuntConfig::default(), boards, 17).unwrap()
}

/// A mixed 30-card catalog deck, as definitions.
pub fn mixed_deck() -> Vec<CardDefinition> {
    let mut deck = Vec::new();
    for i in 0..10 {
        deck.push(
            CardDefinition::hunter(format!("h{}", i), format!("Tracker {}", i), 1 + i % 4)
                .with_requirement(SupplyKind::Kit, 1),
        );
        deck.push(CardDefinition::monster(format!("m{}", i), format!("Troll {}", i), 2 + i % 5, 1 + i % 3));
        let kind = SupplyKind::SPECIFIC[(i % 3) as usize];
        deck.push(CardDefinition::supply(format!("s{}", i), format!("Supply {}", i), kind));
    }
    deck
}

pub fn side_ids(game: &HuntGame, side: Side) -> Vec<EntityId> {
    game.state().board(side).hand.iter().map(|c| c.id).collect()
}
