//! One side's zones and the card movements between them.
//!
//! A `Board` owns every card of one side. Moving a card takes it out of one
//! `Vec` and pushes it into another, so a card can never sit in two zones.
//!
//! ## Ordering
//!
//! `deck` and `stock` are piles whose top is the end of the `Vec`. Each
//! roster slot is a stack with the same convention; only its top card is
//! playable.
//!
//! ## Invariant Violations
//!
//! Helpers that take a card by `EntityId` panic when the card is not in the
//! zone the caller names, and `put` panics on a card already on the board.
//! Executors validate before they move anything.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::core::entity::EntityId;
use crate::core::rng::GameRng;

/// A zone on one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZoneId {
    Deck,
    Stock,
    Backlog,
    Burn,
    Hand,
    /// A roster stack, by slot index.
    Roster(usize),
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoneId::Deck => write!(f, "deck"),
            ZoneId::Stock => write!(f, "stock"),
            ZoneId::Backlog => write!(f, "backlog"),
            ZoneId::Burn => write!(f, "burn"),
            ZoneId::Hand => write!(f, "hand"),
            ZoneId::Roster(slot) => write!(f, "roster[{}]", slot),
        }
    }
}

/// Position for inserting a card into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZonePosition {
    /// On top (end of the `Vec`).
    Top,
    /// Underneath everything.
    Bottom,
}

/// All zones of one side, plus its tender.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub deck: Vec<Card>,
    pub stock: Vec<Card>,
    pub backlog: Vec<Card>,
    pub burn: Vec<Card>,
    pub hand: Vec<Card>,
    pub roster: Vec<Vec<Card>>,
    pub tender: u32,
}

impl Board {
    /// Create an empty board with `roster_slots` empty stacks.
    #[must_use]
    pub fn new(roster_slots: usize) -> Self {
        Self {
            roster: vec![Vec::new(); roster_slots],
            ..Self::default()
        }
    }

    // === Zone access ===

    /// Cards in a zone, bottom first.
    ///
    /// Panics on a roster slot that does not exist.
    #[must_use]
    pub fn zone(&self, zone: ZoneId) -> &[Card] {
        match zone {
            ZoneId::Deck => &self.deck,
            ZoneId::Stock => &self.stock,
            ZoneId::Backlog => &self.backlog,
            ZoneId::Burn => &self.burn,
            ZoneId::Hand => &self.hand,
            ZoneId::Roster(slot) => &self.roster[slot],
        }
    }

    fn zone_mut(&mut self, zone: ZoneId) -> &mut Vec<Card> {
        match zone {
            ZoneId::Deck => &mut self.deck,
            ZoneId::Stock => &mut self.stock,
            ZoneId::Backlog => &mut self.backlog,
            ZoneId::Burn => &mut self.burn,
            ZoneId::Hand => &mut self.hand,
            ZoneId::Roster(slot) => &mut self.roster[slot],
        }
    }

    /// The playable card of a roster stack.
    #[must_use]
    pub fn top_of(&self, slot: usize) -> Option<&Card> {
        self.roster.get(slot).and_then(|stack| stack.last())
    }

    /// Number of roster slots.
    #[must_use]
    pub fn roster_slots(&self) -> usize {
        self.roster.len()
    }

    /// Find which zone holds a card.
    #[must_use]
    pub fn zone_of(&self, id: EntityId) -> Option<ZoneId> {
        let holds = |cards: &[Card]| cards.iter().any(|c| c.id == id);
        if holds(&self.hand) {
            return Some(ZoneId::Hand);
        }
        if let Some(slot) = self.roster.iter().position(|stack| holds(stack)) {
            return Some(ZoneId::Roster(slot));
        }
        [ZoneId::Deck, ZoneId::Stock, ZoneId::Backlog, ZoneId::Burn]
            .into_iter()
            .find(|&zone| holds(self.zone(zone)))
    }

    /// Index of a card in hand.
    #[must_use]
    pub fn hand_index(&self, id: EntityId) -> Option<usize> {
        self.hand.iter().position(|c| c.id == id)
    }

    /// The roster slot whose top card is `id`.
    #[must_use]
    pub fn roster_slot_of_top(&self, id: EntityId) -> Option<usize> {
        (0..self.roster.len()).find(|&slot| self.top_of(slot).is_some_and(|c| c.id == id))
    }

    // === Movement ===

    /// Remove a card from a zone.
    ///
    /// Panics if the card is not there.
    pub fn take(&mut self, zone: ZoneId, id: EntityId) -> Card {
        let cards = self.zone_mut(zone);
        match cards.iter().position(|c| c.id == id) {
            Some(index) => cards.remove(index),
            None => panic!("Entity {:?} is not in {}", id, zone),
        }
    }

    /// Pop the top card of a roster stack.
    pub fn take_top(&mut self, slot: usize) -> Option<Card> {
        self.roster.get_mut(slot).and_then(Vec::pop)
    }

    /// Put a card into a zone.
    ///
    /// Panics if a card with the same id is already on this board.
    pub fn put(&mut self, card: Card, zone: ZoneId, position: ZonePosition) {
        if let Some(existing) = self.zone_of(card.id) {
            panic!("Entity {:?} already exists in {}", card.id, existing);
        }
        let cards = self.zone_mut(zone);
        match position {
            ZonePosition::Top => cards.push(card),
            ZonePosition::Bottom => cards.insert(0, card),
        }
    }

    /// Move one card between zones of this board.
    pub fn move_card(&mut self, id: EntityId, from: ZoneId, to: ZoneId) {
        let card = self.take(from, id);
        debug!(card = %card, %from, %to, "move");
        self.zone_mut(to).push(card);
    }

    /// Move every card of `from` on top of `to`, keeping their order.
    ///
    /// Returns how many cards moved.
    pub fn move_all(&mut self, from: ZoneId, to: ZoneId) -> usize {
        if from == to {
            return 0;
        }
        let mut moving = std::mem::take(self.zone_mut(from));
        let count = moving.len();
        self.zone_mut(to).append(&mut moving);
        count
    }

    // === Drawing ===

    /// Shuffle the backlog and slide it underneath the stock.
    pub fn reshuffle_backlog_into_stock(&mut self, rng: &mut GameRng) {
        if self.backlog.is_empty() {
            return;
        }
        let mut pile = std::mem::take(&mut self.backlog);
        rng.shuffle(&mut pile);
        debug!(count = pile.len(), "reshuffle backlog into stock");
        pile.append(&mut self.stock);
        self.stock = pile;
    }

    /// Make sure the stock can cover a draw of `n`, reshuffling the backlog
    /// under it when it cannot.
    pub fn ensure_stock(&mut self, n: usize, rng: &mut GameRng) {
        if self.stock.len() < n && !self.backlog.is_empty() {
            self.reshuffle_backlog_into_stock(rng);
        }
    }

    /// Draw up to `n` cards off the top of the stock.
    ///
    /// Never fails: with stock and backlog both empty, fewer cards come back.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> Vec<Card> {
        self.ensure_stock(n, rng);
        let count = n.min(self.stock.len());
        let mut drawn = self.stock.split_off(self.stock.len() - count);
        drawn.reverse();
        drawn
    }

    // === Roster ===

    /// The roster slot holding the fewest cards (ties go to the lowest slot).
    ///
    /// Panics on a board without roster slots.
    #[must_use]
    pub fn least_filled_slot(&self) -> usize {
        let mut best = 0;
        for (slot, stack) in self.roster.iter().enumerate() {
            if stack.len() < self.roster[best].len() {
                best = slot;
            }
        }
        best
    }

    /// Place a card on the least-filled roster stack. Returns the slot.
    pub fn place_monster(&mut self, card: Card) -> usize {
        let slot = self.least_filled_slot();
        debug!(card = %card, slot, "auto-place on roster");
        self.roster[slot].push(card);
        slot
    }

    /// Fill each empty roster slot with the top card of the deck.
    ///
    /// Returns how many slots were filled.
    pub fn refill_empty_slots_from_deck(&mut self) -> usize {
        let mut filled = 0;
        for stack in self.roster.iter_mut().filter(|s| s.is_empty()) {
            match self.deck.pop() {
                Some(card) => {
                    stack.push(card);
                    filled += 1;
                }
                None => break,
            }
        }
        filled
    }

    // === Counting ===

    /// Every card on this board, burn included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards_in_play() + self.burn.len()
    }

    /// Cards still in circulation: everything except the burn pile.
    #[must_use]
    pub fn cards_in_play(&self) -> usize {
        self.deck.len()
            + self.stock.len()
            + self.backlog.len()
            + self.hand.len()
            + self.roster.iter().map(Vec::len).sum::<usize>()
    }

    /// Hunters currently in hand.
    #[must_use]
    pub fn hunters_in_hand(&self) -> usize {
        self.hand.iter().filter(|c| c.is_hunter()).count()
    }

    /// Does this side hold a hunter in hand or on a roster top?
    #[must_use]
    pub fn has_available_hunter(&self) -> bool {
        self.hand.iter().any(Card::is_hunter)
            || (0..self.roster.len()).any(|slot| self.top_of(slot).is_some_and(Card::is_hunter))
    }

    /// Deck, stock, backlog and hand are all empty.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.deck.is_empty() && self.stock.is_empty() && self.backlog.is_empty() && self.hand.is_empty()
    }

    /// Hand, stock and backlog are all empty: nothing can be drawn or played.
    #[must_use]
    pub fn is_stranded(&self) -> bool {
        self.hand.is_empty() && self.stock.is_empty() && self.backlog.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, SupplyKind};
    use std::sync::Arc;

    fn hunter(id: u32) -> Card {
        Card::new(EntityId(id), Arc::new(CardDefinition::hunter("h", "Tracker", 2)))
    }

    fn supply(id: u32) -> Card {
        Card::new(EntityId(id), Arc::new(CardDefinition::supply("s", "Kit", SupplyKind::Kit)))
    }

    fn ids(cards: &[Card]) -> Vec<u32> {
        cards.iter().map(|c| c.id.raw()).collect()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(5);
        assert_eq!(board.roster_slots(), 5);
        assert_eq!(board.card_count(), 0);
        assert!(board.is_exhausted());
        assert!(board.top_of(0).is_none());
        assert!(board.top_of(9).is_none());
    }

    #[test]
    fn test_take_and_zone_of() {
        let mut board = Board::new(2);
        board.put(hunter(1), ZoneId::Hand, ZonePosition::Top);
        board.put(supply(2), ZoneId::Roster(1), ZonePosition::Top);

        assert_eq!(board.zone_of(EntityId(1)), Some(ZoneId::Hand));
        assert_eq!(board.zone_of(EntityId(2)), Some(ZoneId::Roster(1)));
        assert_eq!(board.roster_slot_of_top(EntityId(2)), Some(1));

        board.move_card(EntityId(1), ZoneId::Hand, ZoneId::Burn);
        assert_eq!(board.zone_of(EntityId(1)), Some(ZoneId::Burn));
        assert_eq!(board.card_count(), 2);
        assert_eq!(board.cards_in_play(), 1);
    }

    #[test]
    #[should_panic(expected = "is not in hand")]
    fn test_take_missing_panics() {
        let mut board = Board::new(1);
        board.take(ZoneId::Hand, EntityId(42));
    }

    #[test]
    #[should_panic(expected = "already exists")]
    fn test_put_duplicate_panics() {
        let mut board = Board::new(1);
        board.put(hunter(1), ZoneId::Hand, ZonePosition::Top);
        board.put(hunter(1), ZoneId::Backlog, ZonePosition::Top);
    }

    #[test]
    fn test_move_all_keeps_order() {
        let mut board = Board::new(1);
        board.hand = vec![hunter(1), hunter(2)];
        board.backlog = vec![hunter(3)];

        assert_eq!(board.move_all(ZoneId::Hand, ZoneId::Backlog), 2);
        assert!(board.hand.is_empty());
        assert_eq!(ids(&board.backlog), vec![3, 1, 2]);
    }

    #[test]
    fn test_draw_from_stock_top() {
        let mut rng = GameRng::new(1);
        let mut board = Board::new(1);
        board.stock = vec![hunter(1), hunter(2), hunter(3)];

        let drawn = board.draw(2, &mut rng);
        assert_eq!(ids(&drawn), vec![3, 2]);
        assert_eq!(ids(&board.stock), vec![1]);
    }

    #[test]
    fn test_draw_reshuffles_backlog_underneath() {
        let mut rng = GameRng::new(7);
        let mut board = Board::new(1);
        board.stock = vec![hunter(1)];
        board.backlog = vec![hunter(10), hunter(11), hunter(12), hunter(13)];

        let drawn = board.draw(3, &mut rng);

        // Existing stock card comes off first.
        assert_eq!(drawn[0].id, EntityId(1));
        assert_eq!(drawn.len(), 3);
        assert!(board.backlog.is_empty());
        assert_eq!(board.stock.len(), 2);
    }

    #[test]
    fn test_draw_exhausted_yields_fewer() {
        let mut rng = GameRng::new(3);
        let mut board = Board::new(1);
        board.backlog = vec![hunter(1), hunter(2)];

        let drawn = board.draw(5, &mut rng);
        assert_eq!(drawn.len(), 2);
        assert!(board.draw(5, &mut rng).is_empty());
    }

    #[test]
    fn test_least_filled_slot_ties_lowest() {
        let mut board = Board::new(3);
        assert_eq!(board.least_filled_slot(), 0);

        board.roster[0].push(hunter(1));
        assert_eq!(board.least_filled_slot(), 1);

        board.roster[1].push(hunter(2));
        board.roster[2].push(hunter(3));
        assert_eq!(board.least_filled_slot(), 0);

        assert_eq!(board.place_monster(hunter(4)), 0);
        assert_eq!(board.roster[0].len(), 2);
    }

    #[test]
    fn test_refill_empty_slots() {
        let mut board = Board::new(3);
        board.roster[1].push(hunter(1));
        board.deck = vec![hunter(2)];

        assert_eq!(board.refill_empty_slots_from_deck(), 1);
        assert_eq!(board.top_of(0).map(|c| c.id), Some(EntityId(2)));
        assert!(board.roster[2].is_empty());
    }

    #[test]
    fn test_available_hunter_and_stranded() {
        let mut board = Board::new(2);
        assert!(!board.has_available_hunter());
        assert!(board.is_stranded());

        board.roster[1] = vec![hunter(1), supply(2)];
        assert!(!board.has_available_hunter());

        board.hand.push(hunter(3));
        assert!(board.has_available_hunter());
        assert!(!board.is_stranded());
        assert_eq!(board.hunters_in_hand(), 1);
    }
}
