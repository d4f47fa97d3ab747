//! New-game setup: decks in, dealt boards out.
//!
//! Each side's deck is shuffled, one card goes onto every roster slot,
//! `initial_stock` cards move from the deck to the stock, a hand of
//! `hand_size` is drawn, and any Monster drawn is swept onto the roster.

use std::sync::Arc;

use tracing::info;

use super::controller::HuntGame;
use crate::cards::{Card, CardDefinition, CardRegistry};
use crate::core::{ConfigError, EntityAllocator, GameRng, GameState, HuntConfig, Side, SideMap};
use crate::cpu::Persona;
use crate::zones::Board;

/// Deal one side's opening board from its deck.
pub fn deal_board(mut deck: Vec<Card>, config: &HuntConfig, rng: &mut GameRng) -> Board {
    let mut board = Board::new(config.roster_slots);
    rng.shuffle(&mut deck);
    board.deck = deck;

    for stack in &mut board.roster {
        match board.deck.pop() {
            Some(card) => stack.push(card),
            None => break,
        }
    }

    for _ in 0..config.initial_stock {
        match board.deck.pop() {
            Some(card) => board.stock.push(card),
            None => break,
        }
    }

    let drawn = board.draw(config.hand_size, rng);
    for card in drawn {
        if card.is_monster() {
            board.place_monster(card);
        } else {
            board.hand.push(card);
        }
    }
    board
}

/// Builder for a new game.
///
/// # Example
///
/// ```
/// use hunt_engine::cards::CardDefinition;
/// use hunt_engine::core::Side;
/// use hunt_engine::game::HuntGameBuilder;
///
/// let deck: Vec<_> = (0..20)
///     .map(|i| CardDefinition::hunter(format!("h{}", i), "Tracker", 2))
///     .collect();
///
/// let game = HuntGameBuilder::new()
///     .with_seed(7)
///     .with_deck(Side::You, deck.clone())
///     .with_deck(Side::Cpu, deck)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.state().board(Side::You).hand.len(), 5);
/// ```
#[derive(Clone, Debug, Default)]
pub struct HuntGameBuilder {
    config: HuntConfig,
    seed: Option<u64>,
    ids: EntityAllocator,
    decks: SideMap<Vec<Card>>,
}

impl HuntGameBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: HuntConfig) -> Self {
        self.config = config;
        self
    }

    /// Fix the RNG seed. Without one the game seeds from entropy.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the CPU persona instead of drawing it at random.
    #[must_use]
    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.config.cpu_persona = Some(persona);
        self
    }

    /// Add cards to a side's deck.
    #[must_use]
    pub fn with_deck<D>(mut self, side: Side, cards: impl IntoIterator<Item = D>) -> Self
    where
        D: Into<Arc<CardDefinition>>,
    {
        for def in cards {
            let card = Card::new(self.ids.alloc(), def.into());
            self.decks[side].push(card);
        }
        self
    }

    /// Add cards to a side's deck from a list of ids or names.
    ///
    /// Unknown entries are skipped with a warning.
    #[must_use]
    pub fn with_deck_list<S: AsRef<str>>(mut self, side: Side, registry: &CardRegistry, entries: &[S]) -> Self {
        let mut cards = registry.build_deck(entries, &mut self.ids);
        self.decks[side].append(&mut cards);
        self
    }

    /// Deal both sides and start the game on the human's turn.
    pub fn build(self) -> Result<HuntGame, ConfigError> {
        self.config.validate()?;
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let config = self.config;
        let [you, cpu] = [Side::You, Side::Cpu].map(|side| {
            let deck = self.decks[side].clone();
            deal_board(deck, &config, &mut rng)
        });

        info!(
            seed = rng.seed(),
            you = you.card_count(),
            cpu = cpu.card_count(),
            "new game dealt"
        );
        let state = GameState::new(config, SideMap::new(you, cpu), rng);
        Ok(HuntGame::new(state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SupplyKind;

    fn mixed_deck() -> Vec<CardDefinition> {
        let mut deck = Vec::new();
        for i in 0..10 {
            deck.push(CardDefinition::hunter(format!("h{}", i), "Tracker", 2));
            deck.push(CardDefinition::monster(format!("m{}", i), "Troll", 4, 2));
            deck.push(CardDefinition::supply(format!("s{}", i), "Kit", SupplyKind::Kit));
        }
        deck
    }

    #[test]
    fn test_deal_board_layout() {
        let config = HuntConfig::default();
        let mut rng = GameRng::new(3);
        let mut ids = EntityAllocator::new();
        let deck: Vec<Card> = mixed_deck()
            .into_iter()
            .map(|def| Card::new(ids.alloc(), Arc::new(def)))
            .collect();

        let board = deal_board(deck, &config, &mut rng);

        assert_eq!(board.card_count(), 30);
        assert_eq!(board.deck.len(), 30 - 5 - 10);
        assert_eq!(board.stock.len(), 10 - 5);
        assert!(board.hand.iter().all(|c| !c.is_monster()));
        let on_roster: usize = board.roster.iter().map(Vec::len).sum();
        assert_eq!(on_roster + board.hand.len(), 10);
        assert!(board.roster.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn test_short_deck_deals_what_it_can() {
        let config = HuntConfig::default();
        let deck = vec![Card::new(
            crate::core::EntityId(0),
            Arc::new(CardDefinition::hunter("h", "Tracker", 1)),
        )];

        let board = deal_board(deck, &config, &mut GameRng::new(1));
        assert_eq!(board.card_count(), 1);
        assert_eq!(board.roster[0].len(), 1);
        assert!(board.hand.is_empty());
    }

    #[test]
    fn test_builder_is_deterministic() {
        let build = || {
            HuntGameBuilder::new()
                .with_seed(42)
                .with_persona(Persona::Balanced)
                .with_deck(Side::You, mixed_deck())
                .with_deck(Side::Cpu, mixed_deck())
                .build()
                .unwrap()
        };
        let a = build();
        let b = build();

        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.state().persona, Some(Persona::Balanced));
        assert_eq!(a.state().total_cards(), 60);
    }

    #[test]
    fn test_builder_rejects_bad_config() {
        let result = HuntGameBuilder::new()
            .with_config(HuntConfig::default().with_hand_size(0))
            .build();
        assert!(matches!(result, Err(ConfigError::ZeroHandSize)));
    }

    #[test]
    fn test_deck_list_skips_unknown() {
        let registry = CardRegistry::from_definitions(mixed_deck());
        let game = HuntGameBuilder::new()
            .with_seed(1)
            .with_deck_list(Side::You, &registry, &["h0", "Troll", "nope"])
            .with_deck_list(Side::Cpu, &registry, &["s1"])
            .build()
            .unwrap();

        assert_eq!(game.state().board(Side::You).card_count(), 2);
        assert_eq!(game.state().board(Side::Cpu).card_count(), 1);
    }
}
