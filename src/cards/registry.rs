//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores the card catalog for a game and turns deck lists
//! (catalog ids or card names) into card instances. Lookup is
//! case-insensitive on both id and name.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::warn;

use super::definition::{CardDefinition, CardId};
use super::instance::Card;
use crate::core::entity::EntityAllocator;

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use hunt_engine::cards::{CardDefinition, CardRegistry};
/// use hunt_engine::core::EntityAllocator;
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::monster("troll", "Marsh Troll", 5, 3));
///
/// assert!(registry.get("TROLL").is_some());
/// assert!(registry.get("marsh troll").is_some());
///
/// let mut ids = EntityAllocator::new();
/// let deck = registry.build_deck(&["troll", "Marsh Troll", "nope"], &mut ids);
/// assert_eq!(deck.len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<String, Arc<CardDefinition>>,
    by_name: FxHashMap<String, String>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a catalog.
    ///
    /// Panics on duplicate ids, like `register`.
    pub fn from_definitions(defs: impl IntoIterator<Item = CardDefinition>) -> Self {
        let mut registry = Self::new();
        for def in defs {
            registry.register(def);
        }
        registry
    }

    /// Register a card definition.
    ///
    /// Panics if a card with the same ID (ignoring case) already exists.
    pub fn register(&mut self, card: CardDefinition) {
        let key = card.id.as_str().to_lowercase();
        if self.cards.contains_key(&key) {
            panic!("Card with ID {:?} already registered", card.id);
        }
        // First registration wins for duplicate names.
        self.by_name
            .entry(card.name.to_lowercase())
            .or_insert_with(|| key.clone());
        self.cards.insert(key, Arc::new(card));
    }

    /// Look up a definition by id or name, ignoring case.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Arc<CardDefinition>> {
        let lower = key.trim().to_lowercase();
        self.cards.get(&lower).or_else(|| {
            self.by_name
                .get(&lower)
                .and_then(|id| self.cards.get(id))
        })
    }

    /// Look up by catalog id.
    #[must_use]
    pub fn get_by_id(&self, id: &CardId) -> Option<&Arc<CardDefinition>> {
        self.cards.get(&id.as_str().to_lowercase())
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<CardDefinition>> {
        self.cards.values()
    }

    /// Build card instances for a deck list, in list order.
    ///
    /// Entries that match nothing in the catalog are skipped with a warning.
    pub fn build_deck<S: AsRef<str>>(&self, entries: &[S], ids: &mut EntityAllocator) -> Vec<Card> {
        let mut deck = Vec::with_capacity(entries.len());
        for entry in entries {
            let entry = entry.as_ref();
            match self.get(entry) {
                Some(def) => deck.push(Card::new(ids.alloc(), Arc::clone(def))),
                None => warn!(entry, "unknown card in deck list, skipping"),
            }
        }
        deck
    }
}
