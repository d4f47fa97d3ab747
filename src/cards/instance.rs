//! Card instances.
//!
//! A `Card` is one physical copy: a unique `EntityId` plus a shared,
//! immutable `CardDefinition`. Cards are moved between zones by value and
//! never cloned into a second zone.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardKind, REGIMENTED};
use super::requirements::{Requirements, SupplyKind};
use crate::core::entity::EntityId;

/// A card instance in a game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Unique entity ID for this copy.
    pub id: EntityId,

    /// Shared definition.
    pub def: Arc<CardDefinition>,
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Card {}

impl std::hash::Hash for Card {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl Card {
    /// Create a card instance.
    pub fn new(id: EntityId, def: Arc<CardDefinition>) -> Self {
        Self { id, def }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.def.name
    }

    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        self.def.kind()
    }

    #[must_use]
    pub fn is_hunter(&self) -> bool {
        self.kind() == Some(CardKind::Hunter)
    }

    #[must_use]
    pub fn is_monster(&self) -> bool {
        self.kind() == Some(CardKind::Monster)
    }

    #[must_use]
    pub fn is_supply(&self) -> bool {
        self.kind() == Some(CardKind::Supply)
    }

    #[must_use]
    pub fn power(&self) -> u32 {
        self.def.power()
    }

    #[must_use]
    pub fn tender(&self) -> u32 {
        self.def.tender()
    }

    #[must_use]
    pub fn foil(&self) -> u32 {
        self.def.foil()
    }

    #[must_use]
    pub fn requires(&self) -> &Requirements {
        &self.def.requires
    }

    #[must_use]
    pub fn supply_kind(&self) -> SupplyKind {
        self.def.supply_kind()
    }

    #[must_use]
    pub fn is_regimented(&self) -> bool {
        self.def.has_trait(REGIMENTED)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.def.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, def: CardDefinition) -> Card {
        Card::new(EntityId(id), Arc::new(def))
    }

    #[test]
    fn test_kind_predicates() {
        let hunter = card(1, CardDefinition::hunter("h", "Tracker", 3));
        let monster = card(2, CardDefinition::monster("m", "Troll", 5, 3));
        let supply = card(3, CardDefinition::supply("s", "Kit", SupplyKind::Kit));

        assert!(hunter.is_hunter() && !hunter.is_monster());
        assert!(monster.is_monster() && !monster.is_supply());
        assert!(supply.is_supply() && !supply.is_hunter());
        assert_eq!(monster.tender(), 3);
        assert_eq!(supply.supply_kind(), SupplyKind::Kit);
    }

    #[test]
    fn test_identity_is_entity_id() {
        let def = Arc::new(CardDefinition::hunter("h", "Tracker", 3));
        let a = Card::new(EntityId(1), def.clone());
        let b = Card::new(EntityId(2), def.clone());
        let a_again = Card::new(EntityId(1), def);

        assert_ne!(a, b);
        assert_eq!(a, a_again);
    }

    #[test]
    fn test_regimented_and_display() {
        let pike = card(9, CardDefinition::hunter("p", "Pikeman", 2).with_trait("regimented"));
        assert!(pike.is_regimented());
        assert_eq!(format!("{}", pike), "Pikeman #9");
    }
}
