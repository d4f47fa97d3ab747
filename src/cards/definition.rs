//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a catalog card:
//! "Marsh Troll" is a Monster with power 5 worth 3 tender, and every copy
//! of it shares that definition.
//!
//! Instance identity (which physical copy, which zone) lives in `Card`.

use serde::{Deserialize, Serialize};

use super::requirements::{Requirements, SupplyKind};

/// Catalog identifier for a card definition.
///
/// Compared case-insensitively when resolving deck lists.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three card types of The Hunt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    /// Attacks monsters, pays for nothing, costs supply to trade for.
    #[serde(alias = "HUNTER", alias = "Hunter")]
    Hunter,
    /// Worth tender when hunted from its owner's roster.
    #[serde(alias = "MONSTER", alias = "Monster")]
    Monster,
    /// Currency for trades.
    #[serde(alias = "SUPPLY", alias = "Supply", alias = "kit", alias = "script", alias = "treacle")]
    Supply,
}

/// Trait carried by hunters that only hunt alongside another of their kind.
pub const REGIMENTED: &str = "regimented";

/// Static card definition.
///
/// ## Example
///
/// ```
/// use hunt_engine::cards::{CardDefinition, CardKind};
///
/// let troll = CardDefinition::monster("troll", "Marsh Troll", 5, 3);
///
/// assert_eq!(troll.kind(), Some(CardKind::Monster));
/// assert_eq!(troll.power(), 5);
/// assert_eq!(troll.tender(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Catalog identifier.
    pub id: CardId,

    /// Display name.
    pub name: String,

    /// Explicit card type, when the catalog provides one.
    #[serde(default, alias = "t")]
    pub kind: Option<CardKind>,

    /// Attack strength (hunters) or strength needed to hunt it (monsters).
    #[serde(default)]
    pub power: Option<u32>,

    /// Reward for hunting (monsters).
    #[serde(default)]
    pub tender: Option<u32>,

    /// Defensive strength (hunters).
    #[serde(default)]
    pub foil: Option<u32>,

    /// Trade cost (hunters).
    #[serde(default, alias = "req")]
    pub requires: Requirements,

    /// Free-form traits such as "regimented". Matched case-insensitively.
    #[serde(default)]
    pub traits: Vec<String>,

    /// What a supply card pays for. Detected from the name when absent.
    #[serde(default, alias = "supplyType", alias = "tag")]
    pub supply_kind: Option<SupplyKind>,
}

impl CardDefinition {
    /// Create a bare definition.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: Option<CardKind>) -> Self {
        Self {
            id: CardId::new(id),
            name: name.into(),
            kind,
            power: None,
            tender: None,
            foil: None,
            requires: Requirements::default(),
            traits: Vec::new(),
            supply_kind: None,
        }
    }

    /// A hunter with the given power.
    pub fn hunter(id: impl Into<String>, name: impl Into<String>, power: u32) -> Self {
        Self::new(id, name, Some(CardKind::Hunter)).with_power(power)
    }

    /// A monster with the given power and tender reward.
    pub fn monster(id: impl Into<String>, name: impl Into<String>, power: u32, tender: u32) -> Self {
        Self::new(id, name, Some(CardKind::Monster))
            .with_power(power)
            .with_tender(tender)
    }

    /// A supply card of the given kind.
    pub fn supply(id: impl Into<String>, name: impl Into<String>, kind: SupplyKind) -> Self {
        Self::new(id, name, Some(CardKind::Supply)).with_supply_kind(kind)
    }

    #[must_use]
    pub fn with_power(mut self, power: u32) -> Self {
        self.power = Some(power);
        self
    }

    #[must_use]
    pub fn with_tender(mut self, tender: u32) -> Self {
        self.tender = Some(tender);
        self
    }

    #[must_use]
    pub fn with_foil(mut self, foil: u32) -> Self {
        self.foil = Some(foil);
        self
    }

    /// Add `count` of `kind` to the trade cost.
    #[must_use]
    pub fn with_requirement(mut self, kind: SupplyKind, count: u32) -> Self {
        self.requires.add(kind, count);
        self
    }

    #[must_use]
    pub fn with_trait(mut self, name: impl Into<String>) -> Self {
        self.traits.push(name.into().to_lowercase());
        self
    }

    #[must_use]
    pub fn with_supply_kind(mut self, kind: SupplyKind) -> Self {
        self.supply_kind = Some(kind);
        self
    }

    /// The card's type.
    ///
    /// A card without an explicit kind that has both power and tender is
    /// taken to be a Monster; anything else without a kind is untyped.
    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        match self.kind {
            Some(kind) => Some(kind),
            None if self.power.is_some() && self.tender.is_some() => Some(CardKind::Monster),
            None => None,
        }
    }

    #[must_use]
    pub fn power(&self) -> u32 {
        self.power.unwrap_or(0)
    }

    #[must_use]
    pub fn tender(&self) -> u32 {
        self.tender.unwrap_or(0)
    }

    #[must_use]
    pub fn foil(&self) -> u32 {
        self.foil.unwrap_or(0)
    }

    /// Does the card carry the named trait?
    #[must_use]
    pub fn has_trait(&self, name: &str) -> bool {
        self.traits.iter().any(|t| t.eq_ignore_ascii_case(name))
    }

    /// What this card pays for when used as supply.
    ///
    /// Falls back to the card name ("Field Kit" pays for Kit) and finally to
    /// a wildcard.
    #[must_use]
    pub fn supply_kind(&self) -> SupplyKind {
        self.supply_kind
            .unwrap_or_else(|| SupplyKind::detect_from_name(&self.name))
    }
}
