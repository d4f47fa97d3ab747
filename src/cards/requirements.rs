//! Supply kinds and hunter trade costs.
//!
//! A hunter's cost is a count per `SupplyKind`. The three specific kinds are
//! paid with matching supply; the `Any` requirement is paid with whatever
//! supply is left over.
//!
//! Catalogs may write a cost either as a map (`{"kit": 1, "any": 2}`) or as a
//! list of kinds (`["kit", "any", "any"]`); both deserialize to the same
//! `Requirements`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// What a supply card pays for, and the keys of a hunter's cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplyKind {
    Kit,
    Script,
    Treacle,
    /// Wildcard supply, or the "any supply" part of a cost.
    Any,
}

impl SupplyKind {
    /// Specific kinds in payment order.
    pub const SPECIFIC: [SupplyKind; 3] = [SupplyKind::Kit, SupplyKind::Script, SupplyKind::Treacle];

    const ALL: [SupplyKind; 4] = [
        SupplyKind::Kit,
        SupplyKind::Script,
        SupplyKind::Treacle,
        SupplyKind::Any,
    ];

    const fn index(self) -> usize {
        match self {
            SupplyKind::Kit => 0,
            SupplyKind::Script => 1,
            SupplyKind::Treacle => 2,
            SupplyKind::Any => 3,
        }
    }

    /// Infer a supply kind from a card name.
    ///
    /// ```
    /// use hunt_engine::cards::SupplyKind;
    ///
    /// assert_eq!(SupplyKind::detect_from_name("Treacle Jar"), SupplyKind::Treacle);
    /// assert_eq!(SupplyKind::detect_from_name("Old Coin"), SupplyKind::Any);
    /// ```
    #[must_use]
    pub fn detect_from_name(name: &str) -> Self {
        let lower = name.to_lowercase();
        Self::SPECIFIC
            .into_iter()
            .find(|kind| lower.contains(kind.label()))
            .unwrap_or(SupplyKind::Any)
    }

    /// Lowercase label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            SupplyKind::Kit => "kit",
            SupplyKind::Script => "script",
            SupplyKind::Treacle => "treacle",
            SupplyKind::Any => "any",
        }
    }
}

impl std::fmt::Display for SupplyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A hunter's trade cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RequirementsRepr", into = "BTreeMap<SupplyKind, u32>")]
pub struct Requirements {
    counts: [u32; 4],
}

impl Requirements {
    /// An empty cost.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `add`.
    #[must_use]
    pub fn with(mut self, kind: SupplyKind, count: u32) -> Self {
        self.add(kind, count);
        self
    }

    /// Add `count` of `kind` to the cost.
    pub fn add(&mut self, kind: SupplyKind, count: u32) {
        self.counts[kind.index()] += count;
    }

    /// Required count for one kind.
    #[must_use]
    pub fn get(&self, kind: SupplyKind) -> u32 {
        self.counts[kind.index()]
    }

    /// Total cards a payment must contain.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn is_free(&self) -> bool {
        self.total() == 0
    }

    /// Non-zero `(kind, count)` entries, specific kinds first.
    pub fn iter(&self) -> impl Iterator<Item = (SupplyKind, u32)> + '_ {
        SupplyKind::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind)))
            .filter(|(_, count)| *count > 0)
    }
}

impl std::fmt::Display for Requirements {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_free() {
            return write!(f, "free");
        }
        let parts: Vec<String> = self.iter().map(|(k, n)| format!("{}x{}", n, k)).collect();
        write!(f, "{}", parts.join(" + "))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RequirementsRepr {
    Counts(BTreeMap<SupplyKind, u32>),
    List(Vec<SupplyKind>),
}

impl From<RequirementsRepr> for Requirements {
    fn from(repr: RequirementsRepr) -> Self {
        let mut req = Requirements::new();
        match repr {
            RequirementsRepr::Counts(map) => {
                for (kind, count) in map {
                    req.add(kind, count);
                }
            }
            RequirementsRepr::List(kinds) => {
                for kind in kinds {
                    req.add(kind, 1);
                }
            }
        }
        req
    }
}

impl From<Requirements> for BTreeMap<SupplyKind, u32> {
    fn from(req: Requirements) -> Self {
        req.iter().collect()
    }
}
