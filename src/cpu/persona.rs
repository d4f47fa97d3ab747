//! CPU personas.
//!
//! A persona fixes the order in which the CPU tries its four planners. It
//! is chosen once per game, uniformly at random the first time it is
//! needed (or pinned by `HuntConfig::cpu_persona`), and never changes.

use serde::{Deserialize, Serialize};

use crate::core::{ActionKind, GameRng};

/// CPU behaviour profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Persona {
    /// Hunts first.
    Offensive,
    /// Builds up supply before it risks hunters.
    Defensive,
    /// Trades first, then hunts.
    Balanced,
}

impl Persona {
    pub const ALL: [Persona; 3] = [Persona::Offensive, Persona::Defensive, Persona::Balanced];

    /// Planner order for this persona.
    ///
    /// ```
    /// use hunt_engine::core::ActionKind;
    /// use hunt_engine::cpu::Persona;
    ///
    /// assert_eq!(Persona::Offensive.priority()[0], ActionKind::Hunt);
    /// assert_eq!(Persona::Defensive.priority()[3], ActionKind::Hunt);
    /// ```
    #[must_use]
    pub const fn priority(self) -> [ActionKind; 4] {
        match self {
            Persona::Offensive => [
                ActionKind::Hunt,
                ActionKind::Trade,
                ActionKind::Resupply,
                ActionKind::Cull,
            ],
            Persona::Defensive => [
                ActionKind::Resupply,
                ActionKind::Trade,
                ActionKind::Cull,
                ActionKind::Hunt,
            ],
            Persona::Balanced => [
                ActionKind::Trade,
                ActionKind::Hunt,
                ActionKind::Resupply,
                ActionKind::Cull,
            ],
        }
    }

    /// Pick a persona uniformly at random.
    pub fn random(rng: &mut GameRng) -> Self {
        Self::ALL[rng.gen_range_usize(0..Self::ALL.len())]
    }
}

impl std::fmt::Display for Persona {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Persona::Offensive => write!(f, "offensive"),
            Persona::Defensive => write!(f, "defensive"),
            Persona::Balanced => write!(f, "balanced"),
        }
    }
}
