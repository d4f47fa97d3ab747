//! Side identification and per-side data storage.
//!
//! ## Side
//!
//! The Hunt is always a duel: the human-controlled `You` side against the
//! computer-controlled `Cpu` side.
//!
//! ## SideMap
//!
//! Fixed two-entry storage indexed by `Side`, used for boards and any other
//! per-side data.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of the duel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human-controlled side.
    You,
    /// The computer-controlled side.
    Cpu,
}

impl Side {
    /// Both sides, human first.
    pub const ALL: [Side; 2] = [Side::You, Side::Cpu];

    /// The other side.
    ///
    /// ```
    /// use hunt_engine::core::Side;
    ///
    /// assert_eq!(Side::You.opponent(), Side::Cpu);
    /// assert_eq!(Side::Cpu.opponent(), Side::You);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::You => Side::Cpu,
            Side::Cpu => Side::You,
        }
    }

    /// Is this the human side?
    #[must_use]
    pub const fn is_human(self) -> bool {
        matches!(self, Side::You)
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::You => write!(f, "you"),
            Side::Cpu => write!(f, "cpu"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use hunt_engine::core::{Side, SideMap};
///
/// let mut tender: SideMap<u32> = SideMap::with_value(0);
/// tender[Side::Cpu] += 4;
///
/// assert_eq!(tender[Side::You], 0);
/// assert_eq!(tender[Side::Cpu], 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    you: T,
    cpu: T,
}

impl<T> SideMap<T> {
    /// Create a map with explicit values for each side.
    pub fn new(you: T, cpu: T) -> Self {
        Self { you, cpu }
    }

    /// Create a map with values from a factory function.
    pub fn from_fn(mut factory: impl FnMut(Side) -> T) -> Self {
        Self {
            you: factory(Side::You),
            cpu: factory(Side::Cpu),
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            you: value.clone(),
            cpu: value,
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        match side {
            Side::You => &self.you,
            Side::Cpu => &self.cpu,
        }
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::You => &mut self.you,
            Side::Cpu => &mut self.cpu,
        }
    }

    /// Mutable references to both entries at once, `(side, opponent)`.
    pub fn pair_mut(&mut self, side: Side) -> (&mut T, &mut T) {
        match side {
            Side::You => (&mut self.you, &mut self.cpu),
            Side::Cpu => (&mut self.cpu, &mut self.you),
        }
    }

    /// Iterate over `(Side, &T)` pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::You, &self.you), (Side::Cpu, &self.cpu)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
