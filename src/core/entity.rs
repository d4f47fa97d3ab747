//! Card instance identification.
//!
//! Every physical card in a game has a unique `EntityId`. Two copies of the
//! same catalog card ("Marsh Troll" twice in a deck) share a definition but
//! never an `EntityId`, which is what lets zone moves be checked for
//! exclusive ownership.
//!
//! ## Usage
//!
//! ```
//! use hunt_engine::core::{EntityAllocator, EntityId};
//!
//! let mut ids = EntityAllocator::new();
//! let first = ids.alloc();
//! let second = ids.alloc();
//!
//! assert_eq!(first, EntityId(0));
//! assert_ne!(first, second);
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EntityId(pub u32);

impl EntityId {
    /// Create an entity ID from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out fresh entity IDs.
///
/// One allocator is shared by both sides during setup so IDs stay unique
/// across the whole game.
#[derive(Clone, Debug, Default)]
pub struct EntityAllocator {
    next: u32,
}

impl EntityAllocator {
    /// Create an allocator starting at `EntityId(0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator starting at a specific raw ID.
    #[must_use]
    pub fn starting_at(next: u32) -> Self {
        Self { next }
    }

    /// Allocate the next entity ID.
    pub fn alloc(&mut self) -> EntityId {
        let id = EntityId(self.next);
        self.next += 1;
        id
    }

    /// Number of IDs handed out so far (when started at zero).
    #[must_use]
    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_id_display() {
        assert_eq!(format!("{}", EntityId(7)), "#7");
        assert_eq!(EntityId::new(3).raw(), 3);
    }

    #[test]
    fn test_allocator_sequence() {
        let mut ids = EntityAllocator::new();
        let a = ids.alloc();
        let b = ids.alloc();
        let c = ids.alloc();

        assert_eq!((a, b, c), (EntityId(0), EntityId(1), EntityId(2)));
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_allocator_starting_at() {
        let mut ids = EntityAllocator::starting_at(100);
        assert_eq!(ids.alloc(), EntityId(100));
    }

    #[test]
    fn test_entity_id_ordering() {
        let mut v = vec![EntityId(3), EntityId(1), EntityId(2)];
        v.sort();
        assert_eq!(v, vec![EntityId(1), EntityId(2), EntityId(3)]);
    }
}
