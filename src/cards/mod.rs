//! Card system: definitions, instances, costs, and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Catalog identifier for card definitions
//! - `CardDefinition`: Static card data (kind, power, tender, foil, cost, traits)
//! - `Requirements` / `SupplyKind`: Hunter trade costs and what supply pays for
//! - `Card`: One physical copy with a unique `EntityId`
//! - `CardRegistry`: Case-insensitive catalog and deck-list resolution

pub mod definition;
pub mod instance;
pub mod registry;
pub mod requirements;

pub use definition::{CardDefinition, CardId, CardKind, REGIMENTED};
pub use instance::Card;
pub use registry::CardRegistry;
pub use requirements::{Requirements, SupplyKind};
