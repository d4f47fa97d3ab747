//! The CPU opponent.
//!
//! - `persona`: the sticky behaviour profile that orders the planners
//! - `planner`: one decision procedure per action kind
//! - `foil`: the interrupt a CPU hunt raises and its resolution
//! - `driver`: the turn state machine tying them together

pub mod driver;
pub mod foil;
pub mod persona;
pub mod planner;

pub use driver::{CpuDriver, CpuPhase, CpuTurnStatus};
pub use foil::{compute_foil, resolve_foil, FoilResolution, FoilResult, InterruptKind, PendingInterrupt};
pub use persona::Persona;
pub use planner::{
    planner_for, CullPlanner, HuntPlan, HuntPlanner, PlanOutcome, Planner, ResupplyPlanner, TradePlanner,
};
