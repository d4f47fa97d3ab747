//! The rules of The Hunt that do not move cards.
//!
//! - `selection`: The human's selection and the orders built from it
//! - `hints`: Which actions a selection enables, with reasons
//! - `payment`: Which supply cards pay a hunter's trade cost
//! - `win`: Tender, endurance and stranding victories
//!
//! Everything here reads the state; the executors in `actions` and the
//! lifecycle in `turn` do the moving.

pub mod hints;
pub mod payment;
pub mod selection;
pub mod win;

pub use hints::{compute_action_hints, ActionHints};
pub use payment::{try_build_payment, Payment};
pub use selection::{
    cull_card_from_selection, hunt_order_from_selection, resolve_hunt_target,
    resupply_slots_from_selection, trade_order_from_selection, HuntOrder, Selection, TargetRef,
    TradeOrder,
};
pub use win::{check_winner, declare_winner, evaluate_winner, Victory, WinReason};
