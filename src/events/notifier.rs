//! Notifications to the host.
//!
//! The engine never renders anything. After each state change it emits a
//! `Notification`; hosts either register an `Observer` (any
//! `FnMut(&Notification)` works) or drain the outbox after each call.

use serde::{Deserialize, Serialize};

use crate::core::ActionKind;
use crate::cpu::PendingInterrupt;
use crate::rules::Victory;

/// Something the host may want to react to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Cards moved, tender changed, or the turn passed.
    StateChanged,
    /// The human's selection changed.
    SelectionChanged,
    /// The game ended. Emitted exactly once.
    GameOver { victory: Victory },
    /// A CPU hunt is waiting for the human's Foil decision.
    FoilInterruptPending(PendingInterrupt),
    /// A request was refused; the state is unchanged.
    ActionRejected { action: ActionKind, reason: String },
}

/// Receives notifications as they are emitted.
pub trait Observer {
    fn notify(&mut self, notification: &Notification);
}

impl<F> Observer for F
where
    F: FnMut(&Notification),
{
    fn notify(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// Observer list plus an outbox of everything emitted since the last drain.
#[derive(Default)]
pub struct Notifier {
    observers: Vec<Box<dyn Observer>>,
    outbox: Vec<Notification>,
}

impl Notifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer. Observers are called in registration order.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Deliver a notification to every observer and queue it in the outbox.
    pub fn emit(&mut self, notification: Notification) {
        for observer in &mut self.observers {
            observer.notify(&notification);
        }
        self.outbox.push(notification);
    }

    /// Take everything emitted since the last drain.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.outbox)
    }

    /// Notifications waiting in the outbox.
    #[must_use]
    pub fn pending(&self) -> &[Notification] {
        &self.outbox
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("observers", &self.observers.len())
            .field("outbox", &self.outbox)
            .finish()
    }
}
