//! Host notifications: an observer list and an outbox.

pub mod notifier;

pub use notifier::{Notification, Notifier, Observer};
