//! Errors returned by the action executors and the lifecycle.
//!
//! Every `ActionError` is a rejected request: the state is left exactly as
//! it was. `Display` gives the reason a host shows the player.

use thiserror::Error;

/// Why an action was refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Wait for your turn.")]
    NotYourTurn,

    #[error("The hunt is over.")]
    GameOver,

    #[error("Answer the CPU hunt first: Foil or pass.")]
    InterruptPending,

    /// The selection or order does not describe a legal action.
    #[error("{0}")]
    InvalidSelection(String),

    #[error("Regimented hunters will only hunt with another regimented ally.")]
    RegimentedAlone,

    #[error("Hunters total P{have} is less than {target} (P{need}).")]
    InsufficientPower { have: u32, need: u32, target: String },

    #[error("Selected Supply does not meet this Hunter\u{2019}s requirements.")]
    PaymentUnmet,

    #[error("You can only Cull once per turn.")]
    CullAlreadyUsed,
}

impl ActionError {
    /// Shorthand for `InvalidSelection`.
    pub fn invalid(reason: impl Into<String>) -> Self {
        ActionError::InvalidSelection(reason.into())
    }
}

/// Result alias for executor calls.
pub type ActionResult<T = ()> = Result<T, ActionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_text() {
        let err = ActionError::InsufficientPower {
            have: 4,
            need: 5,
            target: "Marsh Troll".to_string(),
        };
        assert_eq!(err.to_string(), "Hunters total P4 is less than Marsh Troll (P5).");
        assert_eq!(ActionError::NotYourTurn.to_string(), "Wait for your turn.");
        assert_eq!(ActionError::invalid("Pick one.").to_string(), "Pick one.");
    }
}
