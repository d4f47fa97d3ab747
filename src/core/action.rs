//! Action kinds and the action history.
//!
//! `ActionKind` names the four player actions (plus the two control steps
//! a host can trigger). Every action that changes the table is recorded as
//! an `ActionRecord` in `GameState::history`, so a host can replay or log
//! what happened.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::entity::EntityId;
use super::side::Side;

/// Entity lists in records. Most actions touch a handful of cards.
pub type EntityList = SmallVec<[EntityId; 4]>;

/// The kinds of action a side can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Hunt,
    Trade,
    Resupply,
    Cull,
    /// Answering a CPU hunt with a Foil decision.
    Foil,
    EndTurn,
}

impl ActionKind {
    /// The four table actions, in display order.
    pub const PLAYER_ACTIONS: [ActionKind; 4] = [
        ActionKind::Hunt,
        ActionKind::Trade,
        ActionKind::Resupply,
        ActionKind::Cull,
    ];
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ActionKind::Hunt => "hunt",
            ActionKind::Trade => "trade",
            ActionKind::Resupply => "resupply",
            ActionKind::Cull => "cull",
            ActionKind::Foil => "foil",
            ActionKind::EndTurn => "end turn",
        };
        f.write_str(name)
    }
}

/// What an action did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    /// A resolved hunt. `tender` is what the hunting side gained.
    Hunt {
        hunters: EntityList,
        target: EntityId,
        target_side: Side,
        success: bool,
        tender: u32,
    },
    Trade {
        hunter: EntityId,
        payment: EntityList,
    },
    Resupply {
        supplies: EntityList,
    },
    Cull {
        card: EntityId,
    },
    /// A human Foil answer: the committed hunters and the attackers stopped.
    Foil {
        committed: EntityList,
        foiled: EntityList,
    },
    EndTurn,
}

impl ActionEvent {
    /// The kind of action this event records.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionEvent::Hunt { .. } => ActionKind::Hunt,
            ActionEvent::Trade { .. } => ActionKind::Trade,
            ActionEvent::Resupply { .. } => ActionKind::Resupply,
            ActionEvent::Cull { .. } => ActionKind::Cull,
            ActionEvent::Foil { .. } => ActionKind::Foil,
            ActionEvent::EndTurn => ActionKind::EndTurn,
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The side that took this action.
    pub side: Side,

    /// Turn number when the action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,

    /// What happened.
    pub event: ActionEvent,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(side: Side, turn: u32, sequence: u32, event: ActionEvent) -> Self {
        Self {
            side,
            turn,
            sequence,
            event,
        }
    }

    #[must_use]
    pub fn kind(&self) -> ActionKind {
        self.event.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_event_kind() {
        let hunt = ActionEvent::Hunt {
            hunters: smallvec![EntityId(1), EntityId(2)],
            target: EntityId(9),
            target_side: Side::Cpu,
            success: true,
            tender: 0,
        };
        assert_eq!(hunt.kind(), ActionKind::Hunt);
        assert_eq!(ActionEvent::EndTurn.kind(), ActionKind::EndTurn);
        assert_eq!(ActionEvent::Cull { card: EntityId(3) }.kind(), ActionKind::Cull);
    }

    #[test]
    fn test_action_record() {
        let record = ActionRecord::new(Side::You, 3, 1, ActionEvent::Cull { card: EntityId(5) });

        assert_eq!(record.side, Side::You);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 1);
        assert_eq!(record.kind(), ActionKind::Cull);
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(
            Side::Cpu,
            2,
            0,
            ActionEvent::Trade {
                hunter: EntityId(4),
                payment: smallvec![EntityId(7), EntityId(8)],
            },
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }

    #[test]
    fn test_action_kind_display() {
        assert_eq!(format!("{}", ActionKind::EndTurn), "end turn");
        assert_eq!(ActionKind::PLAYER_ACTIONS.len(), 4);
    }
}
