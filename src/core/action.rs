//! Player actions.
//!
//! Every state change flows through [`crate::rules::apply`] with one of these.
//! The serialized form is tagged by `type`, e.g. `{"type":"UseCard","index":2}`,
//! so a presentation layer can submit actions as plain JSON.

use serde::{Deserialize, Serialize};

/// An action submitted to the rules engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    /// Play the card in hand slot `index` (0-based). Slot `i` costs `i + 1`
    /// action points.
    UseCard { index: usize },
    /// Spend one action point for one money.
    Freelance,
    /// Spend one action point for one energy.
    Recuperate,
    /// Pay the daily upkeep and close the day.
    EndDay,
    /// Deal the next day's hand.
    BeginNextDay,
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: Action,

    /// Day on which the action was submitted.
    pub day: u32,

    /// Position in the session's history (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: Action, day: u32, sequence: u32) -> Self {
        Self { action, day, sequence }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serialization() {
        let json = serde_json::to_string(&Action::UseCard { index: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"UseCard","index":2}"#);

        let freelance: Action = serde_json::from_str(r#"{"type":"Freelance"}"#).unwrap();
        assert_eq!(freelance, Action::Freelance);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Action::Recuperate, 3, 7);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
