//! Outcome events returned by the rules engine.
//!
//! Every call to [`crate::rules::apply`] returns exactly one `Event`. Rejections
//! (`CardAlreadyUsed`, `NotEnoughResources`, `InvalidAction`) leave the state
//! untouched; `Win` and `Lose` end the game.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::resources::Lacks;
use crate::core::GameOutcome;

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A card was played.
    UseCard,
    /// The card's slot was already played today.
    CardAlreadyUsed,
    /// The action would drive the flagged resources below zero.
    NotEnoughResources { lacks: Lacks },
    /// One action point became one money.
    Freelance,
    /// One action point became one energy.
    Recuperate,
    /// A new hand was dealt. `energy_loss` is 1 if the upkeep check took energy.
    DayStart {
        #[serde(rename = "energyLoss")]
        energy_loss: i32,
    },
    /// The day closed and the game goes on.
    DayEnd,
    /// The last day closed with money and energy to spare.
    Win { score: i32 },
    /// Money or energy ran out at the end of a day.
    Lose,
    /// The action was outside the engine's contract.
    InvalidAction { reason: InvalidAction },
}

impl Event {
    /// The action was refused and nothing changed.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        match self {
            Event::CardAlreadyUsed | Event::NotEnoughResources { .. } | Event::InvalidAction { .. } => true,
            Event::UseCard
            | Event::Freelance
            | Event::Recuperate
            | Event::DayStart { .. }
            | Event::DayEnd
            | Event::Win { .. }
            | Event::Lose => false,
        }
    }

    /// How the game ended, if this event ended it.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        match *self {
            Event::Win { score } => Some(GameOutcome::Won { score }),
            Event::Lose => Some(GameOutcome::Lost),
            Event::UseCard
            | Event::CardAlreadyUsed
            | Event::NotEnoughResources { .. }
            | Event::Freelance
            | Event::Recuperate
            | Event::DayStart { .. }
            | Event::DayEnd
            | Event::InvalidAction { .. } => None,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
}

/// Why an action was outside the engine's contract.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidAction {
    #[error("the game has already ended")]
    GameEnded,
    #[error("hand slot {index} does not exist")]
    CardIndexOutOfRange { index: usize },
    #[error("there is no day left to deal")]
    NoDaysLeft,
}
