//! Rules configuration.
//!
//! The default configuration is the standard game: 3 energy, 8 money,
//! 5 action points per day, 13 days, and a daily upkeep of 4 money and
//! 1 energy. Presentation layers may load variants from any serde format;
//! missing fields fall back to the standard values.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::{DECK_SIZE, HAND_SIZE};

/// Tunable numbers of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Energy at the start of the game.
    pub starting_energy: i32,

    /// Money at the start of the game.
    pub starting_money: i32,

    /// Action points granted at the beginning of every day.
    pub action_points_per_day: i32,

    /// Number of days; ending the last day without going broke wins.
    pub days: u32,

    /// Money deducted at the end of every day.
    pub daily_money_upkeep: i32,

    /// Energy deducted at the end of every day.
    pub daily_energy_upkeep: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_energy: 3,
            starting_money: 8,
            action_points_per_day: 5,
            days: 13,
            daily_money_upkeep: 4,
            daily_energy_upkeep: 1,
        }
    }
}

impl RulesConfig {
    /// Cards the draw pile must hold to deal every day of the game.
    #[must_use]
    pub fn cards_needed(&self) -> usize {
        self.days as usize * HAND_SIZE
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.days == 0 {
            return Err(ConfigError::NoDays);
        }
        if self.cards_needed() > DECK_SIZE {
            return Err(ConfigError::TooManyDays {
                days: self.days,
                max: (DECK_SIZE / HAND_SIZE) as u32,
            });
        }
        if self.action_points_per_day <= 0 {
            return Err(ConfigError::NoActionPoints);
        }

        let non_negative = [
            ("starting_energy", self.starting_energy),
            ("starting_money", self.starting_money),
            ("daily_money_upkeep", self.daily_money_upkeep),
            ("daily_energy_upkeep", self.daily_energy_upkeep),
        ];
        for (field, value) in non_negative {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }

        Ok(())
    }
}

/// Reasons a [`RulesConfig`] is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a game needs at least one day")]
    NoDays,
    #[error("{days} days need more cards than the deck holds (at most {max} days)")]
    TooManyDays { days: u32, max: u32 },
    #[error("action points per day must be positive")]
    NoActionPoints,
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i32 },
}
