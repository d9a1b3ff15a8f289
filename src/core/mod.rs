//! Core engine types: RNG, configuration, actions, state.

pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use rng::GameRng;
pub use config::{ConfigError, RulesConfig};
pub use action::{Action, ActionRecord};
pub use state::{GameOutcome, GameState};
