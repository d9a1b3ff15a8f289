//! The rules engine.
//!
//! - `resources`: per-card resource deltas and affordability checks
//! - `event`: what `apply` reports back
//! - `engine`: game setup, the action state machine, and legal actions
//!
//! `get_delta` and `get_lacks` never mutate state and are safe to call for
//! previews. Every state change goes through `apply`.

pub mod engine;
pub mod event;
pub mod resources;

pub use engine::{apply, legal_actions, new_game, new_game_state, new_game_state_with, new_random_game, SetupError};
pub use event::{Event, InvalidAction};
pub use resources::{card_delta, get_delta, get_lacks, Lacks, Resources};
