//! # carpe-diem
//!
//! Rules engine for Carpe Diem, a single-player resource-management card game.
//! Each day the player is dealt four cards from a shuffled 52-card deck and
//! spends action points on them to earn money, energy and victory points.
//! Thirteen days exhaust the deck; survive every day's upkeep to win.
//!
//! ## Design Principles
//!
//! 1. **One Entry Point**: every state change goes through [`rules::apply`],
//!    which returns exactly one [`rules::Event`].
//!
//! 2. **Rejections Are Data**: unaffordable or out-of-contract actions come
//!    back as events and leave the state untouched. The engine never panics on
//!    player input.
//!
//! 3. **Synchronous Core**: the engine never re-enters itself. Day transitions
//!    and end-of-day scheduling live in [`driver::Session`].
//!
//! ## Modules
//!
//! - `core`: RNG, rules configuration, actions, game state
//! - `cards`: cards, card keys, deck generation and shuffling
//! - `rules`: resource deltas, affordability, events, the state machine
//! - `driver`: game sessions and automated play
//!
//! ```
//! use carpe_diem::{Action, Event, Session};
//!
//! let mut session = Session::new(42);
//! let events = session.submit(Action::EndDay);
//! assert_eq!(events[0], Event::DayEnd);
//! assert_eq!(session.state().day, 2);
//! ```

pub mod core;
pub mod cards;
pub mod rules;
pub mod driver;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord,
    ConfigError, RulesConfig,
    GameOutcome, GameRng, GameState,
};

pub use crate::cards::{card_key, generate_deck, shuffle, Card, CardKeyError, Suit};

pub use crate::rules::{
    apply, get_delta, get_lacks, legal_actions,
    new_game, new_game_state, new_game_state_with, new_random_game,
    Event, InvalidAction, Lacks, Resources, SetupError,
};

pub use crate::driver::{play_out, GreedyPolicy, Policy, RandomPolicy, Session};
