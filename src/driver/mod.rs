//! Drivers that sit between the engine and its callers.
//!
//! - `Session`: owns one game and issues the follow-up actions the engine
//!   only signals (next day after `DayEnd`, `EndDay` once action points run out)
//! - `Policy`, `RandomPolicy`, `GreedyPolicy`, `play_out`: automated play

mod policy;
mod session;

pub use policy::{play_out, GreedyPolicy, Policy, RandomPolicy};
pub use session::Session;
