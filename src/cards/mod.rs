//! Cards and the deck.
//!
//! - `Card`: value and suit, with a stable string key for asset lookup
//! - `generate_deck`: the 52-card universe in a fixed order
//! - `shuffle`: uniform in-place permutation driven by `GameRng`

mod card;
mod deck;

pub use card::{card_key, Card, CardKeyError, Suit};
pub use deck::{generate_deck, shuffle, DECK_SIZE, HAND_SIZE};
