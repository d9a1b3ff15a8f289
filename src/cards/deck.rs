//! The 52-card deck and shuffling.

use crate::core::GameRng;

use super::card::{Card, Suit};

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards dealt into the hand each day.
pub const HAND_SIZE: usize = 4;

/// Build the full deck in a fixed order: values 1..=13 outer, suits inner.
///
/// ```
/// use carpe_diem::cards::{card_key, generate_deck};
///
/// let deck = generate_deck();
/// assert_eq!(deck.len(), 52);
/// assert_eq!(card_key(deck[0]), "AC");
/// assert_eq!(card_key(deck[51]), "KS");
/// ```
#[must_use]
pub fn generate_deck() -> Vec<Card> {
    (Card::ACE..=Card::KING)
        .flat_map(|value| Suit::ALL.into_iter().filter_map(move |suit| Card::new(value, suit)))
        .collect()
}

/// Uniformly permute `items` in place.
///
/// Delegates to `rand`'s Fisher–Yates shuffle, so the same `rng` state always
/// yields the same order.
pub fn shuffle<T>(items: &mut [T], rng: &mut GameRng) {
    rng.shuffle(items);
}
