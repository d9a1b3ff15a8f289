//! Playing cards and their stable string keys.
//!
//! A card's key is its rank character followed by the first letter of its
//! suit: `"AC"` is the ace of clubs, `"TD"` the ten of diamonds, `"KH"` the
//! king of hearts. Asset loaders use the key to find a card's image, so it
//! must never change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rank characters indexed by card value. Index 0 is unused.
const RANK_CHARS: &[u8; 14] = b"0A23456789TJQK";

/// Card suits, in deck enumeration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in declaration order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Suit name, e.g. `"Hearts"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Hearts => "Hearts",
            Suit::Spades => "Spades",
        }
    }

    /// First letter of the suit name, used in card keys.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Suit::ALL.into_iter().find(|suit| suit.letter() == letter)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A playing card. Immutable once created.
///
/// Values run from 1 (ace) to 13 (king).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    value: u8,
    suit: Suit,
}

impl Card {
    pub const ACE: u8 = 1;
    pub const JACK: u8 = 11;
    pub const QUEEN: u8 = 12;
    pub const KING: u8 = 13;

    /// Create a card, or `None` if `value` is outside `1..=13`.
    #[must_use]
    pub const fn new(value: u8, suit: Suit) -> Option<Self> {
        if value >= Self::ACE && value <= Self::KING {
            Some(Self { value, suit })
        } else {
            None
        }
    }

    /// Face value, 1 (ace) to 13 (king).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Aces and face cards.
    #[must_use]
    pub const fn is_court(self) -> bool {
        self.value == Self::ACE || self.value > 10
    }

    /// Rank character, one of `A23456789TJQK`.
    #[must_use]
    pub const fn rank_char(self) -> char {
        RANK_CHARS[self.value as usize] as char
    }
}

/// Stable identifier for a card, e.g. `"AC"` or `"KH"`.
#[must_use]
pub fn card_key(card: Card) -> String {
    let mut key = String::with_capacity(2);
    key.push(card.rank_char());
    key.push(card.suit().letter());
    key
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank_char(), self.suit.letter())
    }
}

/// Failure to parse a card key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CardKeyError {
    #[error("card key must be two characters, got {0:?}")]
    Length(String),
    #[error("unknown rank {0:?}")]
    Rank(char),
    #[error("unknown suit {0:?}")]
    Suit(char),
}

impl FromStr for Card {
    type Err = CardKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut chars = key.chars();
        let (Some(rank), Some(letter), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardKeyError::Length(key.to_string()));
        };

        let value = RANK_CHARS
            .iter()
            .skip(1)
            .position(|&c| c as char == rank)
            .ok_or(CardKeyError::Rank(rank))?;
        let suit = Suit::from_letter(letter).ok_or(CardKeyError::Suit(letter))?;

        Card::new(value as u8 + 1, suit).ok_or(CardKeyError::Rank(rank))
    }
}
