//! Resource deltas and affordability.
//!
//! Playing the card in hand slot `i` changes resources by:
//!
//! | resource       | delta                                                   |
//! |----------------|---------------------------------------------------------|
//! | action points  | `-(i + 1)`                                              |
//! | energy         | Clubs `+1`, Diamonds `0`, Hearts `-1`, Spades `-3`      |
//! | money          | `-5` for aces and face cards, otherwise `+value`        |
//! | victory points | Ace `50`, Jack `10`, Queen `20`, King `30`, otherwise 0 |
//!
//! The delta depends only on the card and its slot, never on current resources,
//! so presentation code can preview it as often as it likes.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit, HAND_SIZE};
use crate::core::GameState;

/// Money paid to play an ace or a face card.
const COURT_CARD_COST: i32 = 5;

/// A bundle of the four game resources, used both for totals and for deltas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resources {
    pub action_points: i32,
    pub energy: i32,
    pub money: i32,
    pub victory_points: i32,
}

/// Which resources an action would drive below zero.
///
/// Victory points are never gated, so they have no flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lacks {
    pub action_points: bool,
    pub energy: bool,
    pub money: bool,
}

impl Lacks {
    /// Only action points are short.
    pub const ACTION_POINTS: Lacks = Lacks {
        action_points: true,
        energy: false,
        money: false,
    };

    /// At least one flag is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.action_points || self.energy || self.money
    }
}

/// Energy gained (or lost) by playing a card of `suit`.
#[must_use]
pub const fn suit_energy(suit: Suit) -> i32 {
    match suit {
        Suit::Clubs => 1,
        Suit::Diamonds => 0,
        Suit::Hearts => -1,
        Suit::Spades => -3,
    }
}

/// Money earned (or paid) by playing `card`.
#[must_use]
pub const fn card_money(card: Card) -> i32 {
    if card.is_court() {
        -COURT_CARD_COST
    } else {
        card.value() as i32
    }
}

/// Victory points awarded for playing `card`.
#[must_use]
pub const fn card_victory_points(card: Card) -> i32 {
    match card.value() {
        Card::ACE => 50,
        Card::JACK => 10,
        Card::QUEEN => 20,
        Card::KING => 30,
        _ => 0,
    }
}

/// Resource delta of playing `card` from hand slot `index`.
///
/// Returns `None` for slots past the end of a hand.
#[must_use]
pub fn card_delta(card: Card, index: usize) -> Option<Resources> {
    if index >= HAND_SIZE {
        return None;
    }

    Some(Resources {
        action_points: -(index as i32 + 1),
        energy: suit_energy(card.suit()),
        money: card_money(card),
        victory_points: card_victory_points(card),
    })
}

/// Resource delta of playing hand slot `index` in `state`.
///
/// Returns `None` if there is no card in that slot, or the slot is past the
/// end of a hand.
#[must_use]
pub fn get_delta(index: usize, state: &GameState) -> Option<Resources> {
    state.card(index).and_then(|card| card_delta(card, index))
}

/// Which resources `delta` would drive below zero, or `None` if it is affordable.
#[must_use]
pub fn get_lacks(delta: &Resources, state: &GameState) -> Option<Lacks> {
    let lacks = Lacks {
        action_points: state.action_points + delta.action_points < 0,
        energy: state.energy + delta.energy < 0,
        money: state.money + delta.money < 0,
    };
    lacks.any().then_some(lacks)
}
