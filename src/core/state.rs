//! Game state: resources, the draw pile, and today's hand.
//!
//! ## GameState
//!
//! The single mutable record of a game. It is created once per game by
//! [`crate::rules::new_game_state`] (or one of its variants) and is mutated only
//! through [`crate::rules::apply`]. Resource fields are public so presentation
//! code can read them directly; writing them outside the engine is meant for
//! staging test scenarios.
//!
//! ## Invariants
//!
//! - `day_cards.len() == used.len() == 4` once the first day has begun
//! - `used[i]` only goes from `false` to `true` within a day
//! - `game_ended` only goes from `false` to `true`
//!
//! The draw pile is an `im::Vector`, so cloning a state for lookahead is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::config::RulesConfig;
use crate::cards::{Card, HAND_SIZE};
use crate::rules::Resources;

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Survived every day. Score is victory points plus leftover money.
    Won { score: i32 },
    /// Ran out of money or energy at the end of a day.
    Lost,
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Numbers this game is played with.
    pub config: RulesConfig,

    /// Current day, starting at 1.
    pub day: u32,

    pub victory_points: i32,
    pub energy: i32,
    pub money: i32,

    /// Action points left today.
    pub action_points: i32,

    /// Undealt cards. The top of the pile is the back of the vector.
    pub draw_pile: Vector<Card>,

    /// Today's hand, in slot order.
    pub day_cards: SmallVec<[Card; HAND_SIZE]>,

    /// Which hand slots have been played today.
    pub used: [bool; HAND_SIZE],

    /// Set once a Win or Lose has been emitted.
    pub game_ended: bool,

    outcome: Option<GameOutcome>,
}

impl GameState {
    /// State before the first day: starting resources, an empty hand, and
    /// `draw_pile` as given. The engine deals day 1 immediately afterwards.
    pub(crate) fn before_first_day(config: RulesConfig, draw_pile: Vector<Card>) -> Self {
        Self {
            day: 0,
            victory_points: 0,
            energy: config.starting_energy,
            money: config.starting_money,
            action_points: config.action_points_per_day,
            draw_pile,
            day_cards: SmallVec::new(),
            used: [false; HAND_SIZE],
            game_ended: false,
            outcome: None,
            config,
        }
    }

    /// Move the top `HAND_SIZE` cards of the draw pile into the hand and clear
    /// the used flags.
    ///
    /// Returns `false` without changing anything if the pile is too small.
    pub(crate) fn deal_hand(&mut self) -> bool {
        if self.draw_pile.len() < HAND_SIZE {
            return false;
        }

        self.day_cards.clear();
        for _ in 0..HAND_SIZE {
            if let Some(card) = self.draw_pile.pop_back() {
                self.day_cards.push(card);
            }
        }
        self.used = [false; HAND_SIZE];
        true
    }

    /// Mark the game as over.
    pub(crate) fn finish(&mut self, outcome: GameOutcome) {
        self.game_ended = true;
        self.outcome = Some(outcome);
    }

    /// Current resources as a single value.
    #[must_use]
    pub fn resources(&self) -> Resources {
        Resources {
            action_points: self.action_points,
            energy: self.energy,
            money: self.money,
            victory_points: self.victory_points,
        }
    }

    /// The card in hand slot `index`, if there is one.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<Card> {
        self.day_cards.get(index).copied()
    }

    /// Whether hand slot `index` has been played today.
    ///
    /// Out-of-range slots report `false`.
    #[must_use]
    pub fn is_used(&self, index: usize) -> bool {
        self.used.get(index).copied().unwrap_or(false)
    }

    /// How the game ended, or `None` while it is still being played.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        !self.game_ended
    }

    /// Whether today is the last day of the game.
    #[must_use]
    pub fn is_final_day(&self) -> bool {
        self.day >= self.config.days
    }

    /// Days still to be dealt after today.
    #[must_use]
    pub fn days_remaining(&self) -> u32 {
        self.config.days.saturating_sub(self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::generate_deck;

    fn fresh() -> GameState {
        GameState::before_first_day(RulesConfig::default(), generate_deck().into_iter().collect())
    }

    #[test]
    fn test_before_first_day() {
        let state = fresh();

        assert_eq!(state.day, 0);
        assert_eq!(state.energy, 3);
        assert_eq!(state.money, 8);
        assert_eq!(state.action_points, 5);
        assert_eq!(state.victory_points, 0);
        assert_eq!(state.draw_pile.len(), 52);
        assert!(state.day_cards.is_empty());
        assert!(state.is_playing());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_deal_hand_takes_from_top() {
        let mut state = fresh();
        let deck = generate_deck();

        assert!(state.deal_hand());

        assert_eq!(state.draw_pile.len(), 48);
        assert_eq!(state.day_cards.len(), HAND_SIZE);
        // Slot 0 is the card that was on top of the pile
        assert_eq!(state.card(0), Some(deck[51]));
        assert_eq!(state.card(3), Some(deck[48]));
        assert_eq!(state.card(4), None);
    }

    #[test]
    fn test_deal_hand_resets_used() {
        let mut state = fresh();
        state.deal_hand();
        state.used = [true, false, true, true];

        state.deal_hand();

        assert_eq!(state.used, [false; HAND_SIZE]);
        assert!(!state.is_used(0));
        assert!(!state.is_used(99));
    }

    #[test]
    fn test_deal_hand_refuses_short_pile() {
        let mut state = fresh();
        state.draw_pile = state.draw_pile.take(3);

        assert!(!state.deal_hand());
        assert_eq!(state.draw_pile.len(), 3);
    }

    #[test]
    fn test_finish() {
        let mut state = fresh();
        state.finish(GameOutcome::Won { score: 42 });

        assert!(state.game_ended);
        assert!(!state.is_playing());
        assert_eq!(state.outcome(), Some(GameOutcome::Won { score: 42 }));
    }

    #[test]
    fn test_days_remaining() {
        let mut state = fresh();
        state.day = 1;
        assert_eq!(state.days_remaining(), 12);
        assert!(!state.is_final_day());

        state.day = 13;
        assert_eq!(state.days_remaining(), 0);
        assert!(state.is_final_day());
    }
}
