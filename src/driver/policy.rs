//! Automated play.
//!
//! Policies pick one of the legal actions for a state:
//! - `RandomPolicy`: uniform over legal actions
//! - `GreedyPolicy`: a short rule list that keeps upkeep covered and chases
//!   victory points
//!
//! [`play_out`] drives a [`Session`] with a policy until the game ends.

use crate::core::{Action, GameOutcome, GameRng, GameState};
use crate::rules::{get_delta, legal_actions, Resources};

use super::session::Session;

/// Chooses the next player action.
pub trait Policy {
    /// Pick one of `legal`, or `None` to stop playing.
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Option<Action>;
}

/// Plays uniformly random legal actions.
#[derive(Clone, Debug)]
pub struct RandomPolicy {
    rng: GameRng,
}

impl RandomPolicy {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Policy for RandomPolicy {
    fn choose(&mut self, _state: &GameState, legal: &[Action]) -> Option<Action> {
        self.rng.choose(legal).copied()
    }
}

/// Rule-based play, checked in order:
///
/// 1. If money would not cover tonight's upkeep, play the best-paying card or
///    freelance.
/// 2. If energy would not cover tonight's upkeep, recuperate.
/// 3. Play the card worth the most victory points.
/// 4. Play the best-paying card.
/// 5. End the day.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    fn best_card(state: &GameState, legal: &[Action], key: impl Fn(&Resources) -> i32) -> Option<Action> {
        legal
            .iter()
            .filter_map(|&action| match action {
                Action::UseCard { index } => get_delta(index, state).map(|delta| (action, delta)),
                _ => None,
            })
            .filter(|(_, delta)| key(delta) > 0)
            .max_by_key(|(_, delta)| key(delta))
            .map(|(action, _)| action)
    }
}

impl Policy for GreedyPolicy {
    fn choose(&mut self, state: &GameState, legal: &[Action]) -> Option<Action> {
        if legal.is_empty() {
            return None;
        }
        let can = |action: Action| legal.contains(&action).then_some(action);

        if state.money < state.config.daily_money_upkeep {
            if let Some(action) = Self::best_card(state, legal, |d| d.money).or_else(|| can(Action::Freelance)) {
                return Some(action);
            }
        }
        if state.energy < state.config.daily_energy_upkeep {
            if let Some(action) = can(Action::Recuperate) {
                return Some(action);
            }
        }

        Self::best_card(state, legal, |d| d.victory_points)
            .or_else(|| Self::best_card(state, legal, |d| d.money))
            .or_else(|| can(Action::EndDay))
    }
}

/// Play `session` with `policy`, firing follow-ups immediately.
///
/// Stops after `max_steps` submissions or when the policy gives up. Returns the
/// outcome if the game finished.
pub fn play_out(session: &mut Session, policy: &mut impl Policy, max_steps: usize) -> Option<GameOutcome> {
    for _ in 0..max_steps {
        if session.state().game_ended {
            break;
        }
        if session.pending().is_some() {
            session.run_pending();
            continue;
        }

        let legal = legal_actions(session.state());
        let action = policy.choose(session.state(), &legal)?;
        session.submit(action);
    }
    session.state().outcome()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{generate_deck, Card, Suit};
    use crate::core::RulesConfig;

    fn card(value: u8, suit: Suit) -> Card {
        Card::new(value, suit).unwrap()
    }

    fn session_with_hand(hand: [Card; 4]) -> Session {
        let mut pile: Vec<Card> = generate_deck().into_iter().filter(|c| !hand.contains(c)).collect();
        pile.extend(hand.iter().rev());
        Session::with_rules(RulesConfig::default(), pile).unwrap()
    }

    #[test]
    fn test_random_policy_picks_legal() {
        let mut policy = RandomPolicy::new(GameRng::new(1));
        let session = Session::new(9);
        let legal = legal_actions(session.state());

        for _ in 0..20 {
            let action = policy.choose(session.state(), &legal).unwrap();
            assert!(legal.contains(&action));
        }
        assert_eq!(policy.choose(session.state(), &[]), None);
    }

    #[test]
    fn test_greedy_prefers_victory_points() {
        let session = session_with_hand([
            card(9, Suit::Diamonds),
            card(13, Suit::Diamonds),
            card(12, Suit::Clubs),
            card(4, Suit::Diamonds),
        ]);
        let legal = legal_actions(session.state());

        // Money 8 covers upkeep, so the king (30 points) beats the queen (20)
        assert_eq!(GreedyPolicy.choose(session.state(), &legal), Some(Action::UseCard { index: 1 }));
    }

    #[test]
    fn test_greedy_covers_upkeep_first() {
        let mut session = session_with_hand([
            card(9, Suit::Diamonds),
            card(13, Suit::Diamonds),
            card(6, Suit::Clubs),
            card(4, Suit::Diamonds),
        ]);
        session.submit(Action::UseCard { index: 1 });
        assert_eq!(session.state().money, 3);

        let legal = legal_actions(session.state());
        assert_eq!(GreedyPolicy.choose(session.state(), &legal), Some(Action::UseCard { index: 0 }));
    }

    #[test]
    fn test_greedy_ends_day_when_nothing_helps() {
        let session = Session::new(3);
        let legal = [Action::Freelance, Action::Recuperate, Action::EndDay];

        assert_eq!(GreedyPolicy.choose(session.state(), &legal), Some(Action::EndDay));
        assert_eq!(GreedyPolicy.choose(session.state(), &[]), None);
    }

    #[test]
    fn test_play_out_finishes() {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let mut session = Session::from_rng(&mut rng);
            let mut policy = RandomPolicy::new(rng.fork());

            let outcome = play_out(&mut session, &mut policy, 1_000);

            assert!(outcome.is_some(), "seed {seed} did not finish");
            assert!(session.state().game_ended);
        }
    }

    #[test]
    fn test_play_out_respects_step_limit() {
        let mut session = Session::new(4);

        assert_eq!(play_out(&mut session, &mut GreedyPolicy, 0), None);
        assert!(session.history().is_empty());
    }
}
