//! Game setup and the action state machine.
//!
//! A game is `Playing` until `EndDay` emits `Win` or `Lose`; from then on every
//! action is answered with `InvalidAction { reason: GameEnded }`.
//!
//! The engine never calls itself. When `apply` returns `DayEnd`, the caller is
//! expected to submit `BeginNextDay`, and when action points hit zero it should
//! submit `EndDay`. [`crate::driver::Session`] does both.

use std::fmt;

use im::Vector;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::event::{Event, InvalidAction};
use super::resources::{get_delta, get_lacks, Lacks};
use crate::cards::{generate_deck, shuffle, Card};
use crate::core::{Action, ConfigError, GameOutcome, GameRng, GameState, RulesConfig};

/// Face values above this cost no more energy upkeep at day start.
const UPKEEP_VALUE_CAP: u8 = 10;

/// Failure to set up a game from an explicit configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("invalid rules configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("draw pile holds {available} cards but {needed} are needed")]
    DrawPileTooSmall { needed: usize, available: usize },
}

/// Start a standard game, shuffling a full deck with `rng`.
///
/// Returns the state on day 1 together with its `DayStart` event.
pub fn new_game_state(rng: &mut GameRng) -> (GameState, Event) {
    let mut deck = generate_deck();
    shuffle(&mut deck, rng);

    let mut state = GameState::before_first_day(RulesConfig::default(), deck.into_iter().collect());
    let event = begin_day(&mut state);
    (state, event)
}

/// Start a standard game whose shuffle is determined by `seed`.
///
/// ```
/// use carpe_diem::rules::{new_game, Event};
///
/// let (state, event) = new_game(42);
/// assert_eq!(state.day, 1);
/// assert_eq!(state.day_cards.len(), 4);
/// assert!(matches!(event, Event::DayStart { .. }));
/// ```
pub fn new_game(seed: u64) -> (GameState, Event) {
    new_game_state(&mut GameRng::new(seed))
}

/// Start a standard game with an entropy-seeded shuffle.
pub fn new_random_game() -> (GameState, Event) {
    new_game_state(&mut GameRng::from_entropy())
}

/// Start a game with custom rules and an explicit draw pile.
///
/// The last element of `draw_pile` is the top of the pile, so it becomes
/// slot 0 of the first hand. The pile must hold four cards per day.
pub fn new_game_state_with(
    config: RulesConfig,
    draw_pile: impl IntoIterator<Item = Card>,
) -> Result<(GameState, Event), SetupError> {
    config.validate()?;

    let draw_pile: Vector<Card> = draw_pile.into_iter().collect();
    let needed = config.cards_needed();
    if draw_pile.len() < needed {
        return Err(SetupError::DrawPileTooSmall {
            needed,
            available: draw_pile.len(),
        });
    }

    let mut state = GameState::before_first_day(config, draw_pile);
    let event = begin_day(&mut state);
    Ok((state, event))
}

/// Deal a new hand and run the day-start energy check.
///
/// If the first card of the new hand is worth less energy than the player holds
/// (face values capped at 10), one energy is lost.
fn begin_day(state: &mut GameState) -> Event {
    if state.is_final_day() || !state.deal_hand() {
        warn!(day = state.day, pile = state.draw_pile.len(), "no day left to deal");
        return Event::InvalidAction {
            reason: InvalidAction::NoDaysLeft,
        };
    }

    state.day += 1;
    state.action_points = state.config.action_points_per_day;

    let first_card_energy = i32::from(state.day_cards[0].value().min(UPKEEP_VALUE_CAP));
    let energy_loss = i32::from(state.energy > first_card_energy);
    state.energy -= energy_loss;

    info!(day = state.day, energy_loss, hand = %HandKeys(&state.day_cards), "day started");
    Event::DayStart { energy_loss }
}

/// Validate `action` against `state`, apply it, and report what happened.
///
/// Rejected actions leave `state` untouched.
pub fn apply(action: Action, state: &mut GameState) -> Event {
    if state.game_ended {
        warn!(?action, "action submitted after the game ended");
        return Event::InvalidAction {
            reason: InvalidAction::GameEnded,
        };
    }

    let event = match action {
        Action::UseCard { index } => use_card(index, state),
        Action::Freelance => {
            if state.action_points < 1 {
                Event::NotEnoughResources { lacks: Lacks::ACTION_POINTS }
            } else {
                state.action_points -= 1;
                state.money += 1;
                Event::Freelance
            }
        }
        Action::Recuperate => {
            if state.action_points < 1 {
                Event::NotEnoughResources { lacks: Lacks::ACTION_POINTS }
            } else {
                state.action_points -= 1;
                state.energy += 1;
                Event::Recuperate
            }
        }
        Action::EndDay => end_day(state),
        Action::BeginNextDay => begin_day(state),
    };

    debug!(
        day = state.day,
        ?action,
        ?event,
        action_points = state.action_points,
        energy = state.energy,
        money = state.money,
        victory_points = state.victory_points,
        "applied action"
    );
    event
}

/// Card keys of a hand, space separated, for log fields.
struct HandKeys<'a>(&'a [Card]);

impl fmt::Display for HandKeys<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

fn use_card(index: usize, state: &mut GameState) -> Event {
    let Some(delta) = get_delta(index, state) else {
        warn!(index, "card index out of range");
        return Event::InvalidAction {
            reason: InvalidAction::CardIndexOutOfRange { index },
        };
    };
    if state.is_used(index) {
        return Event::CardAlreadyUsed;
    }

    if let Some(lacks) = get_lacks(&delta, state) {
        return Event::NotEnoughResources { lacks };
    }

    state.action_points += delta.action_points;
    state.energy += delta.energy;
    state.money += delta.money;
    state.victory_points += delta.victory_points;
    if let Some(used) = state.used.get_mut(index) {
        *used = true;
    }

    Event::UseCard
}

/// Pay upkeep, then decide whether the game is lost, won, or continues.
///
/// Upkeep is not gated by affordability and may drive resources negative.
fn end_day(state: &mut GameState) -> Event {
    state.money -= state.config.daily_money_upkeep;
    state.energy -= state.config.daily_energy_upkeep;

    if state.money < 0 || state.energy < 0 {
        state.finish(GameOutcome::Lost);
        info!(day = state.day, money = state.money, energy = state.energy, "game lost");
        return Event::Lose;
    }

    if state.is_final_day() {
        let score = state.victory_points + state.money;
        state.finish(GameOutcome::Won { score });
        info!(day = state.day, score, "game won");
        return Event::Win { score };
    }

    Event::DayEnd
}

/// Every action `apply` would accept in `state` without a rejection.
///
/// Empty once the game has ended. `BeginNextDay` is never listed: it belongs to
/// the driver, not the player.
#[must_use]
pub fn legal_actions(state: &GameState) -> SmallVec<[Action; 8]> {
    let mut actions = SmallVec::new();
    if state.game_ended {
        return actions;
    }

    for index in 0..state.day_cards.len() {
        let affordable = get_delta(index, state).is_some_and(|delta| get_lacks(&delta, state).is_none());
        if !state.is_used(index) && affordable {
            actions.push(Action::UseCard { index });
        }
    }

    if state.action_points >= 1 {
        actions.push(Action::Freelance);
        actions.push(Action::Recuperate);
    }
    actions.push(Action::EndDay);

    actions
}
