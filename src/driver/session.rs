//! One game session and its follow-up rules.
//!
//! The engine reports `DayEnd` and drained action points but never acts on
//! them. `Session` does, so presentation code only submits player choices:
//!
//! - `DayEnd` on a running game is followed at once by `BeginNextDay`
//! - running out of action points schedules an `EndDay`, which the caller
//!   fires with [`Session::run_pending`] whenever its pacing allows
//!
//! A session is one logical actor: it owns its `GameState` exclusively and
//! shares nothing with other sessions.

use tracing::{debug, trace};

use crate::cards::Card;
use crate::core::{Action, ActionRecord, GameRng, GameState, RulesConfig};
use crate::rules::{apply, new_game_state, new_game_state_with, Event, SetupError};

/// A game in progress plus its action history.
#[derive(Clone, Debug)]
pub struct Session {
    state: GameState,
    history: Vec<ActionRecord>,
    last_event: Event,
    pending: Option<Action>,
}

impl Session {
    /// Start a standard game whose shuffle is determined by `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(&mut GameRng::new(seed))
    }

    /// Start a standard game, shuffling with `rng`.
    #[must_use]
    pub fn from_rng(rng: &mut GameRng) -> Self {
        Self::from_game(new_game_state(rng))
    }

    /// Start a game with custom rules and an explicit draw pile.
    pub fn with_rules(config: RulesConfig, draw_pile: impl IntoIterator<Item = Card>) -> Result<Self, SetupError> {
        new_game_state_with(config, draw_pile).map(Self::from_game)
    }

    /// Wrap a freshly created game and the event its first day produced.
    #[must_use]
    pub fn from_game((state, event): (GameState, Event)) -> Self {
        Self {
            state,
            history: Vec::new(),
            last_event: event,
            pending: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the session, keeping only the final state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Every action applied so far, including automatic follow-ups.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// The most recent event, starting with the first `DayStart`.
    #[must_use]
    pub fn last_event(&self) -> Event {
        self.last_event
    }

    /// The follow-up action waiting to be fired, if any.
    #[must_use]
    pub fn pending(&self) -> Option<Action> {
        self.pending
    }

    /// Drop the scheduled follow-up, returning it.
    pub fn cancel_pending(&mut self) -> Option<Action> {
        self.pending.take()
    }

    /// Apply `action` and any immediate follow-up, returning every event in order.
    pub fn submit(&mut self, action: Action) -> Vec<Event> {
        let mut events = Vec::with_capacity(2);
        self.step(action, &mut events);

        if self.last_event == Event::DayEnd && self.state.is_playing() {
            self.step(Action::BeginNextDay, &mut events);
        }

        self.pending = (self.state.is_playing() && self.state.action_points == 0).then_some(Action::EndDay);
        if let Some(pending) = self.pending {
            debug!(day = self.state.day, ?pending, "follow-up scheduled");
        }
        events
    }

    /// Fire the scheduled follow-up, if any.
    pub fn run_pending(&mut self) -> Vec<Event> {
        match self.pending.take() {
            Some(action) => self.submit(action),
            None => Vec::new(),
        }
    }

    /// Submit `action` and fire follow-ups until none remain.
    ///
    /// For callers that have no reason to delay the end of a day.
    pub fn submit_settled(&mut self, action: Action) -> Vec<Event> {
        let mut events = self.submit(action);
        while self.pending.is_some() {
            events.extend(self.run_pending());
        }
        events
    }

    fn step(&mut self, action: Action, events: &mut Vec<Event>) {
        let record = ActionRecord::new(action, self.state.day, self.history.len() as u32);
        let event = apply(action, &mut self.state);
        trace!(sequence = record.sequence, ?action, ?event, "session step");

        self.history.push(record);
        self.last_event = event;
        events.push(event);
    }
}
