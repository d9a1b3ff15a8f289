//! Session orchestration and automated play tests.

use carpe_diem::{play_out, Action, Event, GameOutcome, GameRng, GreedyPolicy, RandomPolicy, Session};

// =============================================================================
// Follow-up Rules
// =============================================================================

#[test]
fn test_every_day_end_begins_a_new_day() {
    let mut session = Session::new(17);

    while session.state().is_playing() {
        let day = session.state().day;
        let events = session.submit(Action::EndDay);

        match events.as_slice() {
            [Event::DayEnd, Event::DayStart { .. }] => assert_eq!(session.state().day, day + 1),
            [Event::Lose] | [Event::Win { .. }] => assert!(session.state().game_ended),
            other => panic!("unexpected events {other:?}"),
        }
    }
    assert!(session.pending().is_none());
}

#[test]
fn test_history_records_days_and_sequence() {
    let mut session = Session::new(5);
    session.submit(Action::Freelance);
    session.submit(Action::EndDay);

    let history = session.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0].action, Action::Freelance);
    assert_eq!(history[0].day, 1);
    assert_eq!(history[1].action, Action::EndDay);
    assert_eq!(history[2].action, Action::BeginNextDay);
    assert_eq!(history[2].day, 1);
    for (i, record) in history.iter().enumerate() {
        assert_eq!(record.sequence, i as u32);
    }
}

#[test]
fn test_spending_all_action_points_waits_for_caller() {
    let mut session = Session::new(5);

    for _ in 0..5 {
        session.submit(Action::Recuperate);
    }

    // Nothing happens until the caller fires the follow-up
    assert_eq!(session.state().day, 1);
    assert_eq!(session.pending(), Some(Action::EndDay));

    let events = session.run_pending();
    assert!(matches!(events.as_slice(), [Event::DayEnd, Event::DayStart { .. }] | [Event::Lose]));
}

// =============================================================================
// Automated Play
// =============================================================================

#[test]
fn test_random_play_always_terminates() {
    for seed in 0..50 {
        let mut rng = GameRng::new(seed);
        let mut session = Session::from_rng(&mut rng);
        let mut policy = RandomPolicy::new(rng.fork());

        let outcome = play_out(&mut session, &mut policy, 1_000);

        assert!(outcome.is_some(), "seed {seed} did not finish");
        assert!(session.state().day <= 13);
        assert_eq!(outcome, session.state().outcome());
    }
}

#[test]
fn test_greedy_play_is_deterministic() {
    let mut first = Session::new(123);
    let mut second = Session::new(123);

    let a = play_out(&mut first, &mut GreedyPolicy, 1_000);
    let b = play_out(&mut second, &mut GreedyPolicy, 1_000);

    assert!(a.is_some());
    assert_eq!(a, b);
    assert_eq!(first.history(), second.history());
}

#[test]
fn test_win_score_matches_final_state() {
    for seed in 0..50 {
        let mut session = Session::new(seed);
        if let Some(GameOutcome::Won { score }) = play_out(&mut session, &mut GreedyPolicy, 1_000) {
            let state = session.state();
            assert_eq!(state.day, 13);
            assert_eq!(score, state.victory_points + state.money);
        }
    }
}
