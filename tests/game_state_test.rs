//! Tests for the game model state machine.

use draw_number::{AttemptError, Configuration, DrawResult, GameState, ValidConfiguration};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn config(min: i64, max: i64, attempts: i64) -> ValidConfiguration {
    Configuration::new(min, max, attempts)
        .validate()
        .expect("Consistent test config")
}

/// Some in-range number that is not the secret.
fn wrong_guess<R>(state: &GameState<R>) -> i64 {
    if state.secret() == state.min() {
        state.max()
    } else {
        state.min()
    }
}

#[test]
fn test_built_with_exact_bounds_and_budget() {
    for (min, max, attempts) in [(1, 10, 2), (-50, 50, 7), (0, 1, 1), (100, 10_000, 30)] {
        let state = GameState::new(config(min, max, attempts), StdRng::seed_from_u64(3));
        assert_eq!((state.min(), state.max()), (min, max));
        assert_eq!(state.attempts(), attempts);
        assert_eq!(state.remaining_attempts(), attempts);
        assert!((min..=max).contains(&state.secret()));
        assert!(!state.is_over());
    }
}

#[test]
fn test_default_configuration_builds_a_game() {
    let state = GameState::seeded(ValidConfiguration::default(), 0);
    assert!(state.min() < state.max());
    assert!(state.remaining_attempts() > 0);
}

#[test]
fn test_out_of_range_does_not_consume_attempts() {
    let mut state = GameState::seeded(config(1, 10, 2), 11);
    for n in [i64::MIN, -1, 0, 11, 1_000, i64::MAX] {
        assert_eq!(
            state.attempt(n),
            Err(AttemptError::OutOfRange { guess: n, min: 1, max: 10 })
        );
    }
    assert_eq!(state.remaining_attempts(), 2);
}

#[test]
fn test_bounds_are_valid_guesses() {
    let mut state = GameState::seeded(config(1, 10, 5), 5);
    assert!(state.attempt(1).is_ok());
    assert!(state.attempt(10).is_ok());
    assert_eq!(state.remaining_attempts(), 3);
}

#[test]
fn test_exhausting_the_budget_loses() {
    let attempts = 4;
    let mut state = GameState::seeded(config(1, 100, attempts), 9);
    let guess = wrong_guess(&state);

    for _ in 0..attempts - 1 {
        let result = state.attempt(guess).expect("In range");
        assert!(matches!(result, DrawResult::TooLow | DrawResult::TooHigh));
    }
    assert_eq!(state.attempt(guess), Ok(DrawResult::YouLost));
    assert_eq!(state.remaining_attempts(), 0);
    assert!(state.is_over());
}

#[test]
fn test_win_on_last_attempt_beats_exhaustion() {
    let mut state = GameState::seeded(config(1, 10, 3), 21);
    let guess = wrong_guess(&state);
    state.attempt(guess).expect("In range");
    state.attempt(guess).expect("In range");
    assert_eq!(state.remaining_attempts(), 1);

    assert_eq!(state.attempt(state.secret()), Ok(DrawResult::YouWon));
    assert_eq!(state.remaining_attempts(), 0);
}

#[test]
fn test_single_attempt_example() {
    let mut winning = GameState::seeded(config(1, 10, 1), 77);
    let secret = winning.secret();
    assert_eq!(winning.attempt(secret), Ok(DrawResult::YouWon));

    let mut losing = GameState::seeded(config(1, 10, 1), 77);
    let guess = if secret == 3 { 4 } else { 3 };
    assert_eq!(losing.attempt(guess), Ok(DrawResult::YouLost));
    assert_eq!(losing.remaining_attempts(), 0);
}

#[test]
fn test_remaining_attempts_never_negative() {
    let mut state = GameState::seeded(config(1, 10, 1), 2);
    let guess = wrong_guess(&state);
    for _ in 0..5 {
        state.attempt(guess).expect("In range");
    }
    assert_eq!(state.remaining_attempts(), 0);
}

#[test]
fn test_reset_restores_budget_and_keeps_bounds() {
    let mut state = GameState::seeded(config(-5, 5, 3), 8);
    let guess = wrong_guess(&state);
    while !state.is_over() {
        state.attempt(guess).expect("In range");
    }

    for _ in 0..50 {
        state.reset();
        assert_eq!(state.remaining_attempts(), 3);
        assert_eq!((state.min(), state.max()), (-5, 5));
        assert!((-5..=5).contains(&state.secret()));
        assert!(!state.is_over());
    }
}

#[test]
fn test_reset_redraws_secret() {
    let mut state = GameState::seeded(config(0, 1_000_000, 1), 1);
    let first = state.secret();
    let mut changed = false;
    for _ in 0..10 {
        state.reset();
        changed |= state.secret() != first;
    }
    assert!(changed, "Ten redraws from a million values all matched");
}
