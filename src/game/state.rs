//! The guessing game model.
//!
//! Two logical phases: *active* while guesses remain and nobody has won, and
//! *over* after a win or once the budget hits zero. [`GameState::reset`]
//! always returns to the active phase.

use derive_more::{Display, Error};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use super::draw_result::DrawResult;
use crate::config::ValidConfiguration;

/// Error returned for a guess that cannot be judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AttemptError {
    /// The guess lies outside `[min, max]`.
    #[display("{} is outside the range [{}, {}]", guess, min, max)]
    OutOfRange {
        /// The rejected guess.
        guess: i64,
        /// Lower bound of the range.
        min: i64,
        /// Upper bound of the range.
        max: i64,
    },
}

/// Secret number, bounds and remaining attempts of one game.
///
/// The random source is injected so draws can be made reproducible.
#[derive(Debug, Clone)]
pub struct GameState<R = StdRng> {
    min: i64,
    max: i64,
    attempts: i64,
    secret: i64,
    remaining_attempts: i64,
    over: bool,
    rng: R,
}

impl GameState<StdRng> {
    /// Creates a game whose sequence of secrets is fixed by `seed`.
    #[instrument]
    pub fn seeded(config: ValidConfiguration, seed: u64) -> Self {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Creates a game and draws the first secret.
    #[instrument(skip(rng))]
    pub fn new(config: ValidConfiguration, mut rng: R) -> Self {
        let secret = rng.gen_range(config.min()..=config.max());
        info!(
            min = config.min(),
            max = config.max(),
            attempts = config.attempts(),
            "New game"
        );
        Self {
            min: config.min(),
            max: config.max(),
            attempts: config.attempts(),
            secret,
            remaining_attempts: config.attempts(),
            over: false,
            rng,
        }
    }

    /// Judges a guess.
    ///
    /// A guess in range always consumes one attempt. A correct guess wins
    /// even on the last attempt; otherwise running out of attempts loses,
    /// and only then does the guess get a direction hint.
    ///
    /// # Errors
    ///
    /// Returns [`AttemptError::OutOfRange`] without consuming an attempt if
    /// `n` lies outside `[min, max]`.
    #[instrument(skip(self), fields(remaining = self.remaining_attempts))]
    pub fn attempt(&mut self, n: i64) -> Result<DrawResult, AttemptError> {
        if n < self.min || n > self.max {
            debug!("Guess out of range");
            return Err(AttemptError::OutOfRange {
                guess: n,
                min: self.min,
                max: self.max,
            });
        }

        if self.remaining_attempts > 0 {
            self.remaining_attempts -= 1;
        }

        let result = if n == self.secret {
            DrawResult::YouWon
        } else if self.remaining_attempts == 0 {
            DrawResult::YouLost
        } else if n < self.secret {
            DrawResult::TooLow
        } else {
            DrawResult::TooHigh
        };

        if result.is_game_over() {
            self.over = true;
        }
        debug!(?result, remaining = self.remaining_attempts, "Guess judged");
        Ok(result)
    }

    /// Draws a new secret and restores the full attempt budget.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.secret = self.rng.gen_range(self.min..=self.max);
        self.remaining_attempts = self.attempts;
        self.over = false;
        info!("Game reset");
    }
}

impl<R> GameState<R> {
    /// Lower bound of the range.
    pub fn min(&self) -> i64 {
        self.min
    }

    /// Upper bound of the range.
    pub fn max(&self) -> i64 {
        self.max
    }

    /// The full attempt budget restored by every reset.
    pub fn attempts(&self) -> i64 {
        self.attempts
    }

    /// Guesses left in the current game.
    pub fn remaining_attempts(&self) -> i64 {
        self.remaining_attempts
    }

    /// The number to guess, e.g. for revealing it after a loss.
    pub fn secret(&self) -> i64 {
        self.secret
    }

    /// Returns `true` after a win or a loss, until the next reset.
    pub fn is_over(&self) -> bool {
        self.over
    }
}
