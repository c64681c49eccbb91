//! Outcome of a single guess.

use derive_more::Display;
use strum::EnumIter;

/// The closed set of outcomes one attempt can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum DrawResult {
    /// The guess matched the secret.
    #[display("You won!")]
    YouWon,
    /// The guess missed and the attempt budget is exhausted.
    #[display("You lost. No attempts left.")]
    YouLost,
    /// The guess is below the secret.
    #[display("Your guess is too low, go higher.")]
    TooLow,
    /// The guess is above the secret.
    #[display("Your guess is too high, go lower.")]
    TooHigh,
}

impl DrawResult {
    /// Returns `true` if this outcome ends the game.
    pub fn is_game_over(self) -> bool {
        matches!(self, Self::YouWon | Self::YouLost)
    }
}
