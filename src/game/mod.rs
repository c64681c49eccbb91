//! Game model: the secret number and how guesses are judged.

mod draw_result;
mod state;

pub use draw_result::DrawResult;
pub use state::{AttemptError, GameState};
