//! View and observer traits connecting presentation to the controller.

use std::sync::Weak;

use crate::game::DrawResult;

/// Inbound events a view forwards to the controller.
///
/// Implemented by [`DrawNumberApp`](crate::DrawNumberApp). Views only ever
/// hold a [`Weak`] handle to it.
pub trait DrawNumberObserver: Send + Sync {
    /// The user guessed `n`.
    fn new_attempt(&self, n: i64);

    /// The user asked for a new game.
    fn reset_game(&self);

    /// The user asked to leave the application.
    fn quit(&self);
}

/// Weak handle a view uses to reach the controller.
pub type ObserverHandle = Weak<dyn DrawNumberObserver>;

/// A presentation/input collaborator notified of game events.
///
/// Notifications are delivered synchronously and in registration order.
/// Implementations must not call back into the observer from inside a
/// notification, and must swallow their own I/O failures.
pub trait DrawNumberView: Send {
    /// Receives the handle used to forward user input.
    fn set_observer(&mut self, observer: ObserverHandle);

    /// Called once, after [`set_observer`](Self::set_observer).
    fn start(&mut self);

    /// Outcome of the last guess.
    fn result(&mut self, result: DrawResult);

    /// A recoverable error to show to the user.
    fn display_error(&mut self, message: &str);

    /// The last guess was outside the allowed range.
    fn number_incorrect(&mut self);
}
