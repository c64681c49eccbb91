//! Application layer: the controller, the view contract and process exit.

mod controller;
mod terminator;
mod view;

pub use controller::{BoxedView, DrawNumberApp, GAME_OVER_MESSAGE};
pub use terminator::{ProcessExit, Terminator};
pub use view::{DrawNumberObserver, DrawNumberView, ObserverHandle};
