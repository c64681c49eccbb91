//! Draw Number - a number-guessing game with an observer-based model/view split
//!
//! A [`GameState`] holds the secret number, the allowed range and a limited
//! attempt budget. Views present the game and forward guesses to the
//! [`DrawNumberApp`] controller, which judges them and relays the outcome
//! back to every view.
//!
//! # Architecture
//!
//! - **Config**: forgiving `key: value` parser plus a validated configuration
//! - **Game**: the secret draw and the attempt state machine
//! - **App**: the controller, the view/observer contract and process exit
//! - **Views**: an interactive console and a print-stream sink
//!
//! # Example
//!
//! ```
//! use draw_number::{BoxedView, ConfigSource, DrawNumberApp, DrawNumberObserver, PrintStreamView};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let views: Vec<BoxedView> = vec![Box::new(PrintStreamView::new(std::io::sink()))];
//! let app = DrawNumberApp::new(
//!     ConfigSource::Text("minimum: 1\nmaximum: 10\nattempts: 3".to_string()),
//!     views,
//!     StdRng::seed_from_u64(1),
//!     || println!("bye"),
//! );
//! app.new_attempt(5);
//! assert_eq!(app.remaining_attempts(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod app;
mod config;
mod game;
mod views;

// Crate-level exports - Configuration
pub use config::{
    ConfigError, ConfigErrorKind, ConfigKey, ConfigParser, ConfigSource, Configuration,
    ConfigurationBuilder, DEFAULT_ATTEMPTS, DEFAULT_MAX, DEFAULT_MIN, InconsistentConfiguration,
    ValidConfiguration,
};

// Crate-level exports - Game model
pub use game::{AttemptError, DrawResult, GameState};

// Crate-level exports - Controller and view contract
pub use app::{
    BoxedView, DrawNumberApp, DrawNumberObserver, DrawNumberView, GAME_OVER_MESSAGE,
    ObserverHandle, ProcessExit, Terminator,
};

// Crate-level exports - Concrete views
pub use views::{ConsoleCommand, ConsoleView, PrintStreamView, drive_console_input};
