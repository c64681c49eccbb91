//! Controller coordinating the game model and its views.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, info, instrument, warn};

use crate::app::terminator::Terminator;
use crate::app::view::{DrawNumberObserver, DrawNumberView, ObserverHandle};
use crate::config::{ConfigSource, Configuration, ValidConfiguration};
use crate::game::{AttemptError, DrawResult, GameState};

/// Message broadcast when a guess arrives after the game has ended.
pub const GAME_OVER_MESSAGE: &str = "The game is over. Reset to play again.";

/// Boxed view as stored by the controller.
pub type BoxedView = Box<dyn DrawNumberView>;

/// Single coordination point between a [`GameState`] and any number of views.
///
/// Construction loads the configuration, builds the model and then wires
/// every view to the controller. Afterwards views drive the game through the
/// [`DrawNumberObserver`] methods, possibly from their own threads.
///
/// The model lock and the view lock are never held at the same time. Each
/// guess is judged under the model lock and broadcast after it is released,
/// so with concurrent callers the views may see notifications out of judging
/// order. A [`GAME_OVER_MESSAGE`] can arrive before the `YouLost` of the
/// guess that ended the game.
pub struct DrawNumberApp<R = StdRng> {
    model: Mutex<GameState<R>>,
    views: Mutex<Vec<BoxedView>>,
    configuration: ValidConfiguration,
    terminator: Box<dyn Terminator>,
}

impl<R> std::fmt::Debug for DrawNumberApp<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrawNumberApp")
            .field("configuration", &self.configuration)
            .field("views", &lock(&self.views).len())
            .finish_non_exhaustive()
    }
}

impl<R> DrawNumberApp<R>
where
    R: Rng + Send + 'static,
{
    /// Wires up the views and builds the game.
    ///
    /// The configuration is loaded first and the controller is shared before
    /// any view starts, so a view may forward input from its own thread as
    /// soon as `start` returns. Configuration problems are broadcast right
    /// after the views start and before any guess is answered. An
    /// inconsistent configuration is replaced by the defaults.
    #[instrument(skip(views, rng, terminator), fields(view_count = views.len()))]
    pub fn new(
        source: ConfigSource,
        views: Vec<BoxedView>,
        rng: R,
        terminator: impl Terminator + 'static,
    ) -> Arc<Self> {
        let mut problems = Vec::new();
        let parsed = source
            .load(|e| {
                warn!(error = %e, origin = %format!("{}:{}", e.file, e.line), "Configuration problem");
                problems.push(e.to_string());
            })
            .build();
        let configuration = resolve_configuration(parsed, &mut problems);

        info!(
            min = configuration.min(),
            max = configuration.max(),
            attempts = configuration.attempts(),
            "Controller ready"
        );
        let app = Arc::new(Self {
            model: Mutex::new(GameState::new(configuration, rng)),
            views: Mutex::new(views),
            configuration,
            terminator: Box::new(terminator),
        });

        let weak: Weak<Self> = Arc::downgrade(&app);
        let observer: ObserverHandle = weak;
        {
            // Held across start-up so input forwarded by a view thread waits
            // behind the configuration reports.
            let mut views = lock(&app.views);
            for view in views.iter_mut() {
                view.set_observer(observer.clone());
                view.start();
            }
            for message in &problems {
                broadcast_error(&mut views, message);
            }
        }
        app
    }
}

impl<R> DrawNumberApp<R> {
    /// The configuration the game actually runs with.
    pub fn configuration(&self) -> ValidConfiguration {
        self.configuration
    }

    /// Guesses left in the current game.
    pub fn remaining_attempts(&self) -> i64 {
        lock(&self.model).remaining_attempts()
    }

    /// Returns `true` once the current game is won or lost.
    pub fn is_game_over(&self) -> bool {
        lock(&self.model).is_over()
    }

    /// Sends `message` to every view in registration order.
    #[instrument(skip(self))]
    pub fn display_error(&self, message: &str) {
        broadcast_error(&mut lock(&self.views), message);
    }

    /// Sends `result` to every view in registration order.
    #[instrument(skip(self))]
    fn broadcast_result(&self, result: DrawResult) {
        for view in lock(&self.views).iter_mut() {
            view.result(result);
        }
    }

    #[instrument(skip(self))]
    fn broadcast_number_incorrect(&self) {
        for view in lock(&self.views).iter_mut() {
            view.number_incorrect();
        }
    }
}

impl<R> DrawNumberObserver for DrawNumberApp<R>
where
    R: Rng + Send,
{
    #[instrument(skip(self))]
    fn new_attempt(&self, n: i64) {
        let outcome = {
            let mut model = lock(&self.model);
            if model.is_over() {
                None
            } else {
                Some(model.attempt(n))
            }
        };

        match outcome {
            None => {
                debug!("Rejecting guess, game is over");
                self.display_error(GAME_OVER_MESSAGE);
            }
            Some(Ok(result)) => self.broadcast_result(result),
            Some(Err(AttemptError::OutOfRange { .. })) => self.broadcast_number_incorrect(),
        }
    }

    #[instrument(skip(self))]
    fn reset_game(&self) {
        lock(&self.model).reset();
    }

    #[instrument(skip(self))]
    fn quit(&self) {
        info!("Quit requested");
        self.terminator.terminate();
    }
}

/// Validates the parsed configuration, falling back to the defaults.
fn resolve_configuration(parsed: Configuration, problems: &mut Vec<String>) -> ValidConfiguration {
    match parsed.validate() {
        Ok(valid) => valid,
        Err(e) => {
            warn!(error = %e, "Falling back to default configuration");
            problems.push(format!("{e}. Using defaults instead."));
            ValidConfiguration::default()
        }
    }
}

fn broadcast_error(views: &mut [BoxedView], message: &str) {
    for view in views.iter_mut() {
        view.display_error(message);
    }
}

/// Locks `mutex`, recovering the data if a view panicked while holding it.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
