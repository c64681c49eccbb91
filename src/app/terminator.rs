//! The capability behind [`DrawNumberObserver::quit`](crate::DrawNumberObserver::quit).

use tracing::{info, instrument};

/// Ends the application when the user quits.
pub trait Terminator: Send + Sync {
    /// Stops the application.
    fn terminate(&self);
}

/// Exits the process with status 0.
///
/// This is abrupt: other view threads are not joined and buffered output
/// not owned by the caller may be lost. Hosts needing a graceful shutdown
/// should inject their own [`Terminator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessExit;

impl Terminator for ProcessExit {
    #[instrument]
    fn terminate(&self) {
        info!("Exiting process");
        std::process::exit(0);
    }
}

impl<F> Terminator for F
where
    F: Fn() + Send + Sync,
{
    fn terminate(&self) {
        self()
    }
}
