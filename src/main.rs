//! Draw Number - interactive console game
//!
//! Wires a console view, an optional stdout echo and a log file to the game
//! controller, then hands control to the views.

#![warn(missing_docs)]

mod cli;

use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use draw_number::{BoxedView, ConfigSource, ConsoleView, DrawNumberApp, PrintStreamView, ProcessExit};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    info!(config = %cli.config.display(), "Starting Draw Number");

    let views = build_views(&cli)?;
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let _app = DrawNumberApp::new(ConfigSource::File(cli.config), views, rng, ProcessExit);

    // The console view drives the game from its own thread and `quit` exits
    // the process, so the main thread has nothing left to do.
    loop {
        thread::park();
    }
}

/// Builds the views in the order they are notified.
#[instrument(skip(cli))]
fn build_views(cli: &Cli) -> Result<Vec<BoxedView>> {
    let mut views: Vec<BoxedView> = vec![Box::new(ConsoleView::stdio())];

    if cli.echo {
        views.push(Box::new(PrintStreamView::stdout()));
    }

    if !cli.no_log_file {
        let log = PrintStreamView::create(&cli.log_file)
            .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
        views.push(Box::new(log));
    }

    info!(view_count = views.len(), "Views ready");
    Ok(views)
}

/// Logs to stderr so the console view keeps stdout to itself.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
