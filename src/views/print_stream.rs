//! Output-only view writing one line per event to a stream.

use std::fs::File;
use std::io::{self, LineWriter, Stdout, Write};
use std::path::Path;

use tracing::{debug, instrument, warn};

use crate::app::{DrawNumberView, ObserverHandle};
use crate::game::DrawResult;

/// Writes every notification to `W`, ignoring user input entirely.
///
/// Suitable for echoing the game to stdout or keeping a log file.
#[derive(Debug)]
pub struct PrintStreamView<W> {
    out: W,
}

impl PrintStreamView<Stdout> {
    /// A view printing to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl PrintStreamView<LineWriter<File>> {
    /// A view writing to `path`, truncating any existing file.
    ///
    /// Lines are flushed as they are written, so the log survives an abrupt
    /// process exit.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be created.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path.as_ref())?;
        debug!("Log file opened");
        Ok(Self::new(LineWriter::new(file)))
    }
}

impl<W: Write> PrintStreamView<W> {
    /// Wraps an arbitrary writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{line}").and_then(|()| self.out.flush()) {
            warn!(error = %e, "Print stream view failed to write");
        }
    }
}

impl<W: Write + Send> DrawNumberView for PrintStreamView<W> {
    fn set_observer(&mut self, _observer: ObserverHandle) {
        // Output only: user input never comes from here.
    }

    fn start(&mut self) {
        self.print("A new game starts!");
    }

    fn result(&mut self, result: DrawResult) {
        self.print(&result.to_string());
    }

    fn display_error(&mut self, message: &str) {
        self.print(&format!("Error: {message}"));
    }

    fn number_incorrect(&mut self) {
        self.print("You must enter a number in range");
    }
}
