//! Interactive terminal view.
//!
//! Output goes through the [`DrawNumberView`] notifications; input is read on
//! a dedicated `console-input` thread that forwards commands to the observer.

use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use tracing::{debug, info, instrument, warn};

use crate::app::{DrawNumberView, ObserverHandle};
use crate::game::DrawResult;

/// A line of user input, interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A guess.
    Guess(i64),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
    /// Anything else, verbatim.
    Invalid(String),
}

impl ConsoleCommand {
    /// Interprets one input line. Blank lines yield `None`.
    #[instrument]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let command = match line.to_ascii_lowercase().as_str() {
            "reset" | "r" => Self::Reset,
            "quit" | "q" => Self::Quit,
            _ => match line.parse::<i64>() {
                Ok(n) => Self::Guess(n),
                Err(_) => Self::Invalid(line.to_string()),
            },
        };
        Some(command)
    }
}

/// Reads commands from `input` and forwards them to `observer`.
///
/// Returns after a quit command, at end of input (which counts as quit), or
/// as soon as the observer is gone.
#[instrument(skip_all)]
pub fn drive_console_input<I, W>(input: I, observer: &ObserverHandle, out: &Mutex<W>)
where
    I: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "Console input failed");
                break;
            }
        };
        let Some(command) = ConsoleCommand::parse(&line) else {
            continue;
        };
        let Some(observer) = observer.upgrade() else {
            debug!("Observer dropped, stopping console input");
            return;
        };
        debug!(?command, "Console command");
        match command {
            ConsoleCommand::Guess(n) => observer.new_attempt(n),
            ConsoleCommand::Reset => {
                observer.reset_game();
                write_line(out, "New game started. Make your guess.");
            }
            ConsoleCommand::Quit => {
                observer.quit();
                return;
            }
            ConsoleCommand::Invalid(text) => write_line(out, &format!("Not a number: \"{text}\"")),
        }
    }

    info!("Console input closed");
    if let Some(observer) = observer.upgrade() {
        observer.quit();
    }
}

/// Interactive view reading guesses from `I` and printing to `W`.
pub struct ConsoleView<I, W> {
    input: Option<I>,
    out: Arc<Mutex<W>>,
    observer: Option<ObserverHandle>,
}

impl ConsoleView<BufReader<Stdin>, Stdout> {
    /// A view on the process's standard input and output.
    pub fn stdio() -> Self {
        Self::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<I, W> ConsoleView<I, W>
where
    I: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Creates a view over arbitrary streams.
    pub fn new(input: I, out: W) -> Self {
        Self {
            input: Some(input),
            out: Arc::new(Mutex::new(out)),
            observer: None,
        }
    }

    fn print(&self, line: &str) {
        write_line(&*self.out, line);
    }
}

impl<I, W> std::fmt::Debug for ConsoleView<I, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleView")
            .field("input_taken", &self.input.is_none())
            .field("has_observer", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl<I, W> DrawNumberView for ConsoleView<I, W>
where
    I: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    fn set_observer(&mut self, observer: ObserverHandle) {
        self.observer = Some(observer);
    }

    #[instrument(skip(self))]
    fn start(&mut self) {
        self.print("Guess the number! Type a number to guess, `reset` for a new game, `quit` to leave.");

        let (Some(input), Some(observer)) = (self.input.take(), self.observer.clone()) else {
            warn!("Console view started without input or observer");
            return;
        };
        let out = Arc::clone(&self.out);
        let spawned = thread::Builder::new()
            .name("console-input".to_string())
            .spawn(move || drive_console_input(input, &observer, &*out));
        if let Err(e) = spawned {
            warn!(error = %e, "Could not spawn console input thread");
        }
    }

    fn result(&mut self, result: DrawResult) {
        self.print(&result.to_string());
        if result.is_game_over() {
            self.print("Type `reset` to play again or `quit` to leave.");
        }
    }

    fn display_error(&mut self, message: &str) {
        self.print(&format!("Error: {message}"));
    }

    fn number_incorrect(&mut self) {
        self.print("Incorrect number: stay within the allowed range.");
    }
}

fn write_line<W: Write>(out: &Mutex<W>, line: &str) {
    let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        warn!(error = %e, "Console view failed to write");
    }
}
