//! Concrete views: an interactive console and a plain print stream.

mod console;
mod print_stream;

pub use console::{ConsoleCommand, ConsoleView, drive_console_input};
pub use print_stream::PrintStreamView;
