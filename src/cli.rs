//! Command-line interface for draw_number.

use std::path::PathBuf;

use clap::Parser;

/// Draw Number - guess the secret number before your attempts run out
#[derive(Parser, Debug)]
#[command(name = "draw_number")]
#[command(about = "Number-guessing game with console and log views", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the `key: value` game configuration
    #[arg(short, long, default_value = "config.yml")]
    pub config: PathBuf,

    /// File receiving a copy of every game event
    #[arg(long, default_value = "output.log")]
    pub log_file: PathBuf,

    /// Do not write the log file
    #[arg(long)]
    pub no_log_file: bool,

    /// Also echo game events to stdout in plain print-stream form
    #[arg(long)]
    pub echo: bool,

    /// Seed for the secret number draws (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,
}
