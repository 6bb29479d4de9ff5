//! Cinema seating command line: entry point.
//!
//! Loads a room from its TOML configuration, runs one command against it and
//! prints the result.
//!
//! # Usage
//!
//! ```text
//! cinema [OPTIONS] <COMMAND>
//!
//! Commands:
//!   count                                  Count available seats
//!   first   [--row R]                      First available seat
//!   find    --amount N [--row R]           First run of N adjacent free seats
//!   take    --row R --seat S --amount N    Take a run and print the map
//!   release --row R --seat S --amount N    Release a run and print the map
//!   show                                   Print the seat map
//!
//! Options:
//!   --config <PATH>    Room configuration file [default: room.toml]
//!   --rows <N,N,...>   Override the configured row lengths
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable        | Default     | Description                  |
//! |-----------------|-------------|------------------------------|
//! | `CINEMA_CONFIG` | `room.toml` | Room configuration file      |
//! | `CINEMA_ROWS`   | (none)      | Comma-separated row lengths  |
//! | `RUST_LOG`      | `info`      | Log filter (logs go to stderr) |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cinema_cli::application::execute;
use cinema_cli::domain::SeatCommand;
use cinema_cli::infrastructure::load_room;
use cinema_core::SeatPosition;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Seat availability queries and reservations for a single cinema room.
#[derive(Debug, Parser)]
#[command(
    name = "cinema",
    about = "Seat availability queries and reservations for a cinema room",
    version
)]
struct Cli {
    /// Path to the room configuration file.
    #[arg(long, default_value = "room.toml", env = "CINEMA_CONFIG")]
    config: PathBuf,

    /// Seats per row, comma separated.  Replaces the configured rows.
    #[arg(long, value_delimiter = ',', env = "CINEMA_ROWS")]
    rows: Option<Vec<usize>>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Count the available seats.
    Count,
    /// Show the first available seat, in the whole room or in one row.
    First {
        #[arg(long)]
        row: Option<usize>,
    },
    /// Find the first run of adjacent available seats.
    Find {
        /// Number of adjacent seats wanted.
        #[arg(long)]
        amount: usize,
        /// Only search this row.
        #[arg(long)]
        row: Option<usize>,
    },
    /// Take a run of seats and print the resulting map.
    Take(RunArgs),
    /// Release a run of seats and print the resulting map.
    Release(RunArgs),
    /// Print the seat map.
    Show,
}

/// A run of seats: start position plus length.
#[derive(Debug, Args)]
struct RunArgs {
    #[arg(long)]
    row: usize,
    #[arg(long)]
    seat: usize,
    #[arg(long)]
    amount: usize,
}

impl From<Command> for SeatCommand {
    fn from(command: Command) -> Self {
        match command {
            Command::Count => SeatCommand::Count,
            Command::First { row } => SeatCommand::First { row },
            Command::Find { amount, row } => SeatCommand::Find { row, amount },
            Command::Take(run) => SeatCommand::Take {
                start: SeatPosition::new(run.row, run.seat),
                amount: run.amount,
            },
            Command::Release(run) => SeatCommand::Release {
                start: SeatPosition::new(run.row, run.seat),
                amount: run.amount,
            },
            Command::Show => SeatCommand::Show,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut room = load_room(&cli.config, cli.rows).with_context(|| {
        format!("failed to load room from '{}'", cli.config.display())
    })?;

    let outcome = execute(&mut room, cli.command.into()).context("command rejected")?;
    println!("{outcome}");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
