//! Command execution and seat map rendering.
//!
//! # Seat map format
//!
//! One line per row: the row index right-aligned to the widest index, a
//! space, then one character per seat (`.` free, `X` taken).  An empty row is
//! just its index.
//!
//! ```text
//!  0 ..X
//!  1
//!  2 XX
//! ```

use std::fmt;

use cinema_core::{Room, RoomError, Seat, SeatPosition};
use tracing::debug;

use crate::domain::SeatCommand;

const FREE: char = '.';
const TAKEN: char = 'X';

/// Result of running a [`SeatCommand`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Number of available seats.
    Count(usize),
    /// First seat of the match, or `None` when nothing matched.
    Seat(Option<SeatPosition>),
    /// Rendered seat map.
    Map(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Count(n) => write!(f, "{n} seats available"),
            Outcome::Seat(Some(at)) => write!(f, "{at}"),
            Outcome::Seat(None) => f.write_str("no matching seats available"),
            Outcome::Map(map) => f.write_str(map),
        }
    }
}

/// Runs `command` against `room`.
///
/// Queries never fail; "not found" is reported as `Outcome::Seat(None)`.
/// Take and release return the seat map after the change.
///
/// # Errors
///
/// Returns [`RoomError`] when a take or release run does not fit the room.
pub fn execute(room: &mut Room, command: SeatCommand) -> Result<Outcome, RoomError> {
    debug!(?command, "executing");
    let outcome = match command {
        SeatCommand::Count => Outcome::Count(room.count_available_seats()),
        SeatCommand::First { row: Some(row) } => {
            Outcome::Seat(room.find_first_available_seat_in_row(row).map(Seat::position))
        }
        SeatCommand::First { row: None } => {
            Outcome::Seat(room.find_first_available_seat().map(Seat::position))
        }
        SeatCommand::Find {
            row: Some(row),
            amount,
        } => Outcome::Seat(
            room.find_available_seats_in_row(row, amount)
                .map(Seat::position),
        ),
        SeatCommand::Find { row: None, amount } => {
            Outcome::Seat(room.find_available_seats(amount).map(Seat::position))
        }
        SeatCommand::Take { start, amount } => {
            room.take_seats(start, amount)?;
            Outcome::Map(render_seat_map(room))
        }
        SeatCommand::Release { start, amount } => {
            room.release_seats(start, amount)?;
            Outcome::Map(render_seat_map(room))
        }
        SeatCommand::Show => Outcome::Map(render_seat_map(room)),
    };
    Ok(outcome)
}

/// Renders the room as a seat map, one line per row.
pub fn render_seat_map(room: &Room) -> String {
    let width = room.row_count().saturating_sub(1).to_string().len();
    room.rows()
        .enumerate()
        .map(|(index, seats)| {
            if seats.is_empty() {
                return format!("{index:>width$}");
            }
            let line: String = seats
                .iter()
                .map(|seat| if seat.is_available() { FREE } else { TAKEN })
                .collect();
            format!("{index:>width$} {line}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
