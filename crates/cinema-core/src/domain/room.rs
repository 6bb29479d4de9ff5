//! Room domain entity.
//!
//! A room is a ragged grid of seats: a fixed number of rows, each with its own
//! fixed length.  The shape never changes after construction; only seat
//! availability does.
//!
//! Queries are linear scans in row-major order (rows top to bottom, seats left
//! to right).  "Nothing found" is reported as `None`, never as an error.

use thiserror::Error;
use tracing::{debug, warn};

use super::seat::{Seat, SeatPosition};

/// Errors returned when a take/release request does not fit the room.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoomError {
    /// The requested row does not exist.
    #[error("row {row} is out of bounds: room has {rows} rows")]
    RowOutOfBounds { row: usize, rows: usize },

    /// The run starting at `seat` does not fit inside the row.
    #[error("{amount} seats from seat {seat} do not fit in row {row} of length {len}")]
    RunOutOfBounds {
        row: usize,
        seat: usize,
        amount: usize,
        len: usize,
    },
}

/// The seats of a single room.
///
/// # Example
///
/// ```rust
/// use cinema_core::Room;
///
/// let mut room = Room::new(&[3, 0, 2]);
/// assert_eq!(room.count_available_seats(), 5);
///
/// let start = room.find_available_seats(2).map(|s| s.position()).unwrap();
/// room.take_seats(start, 2).unwrap();
/// assert_eq!(room.count_available_seats(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// One entry per row; `rows[r][s]` is the seat at row `r`, seat `s`.
    rows: Vec<Vec<Seat>>,
}

impl Room {
    /// Builds a room with one row per entry of `row_lengths`.
    ///
    /// Rows may have different lengths, including zero.  Every seat starts
    /// out available.
    pub fn new(row_lengths: &[usize]) -> Self {
        let rows: Vec<Vec<Seat>> = row_lengths
            .iter()
            .enumerate()
            .map(|(row, &len)| (0..len).map(|seat| Seat::new(row, seat)).collect())
            .collect();
        debug!(rows = rows.len(), "room created");
        Self { rows }
    }

    /// Number of rows in the room.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of seats in `row`, or `None` if the row does not exist.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.rows.get(row).map(Vec::len)
    }

    /// Total number of seats, taken or not.
    pub fn capacity(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Returns the seat at `at`, or `None` if the position is outside the grid.
    pub fn seat(&self, at: SeatPosition) -> Option<&Seat> {
        self.rows.get(at.row)?.get(at.seat)
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[Seat]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Iterates over every seat in row-major order.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.rows.iter().flatten()
    }

    /// Counts the seats that are currently available.
    pub fn count_available_seats(&self) -> usize {
        self.seats().filter(|seat| seat.is_available()).count()
    }

    /// Returns the first available seat of `row`.
    ///
    /// Returns `None` if `row` does not exist or every seat in it is taken.
    pub fn find_first_available_seat_in_row(&self, row: usize) -> Option<&Seat> {
        self.rows.get(row)?.iter().find(|seat| seat.is_available())
    }

    /// Returns the first available seat in the room.
    pub fn find_first_available_seat(&self) -> Option<&Seat> {
        self.seats().find(|seat| seat.is_available())
    }

    /// Finds the first run of `amount` consecutive available seats in `row`
    /// and returns the run's first seat.
    ///
    /// Returns `None` if `row` does not exist, `amount` is zero, or the row has
    /// no such run.
    pub fn find_available_seats_in_row(&self, row: usize, amount: usize) -> Option<&Seat> {
        if amount == 0 {
            return None;
        }
        first_run(self.rows.get(row)?, amount)
    }

    /// Finds the first run of `amount` consecutive available seats anywhere in
    /// the room and returns the run's first seat.
    ///
    /// A run never continues from the end of one row into the next.  Returns
    /// `None` if `amount` is zero or no row has such a run.
    pub fn find_available_seats(&self, amount: usize) -> Option<&Seat> {
        if amount == 0 {
            return None;
        }
        self.rows.iter().find_map(|row| first_run(row, amount))
    }

    /// Marks `amount` seats starting at `at` as taken.
    ///
    /// Seats that are already taken stay taken; the call does not check
    /// availability, only bounds.  An `amount` of zero is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`RoomError::RowOutOfBounds`] if the row does not exist and
    /// [`RoomError::RunOutOfBounds`] if the run does not fit in the row.  The
    /// room is left untouched on error.
    pub fn take_seats(&mut self, at: SeatPosition, amount: usize) -> Result<(), RoomError> {
        self.run_mut(at, amount)?.iter_mut().for_each(Seat::take);
        debug!(row = at.row, seat = at.seat, amount, "seats taken");
        Ok(())
    }

    /// Marks `amount` seats starting at `at` as available.
    ///
    /// # Errors
    ///
    /// Same bounds rules as [`Room::take_seats`].
    pub fn release_seats(&mut self, at: SeatPosition, amount: usize) -> Result<(), RoomError> {
        self.run_mut(at, amount)?.iter_mut().for_each(Seat::release);
        debug!(row = at.row, seat = at.seat, amount, "seats released");
        Ok(())
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Validates that `amount` seats starting at `at` lie inside one row and
    /// returns them.
    fn run_mut(&mut self, at: SeatPosition, amount: usize) -> Result<&mut [Seat], RoomError> {
        let rows = self.rows.len();
        let Some(row) = self.rows.get_mut(at.row) else {
            warn!(row = at.row, rows, "rejected run: row out of bounds");
            return Err(RoomError::RowOutOfBounds { row: at.row, rows });
        };

        let len = row.len();
        match at.seat.checked_add(amount) {
            Some(end) if end <= len => Ok(&mut row[at.seat..end]),
            _ => {
                warn!(row = at.row, seat = at.seat, amount, len, "rejected run: out of bounds");
                Err(RoomError::RunOutOfBounds {
                    row: at.row,
                    seat: at.seat,
                    amount,
                    len,
                })
            }
        }
    }
}

/// Returns the first seat of the leftmost run of `amount` available seats.
///
/// The run counter resets on every taken seat.
fn first_run(seats: &[Seat], amount: usize) -> Option<&Seat> {
    let mut consecutive = 0;
    for (i, seat) in seats.iter().enumerate() {
        if seat.is_available() {
            consecutive += 1;
            if consecutive == amount {
                return seats.get(i + 1 - amount);
            }
        } else {
            consecutive = 0;
        }
    }
    None
}

// ── Tests ─────────────────────────────────────────────────────────────────────
