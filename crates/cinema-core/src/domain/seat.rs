//! Seat domain entity.
//!
//! A seat has a fixed identity (its row and its index within that row) and a
//! single mutable flag: whether it is currently available.

use std::fmt;

/// Identity of a seat inside a room: the row and the seat index within it.
///
/// Both values are zero-based.  Positions order row-major, so sorting a list
/// of positions yields the same order the room scans seats in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatPosition {
    /// Zero-based row index.
    pub row: usize,
    /// Zero-based seat index within the row.
    pub seat: usize,
}

impl SeatPosition {
    /// Creates a position from a row and seat index.
    pub fn new(row: usize, seat: usize) -> Self {
        Self { row, seat }
    }
}

impl fmt::Display for SeatPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, seat {}", self.row, self.seat)
    }
}

/// A single seat in a room.
///
/// Seats are only created by [`Room`](super::room::Room) construction; the
/// row and seat number are private so they cannot drift from the seat's
/// position in the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    row: usize,
    seat_number: usize,
    available: bool,
}

impl Seat {
    /// Creates an available seat at the given row and seat index.
    pub(crate) fn new(row: usize, seat_number: usize) -> Self {
        Self {
            row,
            seat_number,
            available: true,
        }
    }

    /// Returns `true` if nobody holds this seat.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Marks the seat as taken.  Taking an already taken seat is a no-op.
    pub fn take(&mut self) {
        self.available = false;
    }

    /// Marks the seat as available again.  Releasing a free seat is a no-op.
    pub fn release(&mut self) {
        self.available = true;
    }

    /// Zero-based row index.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Zero-based seat index within the row.
    pub fn seat_number(&self) -> usize {
        self.seat_number
    }

    /// Returns the seat's identity as a copyable [`SeatPosition`].
    pub fn position(&self) -> SeatPosition {
        SeatPosition::new(self.row, self.seat_number)
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.position(), f)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seat_is_available() {
        let seat = Seat::new(2, 5);
        assert!(seat.is_available());
    }

    #[test]
    fn test_new_seat_keeps_row_and_seat_number() {
        let seat = Seat::new(2, 5);
        assert_eq!(seat.row(), 2);
        assert_eq!(seat.seat_number(), 5);
        assert_eq!(seat.position(), SeatPosition::new(2, 5));
    }

    #[test]
    fn test_take_marks_seat_unavailable() {
        let mut seat = Seat::new(0, 0);
        seat.take();
        assert!(!seat.is_available());
    }

    #[test]
    fn test_take_twice_leaves_seat_taken() {
        let mut seat = Seat::new(0, 0);
        seat.take();
        seat.take();
        assert!(!seat.is_available());
    }

    #[test]
    fn test_release_after_take_makes_seat_available() {
        let mut seat = Seat::new(0, 0);
        seat.take();
        seat.release();
        assert!(seat.is_available());
    }

    #[test]
    fn test_release_on_free_seat_is_noop() {
        let mut seat = Seat::new(1, 1);
        seat.release();
        assert!(seat.is_available());
    }

    #[test]
    fn test_take_does_not_change_identity() {
        let mut seat = Seat::new(3, 7);
        seat.take();
        seat.release();
        assert_eq!(seat.position(), SeatPosition::new(3, 7));
    }

    #[test]
    fn test_positions_order_row_major() {
        let mut positions = vec![
            SeatPosition::new(1, 0),
            SeatPosition::new(0, 3),
            SeatPosition::new(0, 1),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                SeatPosition::new(0, 1),
                SeatPosition::new(0, 3),
                SeatPosition::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_display_names_row_and_seat() {
        let seat = Seat::new(4, 9);
        assert_eq!(seat.to_string(), "row 4, seat 9");
    }
}
