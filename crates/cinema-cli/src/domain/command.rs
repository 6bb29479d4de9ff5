//! Commands a user can run against a room.

use cinema_core::SeatPosition;

/// One query or mutation against a [`Room`](cinema_core::Room).
///
/// Row-scoped variants carry `Some(row)`; `None` means the whole room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatCommand {
    /// Count the available seats.
    Count,
    /// Find the first available seat.
    First { row: Option<usize> },
    /// Find the first run of `amount` adjacent available seats.
    Find { row: Option<usize>, amount: usize },
    /// Take `amount` seats starting at `start`.
    Take { start: SeatPosition, amount: usize },
    /// Release `amount` seats starting at `start`.
    Release { start: SeatPosition, amount: usize },
    /// Show the seat map.
    Show,
}
