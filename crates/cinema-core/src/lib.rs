//! # cinema-core
//!
//! Seating model for a single cinema room.
//!
//! A [`Room`] is built from a list of row lengths and owns every [`Seat`] in
//! it.  Callers ask the room for free seats (one seat, or a run of adjacent
//! seats in the same row) and then take or release runs by position.
//!
//! The crate has no I/O of its own.  The `cinema-cli` crate wraps it with a
//! configuration file and a command line.

pub mod domain;

// Re-export the most-used types at the crate root so callers can write
// `cinema_core::Room` instead of `cinema_core::domain::room::Room`.
pub use domain::room::{Room, RoomError};
pub use domain::seat::{Seat, SeatPosition};
