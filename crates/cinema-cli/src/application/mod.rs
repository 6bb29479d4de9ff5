//! Application layer for cinema-cli.
//!
//! Runs [`SeatCommand`](crate::domain::SeatCommand)s against a room and turns
//! the results into printable output.  No file access and no terminal I/O
//! happen here; `main.rs` does the printing.

pub mod seat_service;

pub use seat_service::{execute, render_seat_map, Outcome};
