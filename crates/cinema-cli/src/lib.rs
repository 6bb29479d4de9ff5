//! cinema-cli library crate.
//!
//! A thin command-line front end over [`cinema_core`].
//!
//! ```text
//! [cinema-cli]
//!   ├── domain/          RoomConfig schema, SeatCommand
//!   ├── application/     execute commands, render the seat map
//!   └── infrastructure/  read the room config file
//! ```
//!
//! `domain` and `application` do no I/O; `main.rs` owns argument parsing,
//! logging setup and printing.

/// Domain layer: configuration schema and command types.
pub mod domain;

/// Application layer: command execution and seat map rendering.
pub mod application;

/// Infrastructure layer: room configuration file loading.
pub mod infrastructure;
